//! Field-level input validation.
//! Every prompted value goes through `validator::ask`; rejected input is
//! reported and re-prompted, never propagated.

pub mod fields;
pub mod messages;
pub mod patterns;
pub mod validator;

pub use fields::FieldId;
pub use messages::MessageCatalog;
pub use validator::ask;
