//! Section collectors: each one fills its part of the `Resume`, either by
//! prompting through the validator or by copying the bundled sample data.

pub mod education;
pub mod experience;
pub mod personal;
pub mod skills;

pub use education::add_education;
pub use experience::add_work_experience;
pub use personal::add_personal_info;
pub use skills::add_skills;
