//! Plain-text rendering of resume sections and the final document.

pub mod assembler;
pub mod sections;

pub use assembler::assemble;
pub use sections::{format_education, format_work_experience};
