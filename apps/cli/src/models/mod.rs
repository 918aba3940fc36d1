pub mod resume;

pub use resume::{EducationEntry, PersonalInfo, Resume, WorkExperienceEntry};
