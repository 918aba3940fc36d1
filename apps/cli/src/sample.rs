//! Built-in dataset used by `--automated` runs in place of user input.

use serde::Deserialize;

use crate::errors::AppResult;
use crate::models::{EducationEntry, PersonalInfo, WorkExperienceEntry};
use crate::validation::FieldId;

const BUNDLED_SAMPLE: &str = include_str!("../data/sample_resume.json");

/// Returned for fields that have no sample value.
pub const SAMPLE_PLACEHOLDER: &str = "Sample Data";

#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub skills: Vec<String>,
}

impl SampleData {
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_SAMPLE)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let data: SampleData = serde_json::from_str(raw)?;
        tracing::debug!(
            education = data.education.len(),
            work_experience = data.work_experience.len(),
            skills = data.skills.len(),
            "Sample data decoded"
        );
        Ok(data)
    }

    /// Canned answer for a single field, drawn from the first education and
    /// work record where the field belongs to one.
    pub fn value_for(&self, field: FieldId) -> Option<&str> {
        let info = &self.personal_info;
        let education = self.education.first();
        let work = self.work_experience.first();
        let value = match field {
            FieldId::Name => &info.name,
            FieldId::Email => &info.email,
            FieldId::Phone => &info.phone,
            FieldId::Address => &info.address,
            FieldId::Linkedin => &info.linkedin,
            FieldId::Website => &info.website,
            FieldId::Degree => &education?.degree,
            FieldId::Institution => &education?.institution,
            FieldId::Year => &education?.year,
            FieldId::Gpa => &education?.gpa,
            FieldId::Honors => &education?.honors,
            FieldId::Company => &work?.company,
            FieldId::Position => &work?.position,
            FieldId::StartDate => &work?.start_date,
            FieldId::EndDate => &work?.end_date,
            FieldId::Location => &work?.location,
            FieldId::Skills => return None,
        };
        Some(value.as_str())
    }
}
