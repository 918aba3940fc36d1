use serde::Deserialize;

/// Contact block. Optional fields hold `""` when skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub honors: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Everything collected during one run.
/// Education and work entries are stored already rendered to display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
    pub skills: Vec<String>,
}
