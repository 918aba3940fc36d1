use regex::Regex;

use super::patterns;

/// Every value the collectors prompt for through the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Address,
    Linkedin,
    Website,
    Degree,
    Institution,
    Year,
    Gpa,
    Honors,
    Company,
    Position,
    StartDate,
    EndDate,
    Location,
    Skills,
}

impl FieldId {
    pub const ALL: [FieldId; 17] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Linkedin,
        FieldId::Website,
        FieldId::Degree,
        FieldId::Institution,
        FieldId::Year,
        FieldId::Gpa,
        FieldId::Honors,
        FieldId::Company,
        FieldId::Position,
        FieldId::StartDate,
        FieldId::EndDate,
        FieldId::Location,
        FieldId::Skills,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::Linkedin => "linkedin",
            FieldId::Website => "website",
            FieldId::Degree => "degree",
            FieldId::Institution => "institution",
            FieldId::Year => "year",
            FieldId::Gpa => "gpa",
            FieldId::Honors => "honors",
            FieldId::Company => "company",
            FieldId::Position => "position",
            FieldId::StartDate => "start_date",
            FieldId::EndDate => "end_date",
            FieldId::Location => "location",
            FieldId::Skills => "skills",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            FieldId::Name => "Full Name: ",
            FieldId::Email => "Email: ",
            FieldId::Phone => "Phone: ",
            FieldId::Address => "Address: ",
            FieldId::Linkedin => "LinkedIn URL (optional): ",
            FieldId::Website => "Personal Website (optional): ",
            FieldId::Degree => "Degree (e.g., Bachelor of Science): ",
            FieldId::Institution => "Institution: ",
            FieldId::Year => "Year of Graduation: ",
            FieldId::Gpa => "GPA (optional): ",
            FieldId::Honors => "Honors/Awards (optional): ",
            FieldId::Company => "Company: ",
            FieldId::Position => "Position: ",
            FieldId::StartDate => "Start Date (MM/YYYY): ",
            FieldId::EndDate => "End Date (MM/YYYY or 'Present'): ",
            FieldId::Location => "Location (City, State/Country): ",
            FieldId::Skills => "Skills: ",
        }
    }

    pub fn required(self) -> bool {
        !matches!(
            self,
            FieldId::Linkedin
                | FieldId::Website
                | FieldId::Gpa
                | FieldId::Honors
                | FieldId::Location
        )
    }

    /// `None` means any non-empty value is accepted.
    pub fn pattern(self) -> Option<&'static Regex> {
        let pattern: &'static Regex = match self {
            FieldId::Name => &patterns::NAME,
            FieldId::Email => &patterns::EMAIL,
            FieldId::Phone => &patterns::PHONE,
            FieldId::Linkedin => &patterns::LINKEDIN_URL,
            FieldId::Website => &patterns::WEBSITE_URL,
            FieldId::Degree => &patterns::DEGREE,
            FieldId::Institution => &patterns::INSTITUTION,
            FieldId::Year => &patterns::YEAR,
            FieldId::Gpa => &patterns::GPA,
            FieldId::Company => &patterns::COMPANY,
            FieldId::Position => &patterns::POSITION,
            FieldId::StartDate => &patterns::MONTH_YEAR,
            FieldId::EndDate => &patterns::MONTH_YEAR_OR_PRESENT,
            FieldId::Location => &patterns::LOCATION,
            FieldId::Address | FieldId::Honors | FieldId::Skills => return None,
        };
        Some(pattern)
    }
}
