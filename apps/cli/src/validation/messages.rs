use std::collections::HashMap;

use crate::errors::{AppError, AppResult};

use super::FieldId;

pub const GENERIC_REQUIRED: &str = "This field is required";
pub const GENERIC_PATTERN: &str = "Invalid format";

/// User-facing messages for one field. `None` falls back to the generic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMessages {
    pub required: Option<&'static str>,
    pub pattern: Option<&'static str>,
}

impl FieldMessages {
    const fn new(required: &'static str, pattern: &'static str) -> Self {
        Self {
            required: Some(required),
            pattern: Some(pattern),
        }
    }

    const fn generic() -> Self {
        Self {
            required: None,
            pattern: None,
        }
    }

    const fn pattern_only(pattern: &'static str) -> Self {
        Self {
            required: None,
            pattern: Some(pattern),
        }
    }
}

const DATE_MESSAGES: FieldMessages = FieldMessages::new(
    "Date is required",
    "Date must be in MM/YYYY format (e.g., 09/2023) or 'Present'",
);

const FIELD_MESSAGES: &[(FieldId, FieldMessages)] = &[
    (
        FieldId::Name,
        FieldMessages::new(
            "Name is required",
            "Name must be 2-50 characters long and contain only letters, spaces, hyphens, and apostrophes",
        ),
    ),
    (
        FieldId::Email,
        FieldMessages::new(
            "Email address is required",
            "Invalid email format. Please use format: example@domain.com",
        ),
    ),
    (
        FieldId::Phone,
        FieldMessages::new(
            "Phone number is required",
            "Phone number must contain 9-15 digits, optionally starting with '+'",
        ),
    ),
    (FieldId::Address, FieldMessages::generic()),
    (
        FieldId::Linkedin,
        FieldMessages::pattern_only("Please enter a valid LinkedIn URL"),
    ),
    (
        FieldId::Website,
        FieldMessages::pattern_only("Please enter a valid URL"),
    ),
    (
        FieldId::Degree,
        FieldMessages::new(
            "Degree information is required",
            "Degree must be 2-100 characters long and contain only letters, spaces, and parentheses",
        ),
    ),
    (
        FieldId::Institution,
        FieldMessages::new(
            "Institution name is required",
            "Institution name must be 2-100 characters and contain only letters, spaces, hyphens, and ampersands",
        ),
    ),
    (
        FieldId::Year,
        FieldMessages::new("Graduation year is required", "Year must be in YYYY format"),
    ),
    (
        FieldId::Gpa,
        FieldMessages::pattern_only("GPA must be between 0.0 and 4.0"),
    ),
    (FieldId::Honors, FieldMessages::generic()),
    (
        FieldId::Company,
        FieldMessages::new(
            "Company name is required",
            "Company name must be 2-100 characters and contain only letters, numbers, spaces, and basic punctuation",
        ),
    ),
    (
        FieldId::Position,
        FieldMessages::new(
            "Position title is required",
            "Position must be 2-100 characters and contain only letters, numbers, spaces, and basic punctuation",
        ),
    ),
    (FieldId::StartDate, DATE_MESSAGES),
    (FieldId::EndDate, DATE_MESSAGES),
    (
        FieldId::Location,
        FieldMessages::pattern_only("Please enter a valid location"),
    ),
    (FieldId::Skills, FieldMessages::generic()),
];

/// Field → message lookup, checked for completeness when loaded.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    entries: HashMap<FieldId, FieldMessages>,
}

impl MessageCatalog {
    /// Builds the catalog from the registered table.
    /// Fails if any collected field has no registration.
    pub fn load() -> AppResult<Self> {
        Self::from_table(FIELD_MESSAGES)
    }

    fn from_table(table: &[(FieldId, FieldMessages)]) -> AppResult<Self> {
        let entries: HashMap<_, _> = table.iter().copied().collect();
        if let Some(missing) = FieldId::ALL.into_iter().find(|f| !entries.contains_key(f)) {
            return Err(AppError::MissingFieldMessages(missing));
        }
        tracing::debug!("Loaded messages for {} fields", entries.len());
        Ok(Self { entries })
    }

    pub fn required_message(&self, field: FieldId) -> &'static str {
        self.entries
            .get(&field)
            .and_then(|m| m.required)
            .unwrap_or(GENERIC_REQUIRED)
    }

    pub fn pattern_message(&self, field: FieldId) -> &'static str {
        self.entries
            .get(&field)
            .and_then(|m| m.pattern)
            .unwrap_or(GENERIC_PATTERN)
    }
}
