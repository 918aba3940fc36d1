use tracing::info;

use crate::console::Console;
use crate::errors::AppResult;
use crate::models::{EducationEntry, Resume};
use crate::render::format_education;
use crate::state::Session;
use crate::validation::{ask, FieldId};

/// Collects one education entry (every sample entry in automated mode) and
/// stores its rendered line.
pub fn add_education<C: Console>(session: &mut Session<C>, resume: &mut Resume) -> AppResult<()> {
    if session.is_automated() {
        resume
            .education
            .extend(session.sample.education.iter().map(format_education));
        return Ok(());
    }

    session.say("\n=== Education Details ===")?;
    let entry = EducationEntry {
        degree: ask(session, FieldId::Degree)?,
        institution: ask(session, FieldId::Institution)?,
        year: ask(session, FieldId::Year)?,
        gpa: ask(session, FieldId::Gpa)?,
        honors: ask(session, FieldId::Honors)?,
    };
    resume.education.push(format_education(&entry));
    info!(total = resume.education.len(), "Education entry added");
    Ok(())
}
