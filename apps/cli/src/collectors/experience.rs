use tracing::{info, warn};

use crate::console::Console;
use crate::errors::AppResult;
use crate::models::{Resume, WorkExperienceEntry};
use crate::render::format_work_experience;
use crate::state::Session;
use crate::validation::{ask, FieldId};

const RESPONSIBILITY_PROMPT: &str = "- ";

/// Collects one work entry (every sample entry in automated mode) and stores
/// its rendered text.
pub fn add_work_experience<C: Console>(
    session: &mut Session<C>,
    resume: &mut Resume,
) -> AppResult<()> {
    if session.is_automated() {
        resume.work_experience.extend(
            session
                .sample
                .work_experience
                .iter()
                .map(format_work_experience),
        );
        return Ok(());
    }

    session.say("\n=== Work Experience ===")?;
    let mut entry = WorkExperienceEntry {
        company: ask(session, FieldId::Company)?,
        position: ask(session, FieldId::Position)?,
        start_date: ask(session, FieldId::StartDate)?,
        end_date: ask(session, FieldId::EndDate)?,
        location: ask(session, FieldId::Location)?,
        description: Vec::new(),
    };
    entry.description = read_responsibilities(session)?;

    resume.work_experience.push(format_work_experience(&entry));
    info!(
        total = resume.work_experience.len(),
        bullets = entry.description.len(),
        "Work experience entry added"
    );
    Ok(())
}

/// Reads responsibility lines until a blank one, or until the configured cap.
fn read_responsibilities<C: Console>(session: &mut Session<C>) -> AppResult<Vec<String>> {
    session.say("Enter job responsibilities (one per line, press Enter twice to finish):")?;
    let cap = session.config.max_description_lines;
    let mut lines = Vec::new();

    loop {
        if cap.is_some_and(|max| lines.len() >= max) {
            warn!(cap = ?cap, "Responsibility limit reached");
            session.say(&format!(
                "Reached the limit of {} responsibilities.",
                lines.len()
            ))?;
            break;
        }
        let line = session.read(RESPONSIBILITY_PROMPT)?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}
