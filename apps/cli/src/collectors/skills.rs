use tracing::{info, warn};

use crate::console::Console;
use crate::errors::AppResult;
use crate::models::Resume;
use crate::state::Session;
use crate::validation::{ask, FieldId};

/// Splits a comma-separated line into trimmed, non-blank skills, keeping order.
pub fn parse_skills(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompts for the skills line until it yields at least one skill.
pub fn add_skills<C: Console>(session: &mut Session<C>, resume: &mut Resume) -> AppResult<()> {
    if session.is_automated() {
        resume.skills = session.sample.skills.clone();
        return Ok(());
    }

    session.say("\n=== Skills ===")?;
    session.say("Enter skills (comma-separated, minimum 1 skill):")?;
    loop {
        let line = ask(session, FieldId::Skills)?;
        let skills = parse_skills(&line);
        if skills.is_empty() {
            warn!("Skills line contained no skills");
            session.say("Please enter at least one skill.")?;
            continue;
        }
        info!(count = skills.len(), "Skills collected");
        resume.skills = skills;
        return Ok(());
    }
}
