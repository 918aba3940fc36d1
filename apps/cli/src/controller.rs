//! Drives one run: personal info, repeatable education and work sections,
//! skills, then prints the assembled resume.

use tracing::{error, info, warn};

use crate::collectors::{add_education, add_personal_info, add_skills, add_work_experience};
use crate::console::Console;
use crate::errors::{AppError, AppResult};
use crate::models::Resume;
use crate::render::assemble;
use crate::state::Session;

const RETRY_PROMPT: &str = "Would you like to try again? (y/n): ";

/// A collector for one repeatable section plus the wording used around it.
struct RepeatableSection<C: Console> {
    add: fn(&mut Session<C>, &mut Resume) -> AppResult<()>,
    another_prompt: &'static str,
    error_label: &'static str,
}

/// Runs the full pipeline and returns the resume text that was printed.
pub fn run<C: Console>(session: &mut Session<C>) -> AppResult<String> {
    let mut resume = Resume::default();

    if let Err(e) = add_personal_info(session, &mut resume) {
        if !e.is_cancellation() {
            session.say(&format!("Error in personal information: {e}"))?;
        }
        return Err(e);
    }

    let education = RepeatableSection {
        add: add_education,
        another_prompt: "Add another education entry? (y/n): ",
        error_label: "Error adding education entry",
    };
    let work = RepeatableSection {
        add: add_work_experience,
        another_prompt: "Add another work experience entry? (y/n): ",
        error_label: "Error adding work experience",
    };

    if session.is_automated() {
        (education.add)(session, &mut resume)?;
        (work.add)(session, &mut resume)?;
    } else {
        collect_repeatable(session, &mut resume, &education)?;
        collect_repeatable(session, &mut resume, &work)?;
    }

    add_skills(session, &mut resume)?;

    let text = assemble(&resume);
    info!(
        education = resume.education.len(),
        work_experience = resume.work_experience.len(),
        skills = resume.skills.len(),
        "Resume assembled"
    );
    session.say("\nGenerating Resume...\n")?;
    session.say(&text)?;
    Ok(text)
}

/// Collects entries until the user declines another one.
/// A failed entry, or a failed "add another" answer, is reported and may be
/// retried; declining the retry moves on. Cancellation always propagates.
fn collect_repeatable<C: Console>(
    session: &mut Session<C>,
    resume: &mut Resume,
    section: &RepeatableSection<C>,
) -> AppResult<()> {
    loop {
        let outcome = match (section.add)(session, resume) {
            Ok(()) => session.confirm(section.another_prompt),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) if e.is_cancellation() => return Err(e),
            Err(e) => {
                warn!(error = %e, "{}", section.error_label);
                session.say(&format!("{}: {e}", section.error_label))?;
                if !session.confirm(RETRY_PROMPT)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Prints the closing message for a finished run. Errors are reported, not
/// returned; only a failure to write the report itself propagates.
pub fn report<C: Console>(session: &mut Session<C>, result: AppResult<String>) -> AppResult<()> {
    match result {
        Ok(_) => {
            info!("Resume generated");
            Ok(())
        }
        Err(AppError::Cancelled) => session.say(&format!("\n{}", AppError::Cancelled)),
        Err(e) => {
            error!(error = %e, "Resume generation failed");
            session.say(&format!("\nAn error occurred while generating the resume: {e}"))
        }
    }
}
