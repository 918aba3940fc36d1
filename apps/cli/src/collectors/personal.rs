use tracing::info;

use crate::console::Console;
use crate::errors::AppResult;
use crate::models::{PersonalInfo, Resume};
use crate::state::Session;
use crate::validation::{ask, FieldId};

pub fn add_personal_info<C: Console>(session: &mut Session<C>, resume: &mut Resume) -> AppResult<()> {
    if session.is_automated() {
        resume.personal_info = session.sample.personal_info.clone();
        return Ok(());
    }

    session.say("\n=== Personal Information ===")?;
    resume.personal_info = PersonalInfo {
        name: ask(session, FieldId::Name)?,
        email: ask(session, FieldId::Email)?,
        phone: ask(session, FieldId::Phone)?,
        address: ask(session, FieldId::Address)?,
        linkedin: ask(session, FieldId::Linkedin)?,
        website: ask(session, FieldId::Website)?,
    };
    info!("Personal information collected");
    Ok(())
}
