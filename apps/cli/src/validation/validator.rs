use std::io;

use tracing::{debug, warn};

use crate::console::Console;
use crate::errors::{AppError, AppResult};
use crate::sample::SAMPLE_PLACEHOLDER;
use crate::state::Session;

use super::{FieldId, MessageCatalog};

/// Outcome of checking one raw answer against a field's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(String),
    Rejected(&'static str),
}

/// Decides whether `raw` is acceptable for `field`.
///
/// The value is trimmed first. An empty optional value is accepted as `""`
/// without consulting the pattern; an empty required value is rejected with
/// the field's required message.
pub fn check(field: FieldId, raw: &str, messages: &MessageCatalog) -> Verdict {
    let value = raw.trim();

    if value.is_empty() {
        return if field.required() {
            Verdict::Rejected(messages.required_message(field))
        } else {
            Verdict::Accepted(String::new())
        };
    }

    match field.pattern() {
        Some(pattern) if !pattern.is_match(value) => {
            Verdict::Rejected(messages.pattern_message(field))
        }
        _ => Verdict::Accepted(value.to_string()),
    }
}

/// Prompts until `field` receives an acceptable value.
///
/// There is no retry limit. In automated mode the sample value is returned
/// without prompting; the section collectors copy whole sample records
/// instead and never call this in automated mode.
pub fn ask<C: Console>(session: &mut Session<C>, field: FieldId) -> AppResult<String> {
    if session.is_automated() {
        let value = session
            .sample
            .value_for(field)
            .unwrap_or(SAMPLE_PLACEHOLDER)
            .to_string();
        return Ok(value);
    }

    loop {
        let raw = match session.console.read_line(field.prompt()) {
            Ok(Some(line)) => line,
            Ok(None) => return Err(AppError::Cancelled),
            Err(e) if is_recoverable(&e) => {
                warn!(field = field.key(), error = %e, "Unreadable input");
                session.say(&format!("An unexpected error occurred: {e}"))?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match check(field, &raw, &session.messages) {
            Verdict::Accepted(value) => {
                debug!(field = field.key(), "Field accepted");
                return Ok(value);
            }
            Verdict::Rejected(message) => {
                warn!(field = field.key(), "Field rejected");
                session.say(&format!("Error: {message}"))?;
            }
        }
    }
}

/// Read failures that only affect the line just typed (e.g. non-UTF-8 bytes).
fn is_recoverable(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::Interrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;
    use crate::state::testing::{session, with_console};
    use crate::state::Mode;

    fn catalog() -> MessageCatalog {
        MessageCatalog::load().unwrap()
    }

    #[test]
    fn test_check_trims_surrounding_whitespace() {
        assert_eq!(
            check(FieldId::Year, "  2023 \t", &catalog()),
            Verdict::Accepted("2023".to_string())
        );
    }

    #[test]
    fn test_check_required_empty() {
        assert_eq!(
            check(FieldId::Name, "   ", &catalog()),
            Verdict::Rejected("Name is required")
        );
        assert_eq!(
            check(FieldId::Address, "", &catalog()),
            Verdict::Rejected("This field is required")
        );
    }

    #[test]
    fn test_check_optional_empty_skips_pattern() {
        for field in [
            FieldId::Linkedin,
            FieldId::Website,
            FieldId::Gpa,
            FieldId::Location,
            FieldId::Honors,
        ] {
            assert_eq!(
                check(field, "", &catalog()),
                Verdict::Accepted(String::new())
            );
        }
    }

    #[test]
    fn test_check_pattern_violation_uses_registered_message() {
        let catalog = catalog();
        let cases = [
            (FieldId::Name, "X", "Name must be 2-50"),
            (FieldId::Email, "not-an-email", "Invalid email format"),
            (FieldId::Phone, "12", "Phone number must contain"),
            (FieldId::Degree, "B.Sc.", "Degree must be"),
            (FieldId::Institution, "MIT 1", "Institution name must be"),
            (FieldId::Year, "23", "Year must be in YYYY format"),
            (FieldId::Gpa, "4.1", "GPA must be between 0.0 and 4.0"),
            (FieldId::Company, "!", "Company name must be"),
            (FieldId::Position, "?", "Position must be"),
            (FieldId::StartDate, "13/2024", "Date must be in MM/YYYY"),
            (FieldId::EndDate, "2024", "Date must be in MM/YYYY"),
            (FieldId::Location, "42", "Please enter a valid location"),
            (FieldId::Linkedin, "https://x.com/me", "Please enter a valid LinkedIn URL"),
            (FieldId::Website, "ftp://site.org", "Please enter a valid URL"),
        ];
        for (field, value, expected) in cases {
            match check(field, value, &catalog) {
                Verdict::Rejected(message) => assert!(
                    message.starts_with(expected),
                    "{field:?}: got '{message}'"
                ),
                other => panic!("{field:?} accepted '{value}': {other:?}"),
            }
        }
    }

    #[test]
    fn test_check_dates() {
        let catalog = catalog();
        assert!(matches!(check(FieldId::StartDate, "02/2024", &catalog), Verdict::Accepted(_)));
        assert!(matches!(check(FieldId::StartDate, "13/2024", &catalog), Verdict::Rejected(_)));
        assert!(matches!(check(FieldId::StartDate, "Present", &catalog), Verdict::Rejected(_)));
        assert!(matches!(check(FieldId::EndDate, "Present", &catalog), Verdict::Accepted(_)));
        assert!(matches!(check(FieldId::EndDate, "02/2024", &catalog), Verdict::Accepted(_)));
    }

    #[test]
    fn test_check_gpa() {
        let catalog = catalog();
        assert_eq!(
            check(FieldId::Gpa, "3.85", &catalog),
            Verdict::Accepted("3.85".to_string())
        );
        assert!(matches!(check(FieldId::Gpa, "4.1", &catalog), Verdict::Rejected(_)));
    }

    #[test]
    fn test_ask_reprompts_after_invalid_email() {
        let mut s = session(Mode::Interactive, ["not-an-email", "a@b.com"]);
        let email = ask(&mut s, FieldId::Email).unwrap();
        assert_eq!(email, "a@b.com");
        assert_eq!(s.console.occurrences("Error: "), 1);
        assert_eq!(
            s.console
                .occurrences("Error: Invalid email format. Please use format: example@domain.com"),
            1
        );
        assert_eq!(s.console.occurrences("Email: "), 2);
    }

    #[test]
    fn test_ask_reprompts_until_required_value_given() {
        let mut s = session(Mode::Interactive, ["", "  ", "Jane Doe"]);
        assert_eq!(ask(&mut s, FieldId::Name).unwrap(), "Jane Doe");
        assert_eq!(s.console.occurrences("Error: Name is required"), 2);
    }

    #[test]
    fn test_ask_optional_empty_returns_immediately() {
        let mut s = session(Mode::Interactive, ["", "unused"]);
        assert_eq!(ask(&mut s, FieldId::Website).unwrap(), "");
        assert_eq!(s.console.remaining(), 1);
        assert_eq!(s.console.occurrences("Error: "), 0);
    }

    #[test]
    fn test_ask_end_of_input_cancels() {
        let mut s = session(Mode::Interactive, ["bad"]);
        assert!(matches!(ask(&mut s, FieldId::Year), Err(AppError::Cancelled)));
    }

    #[test]
    fn test_ask_recovers_from_unreadable_line() {
        let console = ScriptedConsole::default()
            .then_fail(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
            .then("2021");
        let mut s = with_console(Mode::Interactive, console);
        assert_eq!(ask(&mut s, FieldId::Year).unwrap(), "2021");
        assert_eq!(
            s.console
                .occurrences("An unexpected error occurred: stream did not contain valid UTF-8"),
            1
        );
    }

    #[test]
    fn test_ask_propagates_fatal_read_error() {
        let console = ScriptedConsole::default().then_fail(io::ErrorKind::BrokenPipe, "closed");
        let mut s = with_console(Mode::Interactive, console);
        assert!(matches!(ask(&mut s, FieldId::Year), Err(AppError::Io(_))));
    }

    #[test]
    fn test_ask_automated_uses_sample_values() {
        let mut s = session(Mode::Automated, Vec::<String>::new());
        assert_eq!(ask(&mut s, FieldId::Name).unwrap(), "John Doe");
        assert_eq!(ask(&mut s, FieldId::Company).unwrap(), "Tech Corp");
        assert_eq!(ask(&mut s, FieldId::Skills).unwrap(), SAMPLE_PLACEHOLDER);
        assert!(s.console.transcript.is_empty());
    }
}
