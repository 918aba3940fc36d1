use crate::models::{EducationEntry, WorkExperienceEntry};

pub const BULLET: &str = "•";

/// `"<degree> - <institution> (<year>)"`, with `" | GPA: <gpa>"` when a GPA was given.
/// Honors are collected but not rendered.
pub fn format_education(entry: &EducationEntry) -> String {
    let mut line = format!("{} - {} ({})", entry.degree, entry.institution, entry.year);
    if !entry.gpa.is_empty() {
        line.push_str(&format!(" | GPA: {}", entry.gpa));
    }
    line
}

/// Title line, date range line, then one bullet per responsibility.
/// Location is collected but not rendered.
pub fn format_work_experience(entry: &WorkExperienceEntry) -> String {
    let mut text = format!(
        "{} at {}\n{} - {}",
        entry.position, entry.company, entry.start_date, entry.end_date
    );
    for item in &entry.description {
        text.push('\n');
        text.push_str(BULLET);
        text.push(' ');
        text.push_str(item);
    }
    text
}
