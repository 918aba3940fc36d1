use crate::models::Resume;

pub const SEPARATOR_WIDTH: usize = 50;

/// Renders the full plain-text resume.
///
/// Layout, top to bottom:
/// - blank line, name, `email | phone`, address
/// - `Education:` heading, separator, one line per entry
/// - `Work Experience:` heading, separator, each entry followed by a blank line
/// - `Skills:` heading, separator, skills joined by `", "`
///
/// Output depends only on `resume`; no wrapping or truncation is applied.
pub fn assemble(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let separator = "-".repeat(SEPARATOR_WIDTH);

    let mut out = format!(
        "\n{}\n{} | {}\n{}\n",
        info.name, info.email, info.phone, info.address
    );

    out.push_str(&format!("\nEducation:\n{separator}\n"));
    for entry in &resume.education {
        out.push_str(entry);
        out.push('\n');
    }

    out.push_str(&format!("\nWork Experience:\n{separator}\n"));
    for entry in &resume.work_experience {
        out.push_str(entry);
        out.push_str("\n\n");
    }

    out.push_str(&format!("\nSkills:\n{separator}\n"));
    out.push_str(&resume.skills.join(", "));
    out.push('\n');

    out
}
