use anyhow::{bail, Context, Result};

/// Runtime configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Upper bound on responsibility lines per work entry. `None` is unbounded.
    pub max_description_lines: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "warn".to_string(),
            max_description_lines: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_description_lines = match std::env::var("RESUME_MAX_DESCRIPTION_LINES") {
            Ok(raw) => Some(parse_line_cap(&raw).with_context(|| {
                format!("RESUME_MAX_DESCRIPTION_LINES has invalid value '{raw}'")
            })?),
            Err(_) => None,
        };

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
            max_description_lines,
        })
    }
}

fn parse_line_cap(raw: &str) -> Result<usize> {
    let cap = raw
        .trim()
        .parse::<usize>()
        .context("must be a positive integer")?;
    if cap == 0 {
        bail!("must be greater than zero");
    }
    Ok(cap)
}
