//! Anchored format patterns for the fields that have one.
//!
//! Each pattern must match the whole (already trimmed) value.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static field pattern must compile")
}

pub static NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z\s'\-]{2,50}$"));

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$"));

pub static PHONE: Lazy<Regex> = Lazy::new(|| compile(r"^\+?1?\d{9,15}$"));

pub static DEGREE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z\s()]{2,100}$"));

pub static INSTITUTION: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z\s'\-&]{2,100}$"));

pub static YEAR: Lazy<Regex> = Lazy::new(|| compile(r"^\d{4}$"));

/// 0.0 through 4.0 with at most two decimals. Anything above 4 is rejected here,
/// so no numeric parse is needed downstream.
pub static GPA: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:[0-3](?:\.[0-9]{1,2})?|4(?:\.0{1,2})?)$"));

pub static COMPANY: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9\s'\-&.]{2,100}$"));

pub static POSITION: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9\s'\-&]{2,100}$"));

pub static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| compile(r"^(?:0[1-9]|1[0-2])/\d{4}$"));

pub static MONTH_YEAR_OR_PRESENT: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:(?:0[1-9]|1[0-2])/\d{4}|Present)$"));

pub static LOCATION: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z\s'\-,]{2,100}$"));

pub static LINKEDIN_URL: Lazy<Regex> =
    Lazy::new(|| compile(r"^https?://([a-zA-Z0-9\-]+\.)?linkedin\.com/.*$"));

pub static WEBSITE_URL: Lazy<Regex> =
    Lazy::new(|| compile(r"^https?://[a-zA-Z0-9\-]+\.[a-zA-Z0-9.\-]+.*$"));
