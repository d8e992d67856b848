//! Formatting utilities used for CLI outputs.

use crate::models::Location;
use crate::utils::colors::{BLUE, CYAN, RESET};
use regex::Regex;
use std::sync::OnceLock;

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Location name with its display color.
pub fn describe_location(location: &Location) -> (String, &'static str) {
    match location.as_str() {
        Location::OFFICE => ("office".into(), BLUE),
        "remote" => ("remote".into(), CYAN),
        other => (other.to_string(), RESET),
    }
}

/// `describe_location` rendered with its color.
pub fn paint_location(location: &Location) -> String {
    let (label, color) = describe_location(location);
    format!("{color}{label}{RESET}")
}
