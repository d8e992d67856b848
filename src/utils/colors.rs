/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Office count color: zero → grey, otherwise green.
pub fn color_for_count(value: u32) -> &'static str {
    if value == 0 { GREY } else { GREEN }
}

/// Grey out placeholder values ("", "--", "no data").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "no data" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
