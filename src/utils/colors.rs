//! ANSI color helpers for terminal output.

use ansi_term::Colour;

/// Weekend dates are dimmed, weekdays keep the default colour.
pub fn colorize_date(value: &str, weekend: bool) -> String {
    if weekend {
        Colour::Fixed(244).paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Empty or "--:--" fields are printed grey.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        Colour::Fixed(244).paint("--:--").to_string()
    } else {
        value.to_string()
    }
}

pub fn colorize_total(value: &str) -> String {
    Colour::Cyan.bold().paint(value).to_string()
}
