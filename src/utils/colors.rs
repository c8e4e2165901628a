//! Colour helpers for terminal output.

use crate::models::DutyStatus;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

pub fn status_colour(status: DutyStatus) -> Colour {
    let (r, g, b) = status.rgb();
    Colour::RGB(r, g, b)
}

/// Paint `text` in the status colour, or leave it plain.
pub fn paint_status(text: &str, status: DutyStatus, enabled: bool) -> String {
    if enabled {
        status_colour(status).paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn grey(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}
