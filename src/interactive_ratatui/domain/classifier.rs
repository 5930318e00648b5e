use crate::interactive_ratatui::domain::models::InputMode;
use regex::Regex;
use std::sync::LazyLock;

/// Inputs longer than this (in characters, after trimming) read as a free-text request.
pub const AI_MIN_LENGTH: usize = 20;

static DOMAIN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[a-z]{2,}").expect("domain suffix pattern is valid")
});

/// Classify raw input text. Total: every input maps to exactly one mode.
///
/// Rules, first match wins:
/// 1. `Url` when the text has a `.` and either mentions `http`, has no whitespace,
///    or carries a domain-like suffix.
/// 2. `Ai` when the text is longer than [`AI_MIN_LENGTH`].
/// 3. `Search` otherwise.
pub fn classify(text: &str) -> InputMode {
    let normalized = text.trim().to_lowercase();

    if looks_like_url(&normalized) {
        InputMode::Url
    } else if normalized.chars().count() > AI_MIN_LENGTH {
        InputMode::Ai
    } else {
        InputMode::Search
    }
}

fn looks_like_url(normalized: &str) -> bool {
    if !normalized.contains('.') {
        return false;
    }

    normalized.contains("http")
        || !normalized.chars().any(char::is_whitespace)
        || DOMAIN_SUFFIX.is_match(normalized)
}
