//! Output formatting for each mode.
//!
//! Both formatters take text that has already been stripped and shortened.
//! Intended shapes:
//! - in-project: `[action] [what] [where]. [constraint if critical]`
//! - new-project: `[Name]: [one-liner]. Tech: [stack]. Features: [...]. Data: [...]. Order: [...]`
//!
//! Neither shape is enforced; output is best-effort shortened text.

use tracing::debug;

use crate::lexicon::Lexicon;

/// First action verb by lexicon order (not by position in the text).
pub fn detect_action<'a>(text: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    lexicon
        .actions()
        .iter()
        .find(|verb| text.contains(verb.as_str()))
        .map(String::as_str)
}

pub fn format_in_project(text: &str) -> String {
    format_in_project_with(text, &Lexicon::shared())
}

// TODO: the detected action is only logged; decide whether it should lead the prompt.
pub fn format_in_project_with(text: &str, lexicon: &Lexicon) -> String {
    let action = detect_action(text, lexicon);
    debug!(action = action.unwrap_or("-"), "in-project action");
    capitalize_first(text)
}

pub fn format_new_project(text: &str) -> String {
    text.to_string()
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
