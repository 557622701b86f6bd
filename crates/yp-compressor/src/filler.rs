//! Filler stripping — drop conversational padding.

use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::Lexicon;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn strip_filler(text: &str) -> String {
    strip_filler_with(text, &Lexicon::shared())
}

/// Lower-cases the text, removes every filler phrase in lexicon order, then
/// collapses whitespace. Casing is not restored.
pub fn strip_filler_with(text: &str, lexicon: &Lexicon) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = text.to_lowercase();
    for re in lexicon.fillers() {
        result = re.replace_all(&result, "").into_owned();
    }
    collapse_whitespace(&result)
}

pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}
