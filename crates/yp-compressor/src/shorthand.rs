//! Shorthand substitution — long phrases to short tokens.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::lexicon::Lexicon;

/// `3 / 10 min` → `3/10min`; `songs / 10 min` → `songs /10min`.
static RE_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:(\d+)\s*)?/\s*(\d+)\s*min").unwrap());

pub fn apply_shorthand(text: &str) -> String {
    apply_shorthand_with(text, &Lexicon::shared())
}

/// Each rule runs on the previous rule's output, so `every 10 minutes`
/// becomes `/ 10 min` and then `/10min`.
pub fn apply_shorthand_with(text: &str, lexicon: &Lexicon) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = text.to_string();
    for (re, short) in lexicon.shorthand() {
        result = re.replace_all(&result, NoExpand(short)).into_owned();
    }
    collapse_rates(&result)
}

pub fn collapse_rates(text: &str) -> String {
    RE_RATE.replace_all(text, "${1}/${2}min").into_owned()
}
