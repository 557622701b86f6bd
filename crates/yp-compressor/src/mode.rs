//! Mode detection — new project scaffolding vs a task in an existing project.

use crate::lexicon::Lexicon;
use yp_core::Mode;

/// Classify with the built-in indicator phrases.
pub fn detect_mode(input: &str) -> Mode {
    detect_mode_with(input, &Lexicon::shared())
}

/// Any indicator phrase appearing as a case-insensitive substring selects `NewProject`.
pub fn detect_mode_with(input: &str, lexicon: &Lexicon) -> Mode {
    let lower = input.to_lowercase();
    if lexicon.indicators().iter().any(|ind| lower.contains(ind.as_str())) {
        Mode::NewProject
    } else {
        Mode::InProject
    }
}
