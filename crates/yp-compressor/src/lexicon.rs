//! Ordered phrase tables driving every pipeline stage.
//!
//! Order is significant everywhere: fillers are removed in sequence, shorthand
//! rules run on the output of the previous rule, and the first matching action
//! verb by list position wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use yp_core::{Result, YpError};

pub const FILLER_WORDS: &[&str] = &[
    "please", "could you", "can you", "i want", "i need", "i would like",
    "hey", "hi", "hello", "thanks", "thank you", "basically", "actually",
    "just", "really", "very", "maybe", "perhaps", "kind of", "sort of",
    "like", "you know", "i think", "i guess", "i suppose", "if possible",
    "would be great", "would be nice", "it would be", "make sure",
];

pub const SHORTHAND: &[(&str, &str)] = &[
    ("per minute", "/min"),
    ("per hour", "/hr"),
    ("per day", "/day"),
    ("per second", "/sec"),
    ("per user", "/user"),
    ("per viewer", "/viewer"),
    ("minutes", "min"),
    ("seconds", "sec"),
    ("hours", "hr"),
    ("error message", "error"),
    ("proper error", "error"),
    ("every", "/"),
];

pub const NEW_PROJECT_INDICATORS: &[&str] = &[
    "new project", "create app", "build app", "new app", "start project",
    "from scratch", "tech stack", "architecture", "scaffold",
];

pub const ACTION_VERBS: &[&str] = &[
    "add", "fix", "update", "remove", "delete", "change", "modify",
    "implement", "create", "refactor",
];

/// Uncompiled phrase tables, e.g. loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconSpec {
    pub fillers: Vec<String>,
    pub shorthand: Vec<(String, String)>,
    pub new_project_indicators: Vec<String>,
    pub action_verbs: Vec<String>,
}

impl Default for LexiconSpec {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            fillers: owned(FILLER_WORDS),
            shorthand: SHORTHAND
                .iter()
                .map(|(long, short)| (long.to_string(), short.to_string()))
                .collect(),
            new_project_indicators: owned(NEW_PROJECT_INDICATORS),
            action_verbs: owned(ACTION_VERBS),
        }
    }
}

/// Compiled, immutable lexicon. Safe to share across threads.
#[derive(Debug)]
pub struct Lexicon {
    fillers: Vec<Regex>,
    shorthand: Vec<(Regex, String)>,
    indicators: Vec<String>,
    actions: Vec<String>,
}

static DEFAULT_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    Arc::new(Lexicon::compile(&LexiconSpec::default()).expect("built-in lexicon compiles"))
});

impl Lexicon {
    pub fn compile(spec: &LexiconSpec) -> Result<Self> {
        let fillers = spec
            .fillers
            .iter()
            .filter(|f| !f.trim().is_empty())
            .map(|filler| build(&format!(r"(?i)\b{}\b", regex::escape(filler))))
            .collect::<Result<Vec<_>>>()?;

        // Long forms match anywhere, not only on word boundaries.
        let shorthand = spec
            .shorthand
            .iter()
            .filter(|(long, _)| !long.is_empty())
            .map(|(long, short)| -> Result<(Regex, String)> {
                Ok((build(&format!("(?i){}", regex::escape(long)))?, short.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fillers,
            shorthand,
            indicators: lowered(&spec.new_project_indicators),
            actions: lowered(&spec.action_verbs),
        })
    }

    /// The built-in English lexicon, compiled once per process.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    pub fn fillers(&self) -> &[Regex] {
        &self.fillers
    }

    pub fn shorthand(&self) -> &[(Regex, String)] {
        &self.shorthand
    }

    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

/// Phrases are escaped before they get here, so the only reachable failure is
/// the regex size limit on an oversized phrase.
fn build(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        let head: String = pattern.chars().take(64).collect();
        YpError::Lexicon(format!("{head}: {e}"))
    })
}

fn lowered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
