//! Compression pipeline — classify, strip, shorten, format.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use yp_core::Mode;

use crate::lexicon::Lexicon;
use crate::{filler, format, mode, shorthand, tokens};

/// Result of one compression call. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    original: String,
    compressed: String,
    mode: Mode,
    token_estimate: usize,
}

impl CompressionResult {
    fn new(original: &str, compressed: String, mode: Mode) -> Self {
        let token_estimate = tokens::estimate_tokens(&compressed);
        Self {
            original: original.to_string(),
            compressed,
            mode,
            token_estimate,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn compressed(&self) -> &str {
        &self.compressed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn token_estimate(&self) -> usize {
        self.token_estimate
    }

    pub fn original_tokens(&self) -> usize {
        tokens::estimate_tokens(&self.original)
    }

    pub fn token_savings(&self) -> i64 {
        self.original_tokens() as i64 - self.token_estimate as i64
    }

    pub fn into_compressed(self) -> String {
        self.compressed
    }
}

/// The prompt compressor. Holds only an immutable lexicon, so one instance
/// can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct PromptCompressor {
    lexicon: Arc<Lexicon>,
}

impl PromptCompressor {
    pub fn new() -> Self {
        Self { lexicon: Lexicon::shared() }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon: Arc::new(lexicon) }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn detect_mode(&self, input: &str) -> Mode {
        mode::detect_mode_with(input, &self.lexicon)
    }

    pub fn strip_filler(&self, text: &str) -> String {
        filler::strip_filler_with(text, &self.lexicon)
    }

    pub fn apply_shorthand(&self, text: &str) -> String {
        shorthand::apply_shorthand_with(text, &self.lexicon)
    }

    /// Filler stripping followed by shorthand.
    pub fn clean(&self, input: &str) -> String {
        let stripped = self.strip_filler(input);
        self.apply_shorthand(&stripped)
    }

    pub fn compress_in_project(&self, input: &str) -> String {
        format::format_in_project_with(&self.clean(input), &self.lexicon)
    }

    pub fn compress_new_project(&self, input: &str) -> String {
        format::format_new_project(&self.clean(input))
    }

    /// Compress `input`. An explicit `mode` skips detection entirely.
    pub fn compress(&self, input: &str, mode: Option<Mode>) -> CompressionResult {
        let mode = mode.unwrap_or_else(|| self.detect_mode(input));
        let compressed = match mode {
            Mode::NewProject => self.compress_new_project(input),
            Mode::InProject => self.compress_in_project(input),
        };
        debug!(%mode, original_len = input.len(), compressed_len = compressed.len(), "compressed prompt");
        CompressionResult::new(input, compressed, mode)
    }
}

impl Default for PromptCompressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress with the built-in lexicon.
pub fn compress(input: &str, mode: Option<Mode>) -> CompressionResult {
    PromptCompressor::new().compress(input, mode)
}
