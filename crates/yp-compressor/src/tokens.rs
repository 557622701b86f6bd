//! Coarse token estimation (~4 chars per token).

pub const CHARS_PER_TOKEN: usize = 4;

pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Tokens saved going from `original` to `compressed`. Negative when the
/// replacement is longer.
pub fn token_savings(original: &str, compressed: &str) -> i64 {
    estimate_tokens(original) as i64 - estimate_tokens(compressed) as i64
}
