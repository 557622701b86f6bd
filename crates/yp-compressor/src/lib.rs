//! Yappster prompt compressor — turns rambling requests into terse prompts.
//!
//! Stages:
//! 1. Mode detection (new project vs in-project task)
//! 2. Filler stripping — conversational padding removed, text lower-cased
//! 3. Shorthand — ordered phrase substitution plus rate collapsing (`3/10min`)
//! 4. Formatting — action detection and capitalization for in-project tasks
//!
//! Every stage is a pure function of its input and an immutable [`Lexicon`].

pub mod filler;
pub mod format;
pub mod lexicon;
pub mod mode;
pub mod pipeline;
pub mod shorthand;
pub mod tokens;

pub use lexicon::{Lexicon, LexiconSpec};
pub use mode::detect_mode;
pub use pipeline::{compress, CompressionResult, PromptCompressor};
pub use tokens::estimate_tokens;
pub use yp_core::Mode;

#[cfg(test)]
mod tests;
