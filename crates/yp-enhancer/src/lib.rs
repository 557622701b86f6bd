//! Optional post-processing through a local language model.
//!
//! The compressor's own output is always computed first and is always a valid
//! answer. An [`Enhancer`] may offer a replacement; any failure falls back to
//! the local result.

pub mod enhanced;
pub mod ollama;

use async_trait::async_trait;
use yp_core::Mode;

pub use enhanced::{EnhancedCompressor, EnhancedOutcome};
pub use ollama::{OllamaEnhancer, OllamaError};

/// Capability interface for an external prompt rewriter.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Short name reported in tool replies.
    fn name(&self) -> &str;

    /// Liveness probe of the backing host.
    async fn is_available(&self) -> bool;

    /// A replacement prompt, or `None` to keep the local one.
    async fn try_enhance(&self, input: &str, mode: Mode) -> Option<String>;
}

/// Never available; the local result is always used.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnhancer;

#[async_trait]
impl Enhancer for NoopEnhancer {
    fn name(&self) -> &str {
        "local only"
    }

    async fn is_available(&self) -> bool {
        false
    }

    async fn try_enhance(&self, _input: &str, _mode: Mode) -> Option<String> {
        None
    }
}
