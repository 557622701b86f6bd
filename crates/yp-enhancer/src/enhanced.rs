//! Local compression with optional model replacement.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use yp_compressor::{estimate_tokens, CompressionResult, PromptCompressor};
use yp_core::Mode;

use crate::Enhancer;

/// Final answer for one compress request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedOutcome {
    pub prompt: String,
    pub mode: Mode,
    pub llm_used: bool,
    pub enhancer: String,
    #[serde(skip)]
    pub local: CompressionResult,
}

impl EnhancedOutcome {
    pub fn token_estimate(&self) -> usize {
        estimate_tokens(&self.prompt)
    }

    pub fn token_savings(&self) -> i64 {
        self.local.original_tokens() as i64 - self.token_estimate() as i64
    }

    /// Human-readable tool reply.
    pub fn render_markdown(&self) -> String {
        let llm = if self.llm_used { self.enhancer.as_str() } else { "local only" };
        format!(
            "**Compressed Prompt:**\n```\n{}\n```\n\n**Stats:**\n- Tokens: ~{} (saved ~{})\n- Mode: {}\n- LLM: {}",
            self.prompt,
            self.token_estimate(),
            self.token_savings(),
            self.mode,
            llm,
        )
    }
}

/// Pairs the synchronous compressor with an injected [`Enhancer`].
#[derive(Clone)]
pub struct EnhancedCompressor {
    compressor: Arc<PromptCompressor>,
    enhancer: Arc<dyn Enhancer>,
}

impl EnhancedCompressor {
    pub fn new(compressor: Arc<PromptCompressor>, enhancer: Arc<dyn Enhancer>) -> Self {
        Self { compressor, enhancer }
    }

    pub fn compressor(&self) -> &PromptCompressor {
        &self.compressor
    }

    pub fn enhancer(&self) -> &dyn Enhancer {
        self.enhancer.as_ref()
    }

    pub async fn run(&self, input: &str, mode: Option<Mode>, use_llm: bool) -> EnhancedOutcome {
        let local = self.compressor.compress(input, mode);
        let mode = local.mode();

        let mut replacement = None;
        if use_llm && self.enhancer.is_available().await {
            replacement = self
                .enhancer
                .try_enhance(input, mode)
                .await
                .filter(|r| !r.trim().is_empty());
        }
        debug!(%mode, use_llm, llm_used = replacement.is_some(), "compress request");

        let llm_used = replacement.is_some();
        EnhancedOutcome {
            prompt: replacement.unwrap_or_else(|| local.compressed().to_string()),
            mode,
            llm_used,
            enhancer: self.enhancer.name().to_string(),
            local,
        }
    }
}
