//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;
use yp_compressor::PromptCompressor;
use yp_core::{YappsterConfig, YpError};
use yp_enhancer::{EnhancedCompressor, Enhancer, NoopEnhancer, OllamaEnhancer};

#[derive(Clone)]
pub struct AppState {
    pub runner: EnhancedCompressor,
    pub start_time: Instant,
}

impl AppState {
    /// Local compression only.
    pub fn new() -> Self {
        Self::with_enhancer(Arc::new(NoopEnhancer))
    }

    pub fn with_enhancer(enhancer: Arc<dyn Enhancer>) -> Self {
        Self {
            runner: EnhancedCompressor::new(Arc::new(PromptCompressor::new()), enhancer),
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &YappsterConfig) -> yp_core::Result<Self> {
        if !config.enhancer.enabled {
            return Ok(Self::new());
        }
        let ollama = OllamaEnhancer::new(&config.enhancer).map_err(|e| YpError::Enhancer(e.to_string()))?;
        Ok(Self::with_enhancer(Arc::new(ollama)))
    }

    pub fn enhancer(&self) -> &dyn Enhancer {
        self.runner.enhancer()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
