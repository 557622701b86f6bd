use serde::{Deserialize, Serialize};

use crate::error::{Result, YpError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YappsterConfig {
    pub server: ServerConfig,
    pub enhancer: EnhancerConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the optional local-model enhancement step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerConfig {
    pub enabled: bool,
    pub host: String,
    pub model: String,
    pub temperature: f32,
    pub num_predict: u32,
    pub timeout_secs: u64,
}

impl Default for YappsterConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8787,
            },
            enhancer: EnhancerConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "http://localhost:11434".into(),
            model: "qwen2.5:latest".into(),
            temperature: 0.3,
            num_predict: 200,
            timeout_secs: 30,
        }
    }
}

impl YappsterConfig {
    /// Defaults overlaid with `YAPPSTER_*`, `OLLAMA_*` and `RUST_LOG` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("YAPPSTER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("YAPPSTER_PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| YpError::Config(format!("YAPPSTER_PORT must be a port number, got '{port}'")))?;
        }
        if let Some(flag) = lookup("YAPPSTER_LLM") {
            config.enhancer.enabled = parse_bool(&flag)
                .ok_or_else(|| YpError::Config(format!("YAPPSTER_LLM must be a boolean, got '{flag}'")))?;
        }
        if let Some(host) = lookup("OLLAMA_HOST") {
            config.enhancer.host = normalize_host(&host);
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            config.enhancer.model = model;
        }
        if let Some(level) = lookup("RUST_LOG") {
            config.log_level = level;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// OLLAMA_HOST is commonly set as a bare host:port.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}
