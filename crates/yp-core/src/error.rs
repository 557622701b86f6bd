use thiserror::Error;

#[derive(Error, Debug)]
pub enum YpError {
    #[error("Unknown mode: {0} (expected new-project or in-project)")]
    InvalidMode(String),
    #[error("Lexicon error: {0}")]
    Lexicon(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Enhancer error: {0}")]
    Enhancer(String),
}

pub type Result<T> = std::result::Result<T, YpError>;
