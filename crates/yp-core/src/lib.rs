pub mod config;
pub mod error;
pub mod tools;
pub mod types;

pub use config::YappsterConfig;
pub use error::{Result, YpError};
pub use tools::{default_tools, ToolDescriptor};
pub use types::Mode;
