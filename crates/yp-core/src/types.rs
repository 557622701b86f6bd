use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::YpError;

/// Prompt mode: scaffolding a new project, or a task inside an existing one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    NewProject,
    #[default]
    InProject,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::NewProject, Mode::InProject];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewProject => "new-project",
            Self::InProject => "in-project",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = YpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "new-project" => Ok(Self::NewProject),
            "in-project" => Ok(Self::InProject),
            other => Err(YpError::InvalidMode(other.to_string())),
        }
    }
}
