use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownSize(String),
    Parse(String),
    IO(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownSize(value) => {
                write!(f, "Unknown toggle size '{}' (expected small, medium or large)", value)
            }
            ConfigError::Parse(msg) => write!(f, "Config Parse Error: {}", msg),
            ConfigError::IO(msg) => write!(f, "Config I/O Error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::IO(error.to_string())
    }
}
