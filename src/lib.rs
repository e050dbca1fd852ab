mod components;
mod configs;
mod error;
pub mod theme;
mod utils;
#[cfg(test)]
mod tests;

pub use crate::components::ThemeToggle;
pub use crate::configs::{ToggleConfig, DEFAULT_STORAGE_KEY};
pub use crate::error::{ConfigError, SinkError, StorageError};
pub use crate::utils::*;
