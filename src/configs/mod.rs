mod toggle_config;

pub use toggle_config::{ToggleConfig, DEFAULT_STORAGE_KEY};
