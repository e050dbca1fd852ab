mod config;
mod sink;
mod storage;

pub use config::ConfigError;
pub use sink::SinkError;
pub use storage::StorageError;
