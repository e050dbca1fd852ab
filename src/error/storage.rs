use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    IO(String),
    Format(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Format(msg) => write!(f, "Format Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Format(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StorageError::Unavailable(format!("{:?}", value))
    }
}
