use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum SinkError {
    MissingTarget(&'static str),
    Rejected(String),
}

impl Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::MissingTarget(what) => write!(f, "Missing presentation target: {}", what),
            SinkError::Rejected(msg) => write!(f, "Presentation update rejected: {}", msg),
        }
    }
}

impl std::error::Error for SinkError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SinkError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SinkError::Rejected(format!("{:?}", value))
    }
}
