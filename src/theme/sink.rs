use crate::error::SinkError;

/// Page-wide marker the surrounding stylesheet keys off (the root `dark` class in a browser).
pub trait ThemeSink {
    fn set_dark(&self, is_dark: bool) -> Result<(), SinkError>;
}

/// Sink for hosts without a document, e.g. desktop builds styled from component state alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ThemeSink for NoopSink {
    fn set_dark(&self, is_dark: bool) -> Result<(), SinkError> {
        log::debug!("No document root; dark={} kept on the component only", is_dark);
        Ok(())
    }
}
