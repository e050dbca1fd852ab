use std::cell::{Cell, RefCell};

use crate::error::{SinkError, StorageError};
use crate::theme::{ThemeSink, ThemeStore};

/// Stand-in for the document root: remembers the marker and every update.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub dark: Cell<bool>,
    pub calls: RefCell<Vec<bool>>,
}

impl ThemeSink for RecordingSink {
    fn set_dark(&self, is_dark: bool) -> Result<(), SinkError> {
        self.dark.set(is_dark);
        self.calls.borrow_mut().push(is_dark);
        Ok(())
    }
}

/// A page with no root element.
#[derive(Debug, Default)]
pub struct DetachedSink;

impl ThemeSink for DetachedSink {
    fn set_dark(&self, _is_dark: bool) -> Result<(), SinkError> {
        Err(SinkError::MissingTarget("document element"))
    }
}

/// Readable but full: every write fails like an exceeded quota.
#[derive(Debug, Default)]
pub struct QuotaExceededStore {
    pub value: Option<String>,
    pub write_attempts: Cell<usize>,
}

impl ThemeStore for QuotaExceededStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        Err(StorageError::Write("QuotaExceededError".to_string()))
    }
}
