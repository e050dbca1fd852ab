//! Browser adapters backed by `web-sys`: `localStorage`, `matchMedia`, the `<html>` class list
//! and `theme-change` event dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Element, Storage};

use crate::error::{SinkError, StorageError};
use crate::theme::events::{ThemeChange, THEME_CHANGE_EVENT};
use crate::theme::preference::SystemPreference;
use crate::theme::sink::ThemeSink;
use crate::theme::store::ThemeStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl ThemeStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MediaQueryPreference;

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

fn document_root() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

/// Toggles the `dark` class on `<html>`, shared by every toggle on the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRootSink;

impl ThemeSink for DocumentRootSink {
    fn set_dark(&self, is_dark: bool) -> Result<(), SinkError> {
        let root = document_root().ok_or(SinkError::MissingTarget("document element"))?;
        root.class_list().toggle_with_force(DARK_CLASS, is_dark)?;
        Ok(())
    }
}

/// Re-dispatches changes as bubbling, composed `theme-change` `CustomEvent`s from the toggle's
/// own element, so wrappers around the control see them. Until that element is bound the
/// event starts at `<html>`.
#[derive(Debug, Clone, Default)]
pub struct DomEventBridge {
    target: Rc<RefCell<Option<Element>>>,
}

impl DomEventBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&self, element: Element) {
        *self.target.borrow_mut() = Some(element);
    }

    pub fn dispatch(&self, change: &ThemeChange) {
        if let Err(e) = self.try_dispatch(change) {
            log::warn!("Failed to dispatch {} event: {:?}", THEME_CHANGE_EVENT, e);
        }
    }

    fn target(&self) -> Option<Element> {
        let bound = self.target.borrow().clone();
        bound.or_else(|| {
            log::debug!("Toggle element not bound yet, dispatching {} on <html>", THEME_CHANGE_EVENT);
            document_root()
        })
    }

    fn try_dispatch(&self, change: &ThemeChange) -> Result<(), JsValue> {
        let target = self.target().ok_or_else(|| JsValue::from_str("no event target"))?;
        let detail = serde_json::to_string(change).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        init.set_detail(&js_sys::JSON::parse(&detail)?);

        let event = CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init)?;
        target.dispatch_event(&event)?;
        Ok(())
    }
}
