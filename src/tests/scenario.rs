use std::rc::Rc;

use super::common::harness;
use crate::configs::ToggleConfig;
use crate::theme::{FixedPreference, JsonFileStore, MemoryStore, ResolvedFrom, ThemeChange, ThemeStore};
use crate::utils::Theme;

#[test]
fn test_fresh_page_with_dark_system_then_click() {
    let store = Rc::new(MemoryStore::new());
    let mut h = harness(&ToggleConfig::default(), store.clone(), &FixedPreference::dark());

    assert!(h.controller.state().is_dark);
    assert_eq!(h.controller.resolved_from(), ResolvedFrom::System);
    assert!(store.is_empty());

    let view = h.controller.attach();
    assert!(h.sink.dark.get());
    assert!(view.container_dark);
    assert_eq!(view.label, "Dark");
    assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

    h.events.borrow_mut().clear();
    let view = h.controller.toggle();

    assert!(!h.controller.state().is_dark);
    assert!(!h.sink.dark.get());
    assert!(!view.container_dark);
    assert_eq!(view.label, "Light");
    assert_eq!(view.knob_offset, 0);
    assert_eq!(view.liquid_percent, 0);
    assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(*h.events.borrow(), vec![ThemeChange { theme: Theme::Light }]);
}

#[test]
fn test_corrupt_value_is_normalized_then_overwritten() {
    let store = Rc::new(MemoryStore::with_item("theme", "sepia"));
    let h = harness(&ToggleConfig::default(), store.clone(), &FixedPreference::dark());

    assert!(!h.controller.state().is_dark);
    assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("sepia"));

    h.controller.attach();
    assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn test_desktop_restart_keeps_choice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    let config = ToggleConfig { store_path: Some(path.clone()), ..ToggleConfig::default() };

    let mut first = harness(&config, Rc::new(JsonFileStore::new(&path)), &FixedPreference::unavailable());
    first.controller.attach();
    first.controller.toggle();

    let second = harness(&config, Rc::new(JsonFileStore::new(&path)), &FixedPreference::light());
    assert!(second.controller.state().is_dark);
    assert_eq!(second.controller.resolved_from(), ResolvedFrom::Stored);
}
