pub mod mocks;

use std::cell::RefCell;
use std::rc::Rc;

use crate::configs::ToggleConfig;
use crate::theme::{SystemPreference, ThemeChange, ThemeController, ThemeStore};
use mocks::RecordingSink;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Harness {
    pub controller: ThemeController,
    pub sink: Rc<RecordingSink>,
    pub events: Rc<RefCell<Vec<ThemeChange>>>,
}

pub fn harness(config: &ToggleConfig, store: Rc<dyn ThemeStore>, preference: &dyn SystemPreference) -> Harness {
    setup();
    let sink = Rc::new(RecordingSink::default());
    let events = Rc::new(RefCell::new(Vec::new()));

    let mut controller = ThemeController::new(config, store, preference, sink.clone());
    let seen = events.clone();
    controller.subscribe(move |change| seen.borrow_mut().push(*change));

    Harness { controller, sink, events }
}
