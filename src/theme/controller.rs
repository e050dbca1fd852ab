use std::rc::Rc;

use crate::configs::ToggleConfig;
use crate::theme::events::{SubscriptionId, ThemeChange, ThemeObservers};
use crate::theme::preference::SystemPreference;
use crate::theme::presentation::Presentation;
use crate::theme::resolver::{resolve, ResolvedFrom};
use crate::theme::sink::ThemeSink;
use crate::theme::size::ToggleSize;
use crate::theme::store::ThemeStore;
use crate::utils::ThemeState;

/// One toggle instance: owns its flag and pushes it to the page marker, the store and listeners.
///
/// Instances sharing a store do not see each other's toggles until they are recreated.
pub struct ThemeController {
    state: ThemeState,
    source: ResolvedFrom,
    size: ToggleSize,
    storage_key: String,
    store: Rc<dyn ThemeStore>,
    sink: Rc<dyn ThemeSink>,
    observers: ThemeObservers,
}

impl ThemeController {
    pub fn new(
        config: &ToggleConfig,
        store: Rc<dyn ThemeStore>,
        preference: &dyn SystemPreference,
        sink: Rc<dyn ThemeSink>,
    ) -> Self {
        let resolution = resolve(store.as_ref(), &config.storage_key, preference);
        log::info!(
            "Resolved {} theme from {:?} for {} toggle",
            resolution.state.theme().as_str(),
            resolution.source,
            config.size
        );

        Self {
            state: resolution.state,
            source: resolution.source,
            size: config.size,
            storage_key: config.storage_key.clone(),
            store,
            sink,
            observers: ThemeObservers::new(),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn resolved_from(&self) -> ResolvedFrom {
        self.source
    }

    pub fn size(&self) -> ToggleSize {
        self.size
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::of(self.state, self.size)
    }

    pub fn subscribe(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// First application once the control is mounted. Unlike resolution this writes through.
    pub fn attach(&self) -> Presentation {
        self.apply()
    }

    pub fn toggle(&mut self) -> Presentation {
        self.state = self.state.toggled();
        log::debug!("Toggled to {}", self.state.theme().as_str());
        self.apply()
    }

    /// Pushes the current state to every surface. Each step is guarded on its own so a
    /// missing document root or a full store never skips the steps after it.
    pub fn apply(&self) -> Presentation {
        let theme = self.state.theme();

        if let Err(e) = self.sink.set_dark(self.state.is_dark) {
            log::warn!("Failed to update page theme marker: {}", e);
        }

        if let Err(e) = self.store.set_item(&self.storage_key, theme.as_str()) {
            log::warn!("Failed to persist theme '{}': {}", theme.as_str(), e);
        }

        self.observers.notify(&ThemeChange { theme });

        self.presentation()
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state)
            .field("source", &self.source)
            .field("size", &self.size)
            .field("storage_key", &self.storage_key)
            .field("observers", &self.observers)
            .finish()
    }
}
