use crate::theme::preference::SystemPreference;
use crate::theme::store::ThemeStore;
use crate::utils::{ThemeState, DARK_MARKER, LIGHT_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Stored,
    System,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub state: ThemeState,
    pub source: ResolvedFrom,
}

/// Resolves the initial state: persisted value, then system preference, then light.
///
/// Never writes to `store`. A failed read counts as "nothing persisted".
pub fn resolve(store: &dyn ThemeStore, key: &str, preference: &dyn SystemPreference) -> Resolution {
    let stored = store.get_item(key).unwrap_or_else(|e| {
        log::warn!("Could not read '{}' from theme store: {}", key, e);
        None
    });

    if let Some(value) = stored {
        if value != DARK_MARKER && value != LIGHT_MARKER {
            log::debug!("Unrecognized stored theme '{}', treating as light", value);
        }
        return Resolution {
            state: ThemeState::from_stored(&value),
            source: ResolvedFrom::Stored,
        };
    }

    match preference.prefers_dark() {
        Some(is_dark) => Resolution {
            state: ThemeState::new(is_dark),
            source: ResolvedFrom::System,
        },
        None => Resolution {
            state: ThemeState::default(),
            source: ResolvedFrom::Default,
        },
    }
}
