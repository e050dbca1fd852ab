use serde::{Deserialize, Serialize};

use crate::utils::Theme;

pub const THEME_CHANGE_EVENT: &str = "theme-change";

/// Payload of the `theme-change` notification, serialized as `{"theme":"dark"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&ThemeChange)>;

/// Fire-and-forget listeners. They see each change but cannot veto it.
#[derive(Default)]
pub struct ThemeObservers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ThemeObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&self, change: &ThemeChange) {
        for (_, listener) in &self.listeners {
            listener(change);
        }
    }
}

impl std::fmt::Debug for ThemeObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
