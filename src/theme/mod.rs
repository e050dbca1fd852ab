pub mod controller;
pub mod events;
pub mod preference;
pub mod presentation;
pub mod resolver;
pub mod sink;
pub mod size;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::ThemeController;
pub use events::{SubscriptionId, ThemeChange, ThemeObservers, THEME_CHANGE_EVENT};
pub use preference::{FixedPreference, SystemPreference};
pub use presentation::Presentation;
pub use resolver::{resolve, Resolution, ResolvedFrom};
pub use sink::{NoopSink, ThemeSink};
pub use size::{IconPath, ToggleMetrics, ToggleSize};
pub use store::{JsonFileStore, MemoryStore, ThemeStore};
