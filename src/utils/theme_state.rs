use serde::{Deserialize, Serialize};

/// Marker persisted for the dark theme. Every other stored value reads as light.
pub const DARK_MARKER: &str = "dark";
pub const LIGHT_MARKER: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_MARKER,
            Theme::Dark => DARK_MARKER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    /// Total over all inputs: anything but the exact dark marker is light.
    pub fn from_stored(value: &str) -> Self {
        Self { is_dark: value == DARK_MARKER }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    pub fn theme(self) -> Theme {
        if self.is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn label(self) -> &'static str {
        if self.is_dark { "Dark" } else { "Light" }
    }
}
