use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// SVG path data on a 24x24 view box. Outlined glyphs are also stroked at width 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPath {
    pub d: &'static str,
    pub outlined: bool,
}

pub const MOON_ICON: IconPath = IconPath {
    d: "M21 12.8A9 9 0 0 1 11.2 3 7 7 0 1 0 21 12.8z",
    outlined: false,
};
pub const SUN_ICON: IconPath = IconPath {
    d: "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6zm0-7v2m0 16v2m-7-9H3m18 0h-2m-3.05-6.95l-1.42 1.42m-8.48 8.48l-1.42 1.42m1.42-11.32l1.42 1.42m8.48 8.48l1.42 1.42",
    outlined: true,
};
pub const SUN_RAY_ICON: IconPath = IconPath {
    d: "M12 4a1 1 0 0 1 1 1v1a1 1 0 1 1-2 0V5a1 1 0 0 1 1-1z",
    outlined: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Fixed dimensions and glyphs for one visual scale. Offsets and fills apply in the dark state;
/// the light state always rests at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMetrics {
    pub pill_width: u32,
    pub pill_height: u32,
    pub knob_size: u32,
    pub icon_size: u32,
    pub knob_dark_offset: u32,
    pub liquid_dark_percent: u8,
    pub show_label: bool,
    pub dark_icon: IconPath,
    pub light_icon: IconPath,
}

impl ToggleSize {
    pub const ALL: [ToggleSize; 3] = [ToggleSize::Small, ToggleSize::Medium, ToggleSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            ToggleSize::Small => "small",
            ToggleSize::Medium => "medium",
            ToggleSize::Large => "large",
        }
    }

    pub fn metrics(self) -> ToggleMetrics {
        match self {
            ToggleSize::Small => ToggleMetrics {
                pill_width: 40,
                pill_height: 12,
                knob_size: 17,
                icon_size: 12,
                knob_dark_offset: 23,
                liquid_dark_percent: 100,
                show_label: false,
                dark_icon: MOON_ICON,
                light_icon: SUN_ICON,
            },
            ToggleSize::Medium => ToggleMetrics {
                pill_width: 56,
                pill_height: 16,
                knob_size: 24,
                icon_size: 16,
                knob_dark_offset: 32,
                liquid_dark_percent: 100,
                show_label: false,
                dark_icon: MOON_ICON,
                light_icon: SUN_ICON,
            },
            ToggleSize::Large => ToggleMetrics {
                pill_width: 120,
                pill_height: 40,
                knob_size: 28,
                icon_size: 18,
                knob_dark_offset: 84,
                liquid_dark_percent: 50,
                show_label: true,
                dark_icon: MOON_ICON,
                light_icon: SUN_RAY_ICON,
            },
        }
    }
}

impl Display for ToggleSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(ToggleSize::Small),
            "medium" => Ok(ToggleSize::Medium),
            "large" => Ok(ToggleSize::Large),
            _ => Err(ConfigError::UnknownSize(s.to_string())),
        }
    }
}
