use crate::theme::size::{IconPath, ToggleSize};
use crate::utils::ThemeState;

/// Everything the control shows, derived from state and size alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub size: ToggleSize,
    pub container_dark: bool,
    pub knob_offset: u32,
    pub liquid_percent: u8,
    pub label: &'static str,
    pub show_label: bool,
    pub icon: IconPath,
}

impl Presentation {
    pub fn of(state: ThemeState, size: ToggleSize) -> Self {
        let metrics = size.metrics();
        if state.is_dark {
            Self {
                size,
                container_dark: true,
                knob_offset: metrics.knob_dark_offset,
                liquid_percent: metrics.liquid_dark_percent,
                label: state.label(),
                show_label: metrics.show_label,
                icon: metrics.dark_icon,
            }
        } else {
            Self {
                size,
                container_dark: false,
                knob_offset: 0,
                liquid_percent: 0,
                label: state.label(),
                show_label: metrics.show_label,
                icon: metrics.light_icon,
            }
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.container_dark { "container dark" } else { "container" }
    }

    pub fn knob_style(&self) -> String {
        format!("left: {}px;", self.knob_offset)
    }

    pub fn liquid_style(&self) -> String {
        format!("width: {}%;", self.liquid_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::size::{MOON_ICON, SUN_ICON};

    #[test]
    fn test_small_dark_and_light() {
        let dark = Presentation::of(ThemeState::new(true), ToggleSize::Small);
        assert_eq!(dark.knob_style(), "left: 23px;");
        assert_eq!(dark.liquid_style(), "width: 100%;");
        assert_eq!(dark.label, "Dark");
        assert_eq!(dark.icon, MOON_ICON);
        assert_eq!(dark.container_class(), "container dark");

        let light = Presentation::of(ThemeState::new(false), ToggleSize::Small);
        assert_eq!(light.knob_style(), "left: 0px;");
        assert_eq!(light.liquid_style(), "width: 0%;");
        assert_eq!(light.label, "Light");
        assert_eq!(light.icon, SUN_ICON);
        assert_eq!(light.container_class(), "container");
    }

    #[test]
    fn test_large_half_fill_and_label() {
        let dark = Presentation::of(ThemeState::new(true), ToggleSize::Large);
        assert_eq!(dark.liquid_percent, 50);
        assert!(dark.show_label);
    }
}
