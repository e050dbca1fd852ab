mod theme_state;

pub use theme_state::{Theme, ThemeState, DARK_MARKER, LIGHT_MARKER};
