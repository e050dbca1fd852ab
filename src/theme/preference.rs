/// Advisory OS/browser color-scheme hint. `None` means the environment cannot answer.
pub trait SystemPreference {
    fn prefers_dark(&self) -> Option<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPreference(pub Option<bool>);

impl FixedPreference {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
