//! Collapsible navigation panel state.

/// Attribute on the panel carrying the open flag.
pub const DATA_OPEN_ATTR: &str = "data-open";

/// Attribute on the menu button mirroring the open flag.
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";

/// Open/closed state of the navigation panel. Closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Parse the panel's `data-open` attribute; only `"true"` is open.
    pub fn from_attr(value: Option<&str>) -> Self {
        Self {
            open: value == Some("true"),
        }
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Value written to both `data-open` and `aria-expanded`.
    pub fn as_attr(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr() {
        assert!(NavState::from_attr(Some("true")).open);
        assert!(!NavState::from_attr(Some("false")).open);
        assert!(!NavState::from_attr(Some("TRUE")).open);
        assert!(!NavState::from_attr(Some("")).open);
        assert!(!NavState::from_attr(None).open);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = NavState::default();
        assert_eq!(state.toggled().toggled(), state);
        assert_eq!(state.toggled().as_attr(), "true");
    }
}
