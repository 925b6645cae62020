//! Light/dark theme state and its persisted preference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Local storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "placid-theme";

/// Class applied to `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme implied by the presence of the dark flag.
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// How the toggle control presents this theme.
    pub fn indicator(self) -> ThemeIndicator {
        ThemeIndicator::for_theme(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shown by the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIndicator {
    /// `aria-pressed` value; true while dark.
    pub pressed: bool,

    /// Icon label, naming the theme a click switches to.
    pub label: &'static str,
}

impl ThemeIndicator {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                pressed: true,
                label: "Light",
            },
            Theme::Light => Self {
                pressed: false,
                label: "Dark",
            },
        }
    }

    /// `aria-pressed` attribute value.
    pub fn pressed_attr(&self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

/// Reads and writes the theme preference through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Controller using the default storage key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, THEME_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Theme to apply at startup.
    pub fn initial(&self) -> Theme {
        let stored = self.store.get(&self.key);
        let theme = Theme::from_stored(stored.as_deref());
        log::debug!("theme preference {stored:?} resolved to {theme}");
        theme
    }

    /// Flip `current`, persist the result and return it.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(err) = self.store.set(&self.key, next.as_str()) {
            log::warn!("failed to persist theme preference: {err}");
        }
        next
    }
}
