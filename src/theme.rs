use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute on the root element the stylesheet keys its variables off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph for the toggle button: the sun offers light mode, the moon dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Key-value persistence for the theme preference.
///
/// Implementations swallow their own failures: an unavailable store reads as
/// empty and drops writes, leaving the preference session-only.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Resolve the startup theme from the store, falling back to dark.
pub fn initial_theme(store: &impl ThemeStore) -> Theme {
    match store.load() {
        None => Theme::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e: ThemeParseError| {
            log::warn!("ignoring stored preference: {e}");
            Theme::default()
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory store; `available = false` behaves like blocked storage.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStore {
        pub value: Option<String>,
        pub available: bool,
        pub writes: usize,
    }

    impl MemoryStore {
        pub fn with(value: &str) -> Self {
            Self {
                value: Some(value.to_string()),
                available: true,
                writes: 0,
            }
        }

        pub fn empty() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }

        pub fn unavailable() -> Self {
            Self::default()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            if self.available {
                self.value.clone()
            } else {
                None
            }
        }

        fn save(&mut self, value: &str) {
            if self.available {
                self.value = Some(value.to_string());
                self.writes += 1;
            }
        }
    }

    #[test]
    fn test_initial_theme_defaults_to_dark() {
        assert_eq!(initial_theme(&MemoryStore::empty()), Theme::Dark);
        assert_eq!(initial_theme(&MemoryStore::unavailable()), Theme::Dark);
    }

    #[test]
    fn test_initial_theme_reads_stored_value() {
        assert_eq!(initial_theme(&MemoryStore::with("dark")), Theme::Dark);
        assert_eq!(initial_theme(&MemoryStore::with("light")), Theme::Light);
    }

    #[test]
    fn test_initial_theme_ignores_garbage() {
        assert_eq!(initial_theme(&MemoryStore::with("solarized")), Theme::Dark);
        assert_eq!(initial_theme(&MemoryStore::with("")), Theme::Dark);
        // stored values are case sensitive, like the stylesheet selectors
        assert_eq!(initial_theme(&MemoryStore::with("Light")), Theme::Dark);
    }

    #[test]
    fn test_theme_string_forms() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "blue".parse::<Theme>(),
            Err(ThemeParseError("blue".to_string()))
        );
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
