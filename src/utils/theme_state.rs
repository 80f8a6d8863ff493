use std::fmt::{ Display, Formatter };

pub const LIGHT_CLASS: &str = "light-mode";
pub const LIGHT_ICON: &str = "🌙";
pub const DARK_ICON: &str = "☀️";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Anything other than a stored `"light"` means dark, including no value at all.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn view(self) -> ThemeView {
        ThemeView {
            light_class: self == Self::Light,
            icon: match self {
                Self::Light => LIGHT_ICON,
                Self::Dark => DARK_ICON,
            },
        }
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the page shows for a theme: whether the body carries the light class,
/// and the glyph on the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub light_class: bool,
    pub icon: &'static str,
}

/// Key/value persistence for the theme flag.
///
/// Writes are best effort. A store that cannot persist keeps the value for the
/// current session only.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Session-only store, used when `localStorage` is unavailable and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn save(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preference_defaults_to_dark() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_unknown_value_is_dark() {
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("LIGHT")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn test_view_matches_preference() {
        let light = ThemePreference::Light.view();
        assert!(light.light_class);
        assert_eq!(light.icon, LIGHT_ICON);

        let dark = ThemePreference::Dark.view();
        assert!(!dark.light_class);
        assert_eq!(dark.icon, DARK_ICON);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::with_entry("theme", "light");
        store.save("theme", "dark");
        assert_eq!(store.load("theme").as_deref(), Some("dark"));
        assert_eq!(store.load("other"), None);
    }
}
