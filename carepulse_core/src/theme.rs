use std::collections::HashMap;

use strum::{EnumString, IntoStaticStr};

pub const THEME_KEY: &str = "theme";

/// Key-value storage for user preferences (browser local storage on the web).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when no persistent storage is available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Only an explicit "dark" selects the dark theme.
    pub fn load(store: &impl PreferenceStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut impl PreferenceStore) {
        store.set(THEME_KEY, self.as_str());
    }

    /// Flip from the displayed theme and persist the result. A store that drops
    /// the write does not pin the theme.
    pub fn toggle_in(self, store: &mut impl PreferenceStore) -> Self {
        let theme = self.toggled();
        theme.save(store);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_light() {
        let mut store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Light);

        store.set(THEME_KEY, "solarized");
        assert_eq!(Theme::load(&store), Theme::Light);

        store.set(THEME_KEY, "dark");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    /// Stands in for browser storage whose writes fail (full quota, private mode).
    struct RejectingStore;

    impl PreferenceStore for RejectingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) {}
    }

    #[test]
    fn test_toggle_twice_restores() {
        for initial in ["light", "dark"] {
            let mut store = MemoryStore::default();
            store.set(THEME_KEY, initial);

            let theme = Theme::load(&store).toggle_in(&mut store);
            assert_ne!(store.get(THEME_KEY).as_deref(), Some(initial));
            theme.toggle_in(&mut store);
            assert_eq!(store.get(THEME_KEY).as_deref(), Some(initial));
        }
    }

    #[test]
    fn test_toggle_writes_literal_values() {
        let mut store = MemoryStore::default();
        let theme = Theme::load(&store).toggle_in(&mut store);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(theme.toggle_in(&mut store), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_alternates_when_writes_are_dropped() {
        let mut store = RejectingStore;
        let mut theme = Theme::load(&store);
        let mut seen = Vec::new();
        for _ in 0..4 {
            theme = theme.toggle_in(&mut store);
            seen.push(theme);
        }
        assert_eq!(seen, [Theme::Dark, Theme::Light, Theme::Dark, Theme::Light]);
        assert_eq!(Theme::load(&store), Theme::Light);
    }
}
