use std::collections::HashMap;

/// The single preference key the site persists.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The toggle-button icon shown while this theme is active: a moon in
    /// light mode, a sun in dark mode.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Key-value preference storage; the page backs this with localStorage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and headless rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Theme toggle state: loaded once on page init, flipped on click, and
/// persisted under THEME_KEY. Unknown or missing stored values fall back
/// to light.
#[derive(Debug)]
pub struct ThemeToggle {
    current: Theme,
}

impl ThemeToggle {
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        ThemeToggle { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it, and report the new value. The caller
    /// sets the document theme attribute and swaps the icon to the new
    /// theme's `icon_class`.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.current = self.current.flipped();
        store.set(THEME_KEY, self.current.as_str());
        self.current
    }
}
