//! Light/dark theme, persisted in `localStorage` and applied as the
//! `data-theme` attribute on `<html>`.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Storage key holding the theme name.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognised is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    /// Read the stored theme and apply it to the document.
    pub fn load() -> Self {
        let stored = LocalStorage::raw().get_item(THEME_KEY).ok().flatten();
        let theme = Theme::from_stored(stored.as_deref());
        theme.apply();
        theme
    }

    /// Persist the theme and apply it to the document.
    pub fn store(self) {
        if let Err(e) = LocalStorage::raw().set_item(THEME_KEY, self.as_str()) {
            console::error!("Failed to store theme", e);
        }
        self.apply();
    }

    fn apply(self) {
        let root = gloo::utils::document_element();
        if let Err(e) = root.set_attribute("data-theme", self.as_str()) {
            console::error!("Failed to set data-theme", e);
        }
    }
}
