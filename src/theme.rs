use serde::{Deserialize, Serialize};

/// Local storage key holding the dark mode flag as a JSON boolean.
pub const STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl From<Theme> for bool {
    fn from(theme: Theme) -> Self {
        theme.is_dark()
    }
}

impl Theme {
    /// A saved preference wins over the system color scheme.
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Self {
        saved.unwrap_or_else(|| prefers_dark.into())
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class applied to the root `<html>` element; tailwind keys its
    /// `dark:` variants off it.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Mimics the browser storage round trip: the same `Option<Theme>` the
    // app keeps in local storage, as JSON text under STORAGE_KEY.
    fn save(storage: &mut HashMap<String, String>, theme: Theme) {
        let raw = serde_json::to_string(&Some(theme)).expect("theme should serialize");
        storage.insert(STORAGE_KEY.to_string(), raw);
    }

    fn load(storage: &HashMap<String, String>, prefers_dark: bool) -> Theme {
        let saved = storage
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<Option<Theme>>(raw).ok())
            .flatten();
        Theme::resolve(saved, prefers_dark)
    }

    #[test]
    fn test_resolve_prefers_saved_value() {
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let mut storage = HashMap::new();

        // first visit follows the system scheme
        let theme = load(&storage, false);
        assert_eq!(theme, Theme::Light);

        let theme = theme.toggled();
        save(&mut storage, theme);
        assert_eq!(storage.get(STORAGE_KEY).map(String::as_str), Some("true"));

        // reload with a light system scheme keeps the saved choice
        let reloaded = load(&storage, false);
        assert_eq!(reloaded, Theme::Dark);
        assert_eq!(reloaded.root_class(), "dark");

        save(&mut storage, reloaded.toggled());
        assert_eq!(load(&storage, true), Theme::Light);
        assert_eq!(load(&storage, true).root_class(), "");
    }

    #[test]
    fn test_stored_as_json_bool() {
        assert_eq!(serde_json::to_string(&Some(Theme::Dark)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&None::<Theme>).unwrap(), "null");
        assert_eq!(
            serde_json::from_str::<Option<Theme>>("false").unwrap(),
            Some(Theme::Light)
        );
        assert_eq!(serde_json::from_str::<Option<Theme>>("null").unwrap(), None);
        assert!(serde_json::from_str::<Option<Theme>>("\"dark\"").is_err());
    }
}
