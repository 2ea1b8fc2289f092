use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

const THEMES_JSON: &str = include_str!("../content/themes.json");

/// A terminal color scheme; colors are passed through to the page untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(flatten)]
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let themes: Vec<Theme> = serde_json::from_str(json).map_err(|e| LoadError::json("themes", e))?;
        Ok(Self { themes })
    }

    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(THEMES_JSON)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// First theme in the file, if any.
    pub fn default_theme(&self) -> Option<&Theme> {
        self.themes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_themes() {
        let catalog = ThemeCatalog::bundled().unwrap();
        assert_eq!(catalog.default_theme().unwrap().name, "default");
        assert!(catalog.get("gruvbox").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_colors_flattened() {
        let catalog = ThemeCatalog::from_json(r##"[{ "name": "x", "background": "#000" }]"##).unwrap();
        let theme = catalog.get("x").unwrap();
        assert_eq!(theme.colors.get("background").map(String::as_str), Some("#000"));
        assert!(!theme.colors.contains_key("name"));
    }
}
