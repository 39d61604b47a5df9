//! Application settings loaded from config.toml
//!
//! The TOML file lists the catalog categories in menu order, the roles allowed to run the
//! administrative commands, the log channel and a few presentation switches. The switches
//! cover the cosmetic differences between the bot variants that share this code.

use crate::{
    core::selection::FIELD_SEPARATOR,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{collections::HashSet, path::Path, path::PathBuf};

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the `<category>.json` catalog files
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,
    /// Categories in the order their menus are posted
    pub categories: Vec<CategoryConfig>,
    /// Roles allowed to use `/start` and `/pvm_discount`; empty means everyone
    #[serde(default)]
    pub allowed_role_ids: Vec<u64>,
    /// Channel receiving calculation logs; logging is off when absent
    #[serde(default)]
    pub log_channel_id: Option<u64>,
    /// Presentation switches
    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl AppConfig {
    /// Looks up a configured category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when no categories are configured, a category name is
    /// empty, duplicated, or contains a path separator or the selection delimiter, or the
    /// log channel id is zero.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(config_error("at least one [[categories]] entry is required"));
        }
        if self.log_channel_id == Some(0) {
            return Err(config_error("log_channel_id must be a Discord channel id"));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name.as_str();
            if name.trim().is_empty() {
                return Err(config_error("category names cannot be empty"));
            }
            if name.contains(['/', '\\', FIELD_SEPARATOR]) || name.contains("..") {
                return Err(config_error(&format!(
                    "category name {name:?} contains a reserved character"
                )));
            }
            if !seen.insert(name) {
                return Err(config_error(&format!("category {name:?} is listed twice")));
            }
        }
        Ok(())
    }
}

/// One menu category, backed by `<catalog_dir>/<name>.json`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// File stem and display label
    pub name: String,
    /// Glyph shown in front of the menu placeholder
    #[serde(default)]
    pub emoji: Option<String>,
}

impl CategoryConfig {
    /// Menu placeholder text, e.g. `🦄 | Chambers Of Xeric`.
    #[must_use]
    pub fn placeholder(&self) -> String {
        match self.emoji.as_deref().map(str::trim) {
            Some(emoji) if !emoji.is_empty() => format!("{emoji} | {}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Cosmetic switches for how menus and results are shown
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Post the category menus only to the invoking user
    pub menu_ephemeral: bool,
    /// Show price results only to the requesting user
    pub result_ephemeral: bool,
    /// Embed colour of price results
    pub result_colour: u32,
    /// Embed colour of log entries
    pub log_colour: u32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            menu_ephemeral: false,
            result_ephemeral: true,
            result_colour: 0x008B_0000,
            log_colour: 0x0034_98DB,
        }
    }
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}

fn config_error(message: &str) -> Error {
    Error::Config {
        message: message.to_string(),
    }
}

/// Parses and validates settings from TOML text.
///
/// # Errors
/// Returns an error if the TOML is invalid or fails [`AppConfig::validate`].
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing or the categories are invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads settings from `CONFIG_PATH`, or ./config.toml when unset
///
/// # Errors
/// Same as [`load_config`].
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const SAMPLE: &str = r#"
        catalog_dir = "catalogs"
        allowed_role_ids = [1433480285688692856, 1433451021736087743]
        log_channel_id = 1433919895875092593

        [[categories]]
        name = "Chambers Of Xeric"
        emoji = "🦄"

        [[categories]]
        name = "Other Bosses"

        [presentation]
        menu_ephemeral = true
    "#;

    #[test]
    fn test_parse_full_config() -> Result<()> {
        let config = parse_config(SAMPLE)?;

        assert_eq!(config.catalog_dir, PathBuf::from("catalogs"));
        assert_eq!(config.allowed_role_ids.len(), 2);
        assert_eq!(config.log_channel_id, Some(1_433_919_895_875_092_593));
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].placeholder(), "🦄 | Chambers Of Xeric");
        assert_eq!(config.categories[1].placeholder(), "Other Bosses");

        assert!(config.presentation.menu_ephemeral);
        assert!(config.presentation.result_ephemeral);
        assert_eq!(config.presentation.result_colour, 0x008B_0000);
        Ok(())
    }

    #[test]
    fn test_defaults_for_optional_fields() -> Result<()> {
        let config = parse_config("[[categories]]\nname = \"Bosses\"\n")?;

        assert_eq!(config.catalog_dir, PathBuf::from("data"));
        assert!(config.allowed_role_ids.is_empty());
        assert_eq!(config.log_channel_id, None);
        assert!(!config.presentation.menu_ephemeral);
        assert!(config.category("Bosses").is_some());
        assert!(config.category("Slayer").is_none());
        Ok(())
    }

    #[test]
    fn test_validation_rejects_bad_categories() {
        let cases = [
            "categories = []",
            "[[categories]]\nname = \"\"",
            "[[categories]]\nname = \"../etc\"",
            "[[categories]]\nname = \"a/b\"",
            "[[categories]]\nname = \"a\\u001fb\"",
            "[[categories]]\nname = \"Twice\"\n[[categories]]\nname = \"Twice\"",
            "log_channel_id = 0\n[[categories]]\nname = \"Bosses\"",
        ];
        for toml_str in cases {
            assert!(
                matches!(parse_config(toml_str), Err(Error::Config { .. })),
                "{toml_str:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_categories_is_a_parse_error() {
        let err = parse_config("log_channel_id = 5").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config.toml"));
    }

    #[test]
    fn test_shipped_config_is_valid() -> Result<()> {
        let config = parse_config(include_str!("../../config.toml"))?;
        assert_eq!(config.categories.len(), 12);
        assert_eq!(config.categories[11].placeholder(), "🏹 | High-Tier Bosses");
        assert_eq!(config.allowed_role_ids.len(), 4);
        Ok(())
    }

    #[test]
    fn test_load_config_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE)?;

        let config = load_config(&path)?;
        assert_eq!(config.categories[0].name, "Chambers Of Xeric");

        assert!(load_config(dir.path().join("missing.toml")).is_err());
        Ok(())
    }
}
