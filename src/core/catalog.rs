//! Catalog store - reads the per-category JSON files.
//!
//! Every category configured for the bot is backed by a `<catalog_dir>/<category>.json`
//! file holding an array of [`CatalogEntry`] records. Files are re-read on every call so
//! edits made while the bot is running show up on the next request. A file that is missing
//! or malformed is treated as an empty catalog; the failure is logged but never reaches
//! the user.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Glyph shown when an entry or component has no usable emoji.
pub const FALLBACK_EMOJI: &str = "🔨";

/// One sellable subject, such as a boss.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    /// Display label and lookup key, unique within its category
    pub name: String,
    /// Optional descriptive text
    #[serde(default)]
    pub caption: Option<String>,
    /// Optional image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Optional display glyph
    #[serde(default)]
    pub emoji: Option<String>,
    /// Priced line items
    #[serde(default, rename = "items")]
    pub components: Vec<PricedComponent>,
}

impl CatalogEntry {
    /// Emoji to display for this entry, falling back to [`FALLBACK_EMOJI`].
    #[must_use]
    pub fn display_emoji(&self) -> &str {
        display_emoji(self.emoji.as_deref())
    }
}

/// One line item of an entry, priced per kill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricedComponent {
    /// Component name
    pub name: String,
    /// Currency units per kill
    #[serde(rename = "price")]
    pub unit_price: f64,
    /// Optional display glyph
    #[serde(default)]
    pub emoji: Option<String>,
    /// Optional image URL
    #[serde(default)]
    pub image: Option<String>,
}

impl PricedComponent {
    /// Emoji to display for this component, falling back to [`FALLBACK_EMOJI`].
    #[must_use]
    pub fn display_emoji(&self) -> &str {
        display_emoji(self.emoji.as_deref())
    }
}

/// Returns `raw` when it looks like an emoji Discord will accept, otherwise the fallback.
///
/// Accepted forms are custom emoji (`<:name:id>`, `<a:name:id>`) and fully-qualified
/// unicode emoji, including keycaps, skin tones and ZWJ sequences. Text-default symbols
/// such as `©` without the emoji variation selector are not accepted.
#[must_use]
pub fn display_emoji(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(emoji) if is_recognised_emoji(emoji) => emoji,
        _ => FALLBACK_EMOJI,
    }
}

fn is_recognised_emoji(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }

    if let Some(inner) = candidate
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
    {
        let inner = inner.strip_prefix('a').unwrap_or(inner);
        let mut parts = inner.split(':');
        return match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(""), Some(name), Some(id), None) => {
                !name.is_empty() && !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
            }
            _ => false,
        };
    }

    emojis::get(candidate).is_some_and(|emoji| emoji.as_str() == candidate)
}

/// Reads category catalogs from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolves the file backing `category`, refusing identifiers that could leave the
    /// catalog directory.
    fn path_for(&self, category: &str) -> Option<PathBuf> {
        let unsafe_name = category.trim().is_empty()
            || category.contains(['/', '\\', '\0'])
            || category.contains("..");
        if unsafe_name {
            return None;
        }
        Some(self.dir.join(format!("{category}.json")))
    }

    /// Loads a category, reporting why it could not be read.
    ///
    /// Components with a negative or non-finite price are dropped with a warning.
    ///
    /// # Errors
    /// Returns an error if the identifier is not a plain file name, the file cannot be
    /// read, or its contents are not a JSON array of entries.
    pub async fn try_load(&self, category: &str) -> Result<Vec<CatalogEntry>> {
        let path = self.path_for(category).ok_or_else(|| Error::Catalog {
            category: category.to_string(),
            message: "category is not a plain file name".to_string(),
        })?;
        debug!("Loading catalog {:?} from {:?}", category, path);

        let contents = tokio::fs::read_to_string(&path).await?;
        let mut entries: Vec<CatalogEntry> = serde_json::from_str(&contents)?;

        for CatalogEntry {
            name, components, ..
        } in &mut entries
        {
            components.retain(|component| {
                let valid = component.unit_price.is_finite() && component.unit_price >= 0.0;
                if !valid {
                    warn!(
                        category,
                        entry = name.as_str(),
                        component = component.name.as_str(),
                        price = component.unit_price,
                        "Dropping component with invalid price"
                    );
                }
                valid
            });
        }

        Ok(entries)
    }

    /// Loads a category, yielding an empty catalog on any failure.
    pub async fn load(&self, category: &str) -> Vec<CatalogEntry> {
        self.try_load(category).await.unwrap_or_else(|e| {
            warn!("Catalog {:?} unavailable, treating as empty: {}", category, e);
            Vec::new()
        })
    }

    /// Finds an entry by exact, case-sensitive name.
    ///
    /// `None` is an expected outcome: the entry may have been removed since the menu
    /// was posted.
    pub async fn find(&self, category: &str, entry_name: &str) -> Option<CatalogEntry> {
        self.load(category)
            .await
            .into_iter()
            .find(|entry| entry.name == entry_name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{VORKATH_CATALOG, catalog_dir_with};

    #[tokio::test]
    async fn test_load_parses_entries_and_components() -> Result<()> {
        let dir = catalog_dir_with(&[("Bosses", VORKATH_CATALOG)])?;
        let store = CatalogStore::new(dir.path());

        let entries = store.load("Bosses").await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Vorkath");
        assert_eq!(entries[0].components.len(), 2);
        assert_eq!(entries[0].components[0].name, "Dragonbone");
        assert_eq!(entries[0].components[0].unit_price, 100.0);
        assert_eq!(entries[0].components[1].unit_price, 5000.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        assert!(store.load("Nope").await.is_empty());
        assert!(store.try_load("Nope").await.is_err());
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_empty() -> Result<()> {
        let dir = catalog_dir_with(&[("Broken", "{ this is not json")])?;
        let store = CatalogStore::new(dir.path());

        assert!(store.load("Broken").await.is_empty());
        assert!(matches!(store.try_load("Broken").await, Err(Error::Json(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_load_rejects_path_traversal() {
        let store = CatalogStore::new("data");

        assert!(store.load("../secrets").await.is_empty());
        assert!(matches!(
            store.try_load("sub/dir").await,
            Err(Error::Catalog { .. })
        ));
        assert!(store.try_load("   ").await.is_err());
    }

    #[tokio::test]
    async fn test_load_rereads_file_on_every_call() -> Result<()> {
        let dir = catalog_dir_with(&[("Bosses", VORKATH_CATALOG)])?;
        let store = CatalogStore::new(dir.path());
        assert_eq!(store.load("Bosses").await.len(), 1);

        std::fs::write(
            dir.path().join("Bosses.json"),
            r#"[{"name":"Zulrah","items":[]},{"name":"Vorkath","items":[]}]"#,
        )?;
        assert_eq!(store.load("Bosses").await.len(), 2);
        assert!(store.find("Bosses", "Zulrah").await.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_drops_negative_prices() -> Result<()> {
        let json = r#"[{"name":"Odd","items":[
            {"name":"Good","price":1.5},
            {"name":"Bad","price":-3}
        ]}]"#;
        let dir = catalog_dir_with(&[("Other", json)])?;
        let store = CatalogStore::new(dir.path());

        let entries = store.load("Other").await;
        assert_eq!(entries[0].components.len(), 1);
        assert_eq!(entries[0].components[0].name, "Good");
        Ok(())
    }

    #[tokio::test]
    async fn test_entry_without_items_has_no_components() -> Result<()> {
        let dir = catalog_dir_with(&[("Skills", r#"[{"name":"Agility","caption":"Laps"}]"#)])?;
        let store = CatalogStore::new(dir.path());

        let entry = store.find("Skills", "Agility").await.unwrap();
        assert!(entry.components.is_empty());
        assert_eq!(entry.caption.as_deref(), Some("Laps"));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_present_and_absent() -> Result<()> {
        let dir = catalog_dir_with(&[("Bosses", VORKATH_CATALOG)])?;
        let store = CatalogStore::new(dir.path());

        let found = store.find("Bosses", "Vorkath").await.unwrap();
        assert_eq!(found, store.load("Bosses").await[0]);

        assert!(store.find("Bosses", "Zulrah").await.is_none());
        assert!(store.find("Bosses", "vorkath").await.is_none());
        assert!(store.find("Missing", "Vorkath").await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_shipped_catalogs_parse() -> Result<()> {
        let store = CatalogStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

        let high_tier = store.try_load("High-Tier Bosses").await?;
        assert_eq!(high_tier.len(), 2);
        assert!(store.find("High-Tier Bosses", "Vorkath").await.is_some());
        assert_eq!(store.try_load("God Wars Dungeon").await?.len(), 2);
        assert_eq!(store.try_load("Chambers Of Xeric").await?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_display_emoji_fallbacks() {
        assert_eq!(display_emoji(None), FALLBACK_EMOJI);
        assert_eq!(display_emoji(Some("")), FALLBACK_EMOJI);
        assert_eq!(display_emoji(Some("dragon")), FALLBACK_EMOJI);
        assert_eq!(display_emoji(Some(":dragon:")), FALLBACK_EMOJI);
        assert_eq!(display_emoji(Some("<:bad:notanid>")), FALLBACK_EMOJI);
        for not_emoji in ["é", "→", "中", "—", "©", "12", "🐲 dragon"] {
            assert_eq!(
                display_emoji(Some(not_emoji)),
                FALLBACK_EMOJI,
                "{not_emoji:?} is not an emoji"
            );
        }

        assert_eq!(display_emoji(Some("🐲")), "🐲");
        assert_eq!(display_emoji(Some(" 🦄 ")), "🦄");
        assert_eq!(display_emoji(Some("🛡️")), "🛡️");
        assert_eq!(display_emoji(Some("<:vork:123456>")), "<:vork:123456>");
        assert_eq!(display_emoji(Some("<a:spin:42>")), "<a:spin:42>");
    }
}
