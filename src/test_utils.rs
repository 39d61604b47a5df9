//! Shared test utilities for `BossBuddy`.
//!
//! Helpers for building catalog entries and writing catalog files into a temporary
//! directory.

use crate::{
    core::catalog::{CatalogEntry, PricedComponent},
    errors::Result,
};
use tempfile::TempDir;

/// The `Bosses` catalog used throughout the tests: Vorkath with two drops.
pub const VORKATH_CATALOG: &str = r#"[
    {
        "name": "Vorkath",
        "caption": "Undead dragon",
        "emoji": "🐲",
        "items": [
            { "name": "Dragonbone", "price": 100 },
            { "name": "Visage", "price": 5000, "emoji": "🛡️" }
        ]
    }
]"#;

/// A component with no emoji or image.
pub fn component(name: &str, unit_price: f64) -> PricedComponent {
    PricedComponent {
        name: name.to_string(),
        unit_price,
        emoji: None,
        image: None,
    }
}

/// An entry with only a name and components.
pub fn entry(name: &str, components: Vec<PricedComponent>) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        caption: None,
        image: None,
        emoji: None,
        components,
    }
}

/// Vorkath: Dragonbone at 100 and Visage at 5000 per kill.
pub fn vorkath() -> CatalogEntry {
    entry(
        "Vorkath",
        vec![component("Dragonbone", 100.0), component("Visage", 5000.0)],
    )
}

/// Writes each `(category, json)` pair to `<category>.json` in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the files are needed.
pub fn catalog_dir_with(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    for (category, json) in files {
        std::fs::write(dir.path().join(format!("{category}.json")), json)?;
    }
    Ok(dir)
}
