//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the BossBuddy application,
//! including the slash commands, component/modal handlers and bot context.

/// Discord command implementations (catalog, discount, general)
pub mod commands;
/// Poise framework setup and error handling
pub mod framework;
/// Discord interaction handlers (menu picks, modal submissions)
pub mod handlers;
/// Menus, modals and embeds
pub mod render;

use crate::{
    config::AppConfig,
    core::{
        catalog::CatalogStore,
        discount::{Discount, DiscountSetting},
    },
};
use std::sync::Arc;

/// Shared data available to all bot commands and handlers.
/// Holds the settings, the catalog store and the global discount.
#[derive(Debug)]
pub struct BotData {
    /// Settings from config.toml
    pub config: Arc<AppConfig>,
    /// JSON catalogs, re-read on every request
    pub catalog: CatalogStore,
    /// Discount applied to every calculation; 0 after startup
    pub discount: DiscountSetting,
}

impl BotData {
    /// Creates a new `BotData` instance from the loaded settings.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let catalog = CatalogStore::new(config.catalog_dir.clone());
        Self {
            config: Arc::new(config),
            catalog,
            discount: DiscountSetting::new(Discount::NONE),
        }
    }
}

pub use commands::*;
pub use framework::run_bot;
