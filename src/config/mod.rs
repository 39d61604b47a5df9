/// Discord token and registration guild from environment variables
pub mod environment;

/// Catalog categories, access roles and presentation from config.toml
pub mod settings;

pub use environment::DiscordSettings;
pub use settings::{AppConfig, CategoryConfig, PresentationConfig};
