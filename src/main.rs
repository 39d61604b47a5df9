use boss_buddy::{
    bot,
    config::{DiscordSettings, settings},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load config.toml
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!(
        "Loaded {} catalog categories from {:?}.",
        app_config.categories.len(),
        app_config.catalog_dir
    );

    // 4. Discord credentials stay in the environment, never in config.toml
    let discord = DiscordSettings::from_env()?;

    // 5. Run the bot
    bot::run_bot(discord, app_config).await
}
