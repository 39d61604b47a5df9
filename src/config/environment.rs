//! Discord credentials and registration target from environment variables.
//!
//! Secrets never go into config.toml. `DISCORD_BOT_TOKEN` is required; `GUILD_ID` is
//! optional and switches command registration from global to a single guild, which
//! updates instantly.

use crate::errors::{Error, Result};
use tracing::error;

/// Values read from the environment at startup.
#[derive(Clone)]
pub struct DiscordSettings {
    /// Bot token
    pub token: String,
    /// Guild to register commands in, if any
    pub guild_id: Option<u64>,
}

impl std::fmt::Debug for DiscordSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordSettings")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

impl DiscordSettings {
    /// Reads `DISCORD_BOT_TOKEN` and `GUILD_ID`.
    ///
    /// # Errors
    /// Returns an error if the token is missing or `GUILD_ID` is not a number.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_BOT_TOKEN")
            .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))?;
        let guild_id = parse_guild_id(std::env::var("GUILD_ID").ok().as_deref())?;
        Ok(Self { token, guild_id })
    }
}

/// Parses an optional guild id; blank counts as unset.
///
/// # Errors
/// Returns [`Error::Config`] if the value is present but not a positive integer.
pub fn parse_guild_id(raw: Option<&str>) -> Result<Option<u64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Some)
            .ok_or_else(|| Error::Config {
                message: format!("GUILD_ID {value:?} is not a valid Discord id"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guild_id() -> Result<()> {
        assert_eq!(parse_guild_id(None)?, None);
        assert_eq!(parse_guild_id(Some("  "))?, None);
        assert_eq!(
            parse_guild_id(Some("1433451021736087743"))?,
            Some(1_433_451_021_736_087_743)
        );
        assert!(parse_guild_id(Some("guild")).is_err());
        assert!(parse_guild_id(Some("0")).is_err());
        assert!(parse_guild_id(Some("-1")).is_err());
        Ok(())
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = DiscordSettings {
            token: "super-secret".to_string(),
            guild_id: Some(7),
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("guild_id: Some(7)"));
    }
}
