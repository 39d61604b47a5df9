//! Unified error types for `BossBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants that a user can
//! trigger (bad kill count, bad discount, stale selection) carry enough context to be
//! shown back to them verbatim.

use thiserror::Error;

/// All errors produced by the bot and its core.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file or environment is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A catalog file exists but could not be used.
    #[error("Catalog error in '{category}': {message}")]
    Catalog {
        /// Category whose file failed
        category: String,
        /// Underlying failure
        message: String,
    },

    /// The selected entry does not exist in its category (any more).
    #[error("'{name}' was not found in '{category}'")]
    EntryNotFound {
        /// Category that was searched
        category: String,
        /// Entry name that was requested
        name: String,
    },

    /// A selection identifier could not be encoded or decoded.
    #[error("Invalid selection: {reason}")]
    InvalidSelection {
        /// Why the identifier was rejected
        reason: String,
    },

    /// The kill count typed by the user is not a non-negative whole number.
    #[error("Invalid kill count '{input}': {reason}")]
    InvalidKillCount {
        /// Raw text as typed
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A discount outside 0..=100 was requested.
    #[error("Invalid discount {percent}%: must be between 0 and 100")]
    InvalidDiscount {
        /// Requested percentage
        percent: i64,
    },

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or unreadable environment variable.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Serenity/Poise failure.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
