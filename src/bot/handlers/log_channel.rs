//! Calculation log channel.
//!
//! Posting runs on a detached task: the price reply never waits on it, and a failed post
//! is only logged.

use crate::{bot::render, config::AppConfig, core::audit::CalculationRecord};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error};

/// Posts `record` to the configured log channel in the background.
pub fn spawn_record(http: &Arc<serenity::Http>, config: &AppConfig, record: CalculationRecord) {
    let Some(channel_id) = config.log_channel_id else {
        debug!("No log channel configured; skipping calculation log");
        return;
    };

    let http = Arc::clone(http);
    let embed = render::log_embed(&record, config.presentation.log_colour);
    tokio::spawn(async move {
        let message = serenity::CreateMessage::new().embed(embed);
        if let Err(e) = serenity::ChannelId::new(channel_id)
            .send_message(&*http, message)
            .await
        {
            error!(channel_id, "Failed to post calculation log: {}", e);
        }
    });
}
