//! Discord interaction handlers
//!
//! Poise dispatches slash commands itself; everything else arrives here. Two interactions
//! matter: a pick in a category menu, and the submitted kill-count modal.

/// Kill-count modal submissions
pub mod kill_count;
/// Fire-and-forget posting to the log channel
pub mod log_channel;
/// Category menu picks
pub mod selection;

use crate::{
    bot::{BotData, render},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// Routes non-command events to their handlers.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    match event {
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(component),
        } if component.data.custom_id.starts_with(render::MENU_PREFIX) => {
            selection::handle_catalog_select(ctx, component, data).await?;
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Modal(modal),
        } if modal.data.custom_id.starts_with(render::MODAL_PREFIX) => {
            kill_count::handle_kill_count_submit(ctx, modal, data).await?;
        }
        _ => {}
    }
    Ok(())
}

/// Standard reply when a selection no longer resolves.
pub(crate) const NOT_FOUND_MESSAGE: &str =
    "❌ That boss was not found. It may have been removed; run `/start` again.";
