//! Category menu picks - answer with the kill-count modal.

use crate::{
    bot::{BotData, handlers::NOT_FOUND_MESSAGE, render},
    core::selection::SelectionKey,
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{debug, warn};

/// Opens the kill-count modal for the picked entry.
///
/// The option value is the encoded selection key; it is checked against the configured
/// categories before being handed on, so a forged value gets "not found" instead of a modal.
pub async fn handle_catalog_select(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
) -> Result<()> {
    let serenity::ComponentInteractionDataKind::StringSelect { values } = &component.data.kind
    else {
        return Ok(());
    };
    let Some(value) = values.first() else {
        return Ok(());
    };

    let known_category = SelectionKey::decode(value)
        .inspect_err(|e| warn!(user = %component.user.id, "Undecodable menu value: {}", e))
        .is_ok_and(|key| data.config.category(&key.category).is_some());

    let response = if known_category {
        debug!(user = %component.user.id, "Opening kill count modal");
        serenity::CreateInteractionResponse::Modal(render::kill_count_modal(value))
    } else {
        serenity::CreateInteractionResponse::Message(
            serenity::CreateInteractionResponseMessage::new()
                .content(NOT_FOUND_MESSAGE)
                .ephemeral(true),
        )
    };

    component.create_response(ctx, response).await?;
    Ok(())
}
