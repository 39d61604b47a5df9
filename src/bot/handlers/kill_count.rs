//! Kill-count modal submissions - price the entry and reply with the breakdown.

use crate::{
    bot::{
        BotData,
        handlers::{NOT_FOUND_MESSAGE, log_channel},
        render,
    },
    core::{
        audit::CalculationRecord,
        catalog::CatalogEntry,
        pricing::{self, KillCount},
        selection::SelectionKey,
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{debug, info, warn};

/// Validates the kill count, prices the selected entry and answers the modal.
///
/// A stale or tampered selection and an invalid kill count are answered with an
/// ephemeral message; nothing is logged to the channel for them.
pub async fn handle_kill_count_submit(
    ctx: &serenity::Context,
    modal: &serenity::ModalInteraction,
    data: &BotData,
) -> Result<()> {
    let Some(encoded) = modal.data.custom_id.strip_prefix(render::MODAL_PREFIX) else {
        return Ok(());
    };

    let (key, entry) = match resolve_selection(data, encoded).await {
        Ok(resolved) => resolved,
        Err(e) => {
            debug!(user = %modal.user.id, "Selection did not resolve: {}", e);
            return reply_privately(ctx, modal, NOT_FOUND_MESSAGE).await;
        }
    };

    let raw_kills = text_input_value(modal, render::KILL_COUNT_INPUT).unwrap_or_default();
    let kill_count = match raw_kills.parse::<KillCount>() {
        Ok(kill_count) => kill_count,
        Err(e) => {
            return reply_privately(
                ctx,
                modal,
                &format!("❌ {e}. Enter a whole number of kills, e.g. `25`."),
            )
            .await;
        }
    };

    let discount = data.discount.get().await;
    let result = pricing::price(&entry, kill_count, discount);
    info!(
        user = %modal.user.id,
        category = key.category.as_str(),
        entry = key.entry.as_str(),
        kills = kill_count.get(),
        discount = discount.percent(),
        "Priced selection"
    );

    let record = CalculationRecord::new(
        modal.user.id.get(),
        modal.user.tag(),
        &key,
        kill_count,
        discount,
    );
    log_channel::spawn_record(&ctx.http, &data.config, record);

    let presentation = &data.config.presentation;
    let embeds = render::result_embeds(&result, &entry, presentation.result_colour);
    modal
        .create_response(
            ctx,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .embeds(embeds)
                    .ephemeral(presentation.result_ephemeral),
            ),
        )
        .await?;
    Ok(())
}

/// Decodes the key and looks the entry up.
///
/// Every failure is answered with the same "not found" reply, whatever the variant.
///
/// # Errors
/// Returns [`Error::InvalidSelection`] for an undecodable key and
/// [`Error::EntryNotFound`] when the category is not configured or the entry is gone.
async fn resolve_selection(data: &BotData, encoded: &str) -> Result<(SelectionKey, CatalogEntry)> {
    let key = SelectionKey::decode(encoded)
        .inspect_err(|e| warn!("Undecodable kill count modal id: {}", e))?;

    let not_found = |key: &SelectionKey| Error::EntryNotFound {
        category: key.category.clone(),
        name: key.entry.clone(),
    };

    if data.config.category(&key.category).is_none() {
        warn!("Selection names unknown category {:?}", key.category);
        return Err(not_found(&key));
    }

    match data.catalog.find(&key.category, &key.entry).await {
        Some(entry) => Ok((key, entry)),
        None => {
            info!(
                category = key.category.as_str(),
                entry = key.entry.as_str(),
                "Selected entry no longer exists"
            );
            Err(not_found(&key))
        }
    }
}

/// Value of the text input with `custom_id`, if the modal carried one.
fn text_input_value<'a>(modal: &'a serenity::ModalInteraction, custom_id: &str) -> Option<&'a str> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            serenity::ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.as_deref()
            }
            _ => None,
        })
}

async fn reply_privately(
    ctx: &serenity::Context,
    modal: &serenity::ModalInteraction,
    content: &str,
) -> Result<()> {
    modal
        .create_response(
            ctx,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    use super::*;
    use crate::{
        config::{AppConfig, CategoryConfig, PresentationConfig},
        test_utils::{VORKATH_CATALOG, catalog_dir_with},
    };

    fn bot_data(catalog_dir: &std::path::Path) -> BotData {
        BotData::new(AppConfig {
            catalog_dir: catalog_dir.to_path_buf(),
            categories: vec![CategoryConfig {
                name: "Bosses".to_string(),
                emoji: None,
            }],
            allowed_role_ids: Vec::new(),
            log_channel_id: None,
            presentation: PresentationConfig::default(),
        })
    }

    #[tokio::test]
    async fn test_resolve_selection_finds_entry() -> Result<()> {
        let dir = catalog_dir_with(&[("Bosses", VORKATH_CATALOG)])?;
        let data = bot_data(dir.path());
        let encoded = SelectionKey::new("Bosses", "Vorkath").encode()?;

        let (key, entry) = resolve_selection(&data, &encoded).await?;
        assert_eq!(key.entry, "Vorkath");
        assert_eq!(entry.components.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_selection_not_found_cases() -> Result<()> {
        let dir = catalog_dir_with(&[("Bosses", VORKATH_CATALOG), ("Hidden", VORKATH_CATALOG)])?;
        let data = bot_data(dir.path());

        let missing_entry = SelectionKey::new("Bosses", "Zulrah").encode()?;
        let Err(Error::EntryNotFound { category, name }) =
            resolve_selection(&data, &missing_entry).await
        else {
            panic!("removed entry resolved");
        };
        assert_eq!((category.as_str(), name.as_str()), ("Bosses", "Zulrah"));

        let unconfigured = SelectionKey::new("Hidden", "Vorkath").encode()?;
        assert!(matches!(
            resolve_selection(&data, &unconfigured).await,
            Err(Error::EntryNotFound { .. })
        ));

        assert!(matches!(
            resolve_selection(&data, "Bosses|Vorkath").await,
            Err(Error::InvalidSelection { .. })
        ));
        assert!(resolve_selection(&data, "").await.is_err());
        Ok(())
    }
}
