//! Discord rendering - select menus, the kill-count modal and result/log embeds.
//!
//! Menu layout is planned as plain data first ([`MenuSpec`]) so the paging rules can be
//! tested without building serenity payloads.

use crate::{
    config::CategoryConfig,
    core::{
        audit::CalculationRecord,
        catalog::{CatalogEntry, FALLBACK_EMOJI},
        pricing::PricingResult,
        selection::SelectionKey,
    },
};
use poise::serenity_prelude as serenity;
use tracing::warn;

/// Custom id prefix of the category select menus.
pub const MENU_PREFIX: &str = "catalog_select:";
/// Custom id prefix of the kill-count modal; followed by the encoded selection key.
pub const MODAL_PREFIX: &str = "kill_count:";
/// Custom id of the text input inside the kill-count modal.
pub const KILL_COUNT_INPUT: &str = "kill_count";

/// Discord limit on options per select menu.
pub const MAX_OPTIONS_PER_MENU: usize = 25;
/// Discord limit on action rows per message.
pub const MAX_ROWS_PER_MESSAGE: usize = 5;
/// Discord limit on fields per embed.
pub const MAX_FIELDS_PER_EMBED: usize = 25;

const MAX_OPTION_LABEL: usize = 100;
const MAX_PLACEHOLDER: usize = 150;

/// One option of a planned select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Text shown to the user
    pub label: String,
    /// Encoded [`SelectionKey`]
    pub value: String,
    /// Option emoji
    pub emoji: String,
}

/// A planned select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    /// Component custom id, unique per message
    pub custom_id: String,
    /// Placeholder shown while nothing is selected
    pub placeholder: String,
    /// Up to [`MAX_OPTIONS_PER_MENU`] options
    pub options: Vec<MenuOption>,
}

/// Plans the menus for one category, splitting it into pages of 25 options.
///
/// Entries whose selection key cannot be encoded are skipped with a warning. A category
/// with no selectable entries yields no menus.
#[must_use]
pub fn plan_category_menus(
    index: usize,
    category: &CategoryConfig,
    entries: &[CatalogEntry],
) -> Vec<MenuSpec> {
    let options: Vec<MenuOption> = entries
        .iter()
        .filter_map(|entry| {
            match SelectionKey::new(category.name.as_str(), entry.name.as_str()).encode() {
                Ok(value) => Some(MenuOption {
                    label: truncate(&entry.name, MAX_OPTION_LABEL),
                    value,
                    emoji: entry.display_emoji().to_string(),
                }),
                Err(e) => {
                    warn!(category = category.name.as_str(), "Skipping entry: {}", e);
                    None
                }
            }
        })
        .collect();

    let pages: Vec<&[MenuOption]> = options.chunks(MAX_OPTIONS_PER_MENU).collect();
    let page_count = pages.len();
    let base = category.placeholder();

    pages
        .into_iter()
        .enumerate()
        .map(|(page, options)| {
            let placeholder = if page_count > 1 {
                format!("{base} ({}/{page_count})", page + 1)
            } else {
                base.clone()
            };
            MenuSpec {
                custom_id: format!("{MENU_PREFIX}{index}:{page}"),
                placeholder: truncate(&placeholder, MAX_PLACEHOLDER),
                options: options.to_vec(),
            }
        })
        .collect()
}

/// Groups menus into messages of at most five rows each.
#[must_use]
pub fn group_into_messages(menus: Vec<MenuSpec>) -> Vec<Vec<MenuSpec>> {
    let mut messages = Vec::new();
    let mut menus = menus.into_iter().peekable();
    while menus.peek().is_some() {
        messages.push(menus.by_ref().take(MAX_ROWS_PER_MESSAGE).collect());
    }
    messages
}

/// Builds the serenity action row for a planned menu.
#[must_use]
pub fn menu_row(spec: &MenuSpec) -> serenity::CreateActionRow {
    let options = spec
        .options
        .iter()
        .map(|option| {
            serenity::CreateSelectMenuOption::new(option.label.as_str(), option.value.as_str())
                .emoji(reaction(&option.emoji))
        })
        .collect();

    let menu = serenity::CreateSelectMenu::new(
        spec.custom_id.as_str(),
        serenity::CreateSelectMenuKind::String { options },
    )
    .placeholder(spec.placeholder.as_str());

    serenity::CreateActionRow::SelectMenu(menu)
}

fn reaction(emoji: &str) -> serenity::ReactionType {
    serenity::ReactionType::try_from(emoji)
        .unwrap_or_else(|_| serenity::ReactionType::Unicode(FALLBACK_EMOJI.to_string()))
}

/// Modal asking for the number of kills; `encoded_key` rides along in the custom id.
#[must_use]
pub fn kill_count_modal(encoded_key: &str) -> serenity::CreateModal {
    let input = serenity::CreateInputText::new(
        serenity::InputTextStyle::Short,
        "Number of kills",
        KILL_COUNT_INPUT,
    )
    .placeholder("e.g. 25")
    .max_length(10)
    .required(true);

    serenity::CreateModal::new(format!("{MODAL_PREFIX}{encoded_key}"), "Kill Count")
        .components(vec![serenity::CreateActionRow::InputText(input)])
}

/// Embeds showing a price breakdown, split at 25 fields per embed.
#[must_use]
pub fn result_embeds(
    result: &PricingResult,
    entry: &CatalogEntry,
    colour: u32,
) -> Vec<serenity::CreateEmbed> {
    let fields: Vec<(String, String)> = result
        .lines
        .iter()
        .map(|line| (line.heading(), line.amount_text()))
        .collect();

    let mut footer = format!("{} kills", result.kill_count);
    if result.discount_applied {
        footer.push_str(&format!(" • {} discount", result.discount));
    }

    let mut first = serenity::CreateEmbed::new()
        .title(result.entry.as_str())
        .colour(colour)
        .footer(serenity::CreateEmbedFooter::new(footer));
    if let Some(caption) = entry.caption.as_deref() {
        first = first.description(caption);
    }
    if let Some(image) = entry.image.as_deref() {
        first = first.thumbnail(image);
    }

    if fields.is_empty() {
        if entry.caption.is_none() {
            first = first.description("No priced items for this entry.");
        }
        return vec![first];
    }

    fields
        .chunks(MAX_FIELDS_PER_EMBED)
        .enumerate()
        .map(|(index, chunk)| {
            let embed = if index == 0 {
                first.clone()
            } else {
                serenity::CreateEmbed::new()
                    .title(format!("{} (cont.)", result.entry))
                    .colour(colour)
            };
            embed.fields(
                chunk
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone(), false)),
            )
        })
        .collect()
}

/// Embed posted to the log channel for a calculation.
#[must_use]
pub fn log_embed(record: &CalculationRecord, colour: u32) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title("🧾 Boss Calculation Log")
        .colour(colour)
        .fields(
            record
                .fields()
                .into_iter()
                .map(|(name, value)| (name, value, false)),
        );
    if let Ok(timestamp) = serenity::Timestamp::from_unix_timestamp(record.recorded_at.timestamp())
    {
        embed = embed.timestamp(timestamp);
    }
    embed
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
