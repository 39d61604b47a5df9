//! Catalog Discord command - `start`.
//!
//! Posts one select menu per configured category (more for categories with over 25
//! entries). Discord allows five menus per message, so the first five go into the command
//! reply and the rest into follow-up messages.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::checks, render},
        errors::{Error, Result},
    };
    use tracing::{debug, info};

    /// Start the boss selector.
    #[poise::command(slash_command, guild_only, check = "checks::has_allowed_role")]
    pub async fn start(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();

        let mut menus = Vec::new();
        for (index, category) in data.config.categories.iter().enumerate() {
            let entries = data.catalog.load(&category.name).await;
            if entries.is_empty() {
                debug!("Category {:?} has no entries, leaving it out", category.name);
                continue;
            }
            menus.extend(render::plan_category_menus(index, category, &entries));
        }

        if menus.is_empty() {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ No catalogs are available right now.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        let menu_count = menus.len();
        let ephemeral = data.config.presentation.menu_ephemeral;
        for group in render::group_into_messages(menus) {
            let rows = group.iter().map(render::menu_row).collect();
            ctx.send(
                poise::CreateReply::default()
                    .components(rows)
                    .ephemeral(ephemeral),
            )
            .await?;
        }

        info!(
            user = %ctx.author().id,
            menus = menu_count,
            "Posted boss selection menus"
        );
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
