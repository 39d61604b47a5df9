//! Discount Discord command - `pvm_discount`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::checks},
        core::discount::Discount,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Set a discount percentage applied to every price.
    ///
    /// The value must be between 0 and 100; anything else is refused and the current
    /// discount stays in place. It resets to 0 whenever the bot restarts.
    #[poise::command(slash_command, guild_only, check = "checks::has_allowed_role")]
    pub async fn pvm_discount(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Discount percentage (0–100)"] percent: i64,
    ) -> Result<()> {
        let discount = match Discount::try_from(percent) {
            Ok(discount) => discount,
            Err(e) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!("❌ {e}"))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
        };

        let previous = ctx.data().discount.set(discount).await;
        info!(
            user = %ctx.author().id,
            previous = previous.percent(),
            current = discount.percent(),
            "Discount updated"
        );

        ctx.send(
            poise::CreateReply::default()
                .content(format!("✅ Discount set to {discount}"))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
