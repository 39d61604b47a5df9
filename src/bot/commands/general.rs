//! General Discord commands - ping and help.
//! These commands touch neither the catalogs nor the discount.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let discount = ctx.data().discount.get().await;
        let help_text = format!(
            "**BossBuddy Help**\n\
            Pick a boss from the menus, enter your kill count, and get a price for every drop.\n\n\
            **Commands**\n\
            • `/start` - Posts the boss selection menus.\n\
            • `/pvm_discount <percent>` - Sets the discount applied to all prices (0-100).\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help` - Shows this help message.\n\n\
            Current discount: **{discount}**"
        );

        ctx.send(
            poise::CreateReply::default()
                .content(help_text)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
