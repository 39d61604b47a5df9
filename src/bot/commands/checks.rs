//! Command checks shared by the role-gated commands.

use crate::{
    bot::BotData,
    core::access,
    errors::{Error, Result},
};

/// Passes when the invoking member holds one of the configured roles.
///
/// Outside a guild there is no member, so the check fails unless the allow-list is empty.
pub async fn has_allowed_role(ctx: poise::Context<'_, BotData, Error>) -> Result<bool> {
    let allowed = &ctx.data().config.allowed_role_ids;
    if allowed.is_empty() {
        return Ok(true);
    }

    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };
    let roles: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();
    Ok(access::is_permitted(&roles, allowed))
}
