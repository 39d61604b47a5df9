//! Role-based access to the administrative commands.

/// Whether a member holding `member_roles` may use a gated command.
///
/// An empty allow-list leaves the commands open to everyone.
#[must_use]
pub fn is_permitted(member_roles: &[u64], allowed_roles: &[u64]) -> bool {
    allowed_roles.is_empty() || member_roles.iter().any(|role| allowed_roles.contains(role))
}
