//! Calculation audit records.
//!
//! Every completed price calculation produces a [`CalculationRecord`]. The bot layer posts
//! it to the log channel without waiting on the result.

use crate::core::{discount::Discount, pricing::KillCount, selection::SelectionKey};
use chrono::{DateTime, Utc};

/// Who priced what, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRecord {
    /// Discord user id of the requester
    pub user_id: u64,
    /// Display tag of the requester
    pub user_tag: String,
    /// Entry that was priced
    pub entry: String,
    /// Category the entry came from
    pub category: String,
    /// Requested kills
    pub kill_count: KillCount,
    /// Discount in effect for the calculation
    pub discount: Discount,
    /// When the calculation was made
    pub recorded_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn new(
        user_id: u64,
        user_tag: impl Into<String>,
        key: &SelectionKey,
        kill_count: KillCount,
        discount: Discount,
    ) -> Self {
        Self {
            user_id,
            user_tag: user_tag.into(),
            entry: key.entry.clone(),
            category: key.category.clone(),
            kill_count,
            discount,
            recorded_at: Utc::now(),
        }
    }

    /// Labelled fields in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("👤 User", format!("{} ({})", self.user_tag, self.user_id)),
            ("🐲 Boss", self.entry.clone()),
            ("📂 Category", self.category.clone()),
            ("⚔️ Kill Count", self.kill_count.to_string()),
            ("🏷️ Discount", self.discount.to_string()),
        ]
    }
}
