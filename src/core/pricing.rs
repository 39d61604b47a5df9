//! Pricing engine - turns an entry, a kill count and a discount into a price breakdown.
//!
//! Each component of an entry is priced on its own: `gross = unit_price * kills` and,
//! when a discount is active, `net = gross * (1 - discount / 100)`. Lines are never summed
//! into a total. The engine is pure; the caller supplies the discount in effect.

use crate::{
    core::{catalog::CatalogEntry, discount::Discount},
    errors::{Error, Result},
};
use std::{fmt, str::FromStr};

/// A validated, non-negative number of kills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KillCount(u32);

impl KillCount {
    /// Wraps a raw count.
    #[must_use]
    pub const fn new(kills: u32) -> Self {
        Self(kills)
    }

    /// Number of kills.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for KillCount {
    type Err = Error;

    /// Parses free-form user text strictly: surrounding whitespace is ignored, anything
    /// other than a whole number in `0..=u32::MAX` is rejected.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidKillCount {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("a number is required"));
        }

        match trimmed.parse::<i64>() {
            Ok(kills) if kills < 0 => Err(invalid("must not be negative")),
            Ok(kills) => u32::try_from(kills)
                .map(Self)
                .map_err(|_| invalid("is too large")),
            Err(_) => Err(invalid("must be a whole number")),
        }
    }
}

impl fmt::Display for KillCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priced breakdown of a single component.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLine {
    /// Component name
    pub component: String,
    /// Resolved display emoji
    pub emoji: String,
    /// Undiscounted amount
    pub gross: f64,
    /// Discounted amount, present only when a discount is active
    pub net: Option<f64>,
}

impl PriceLine {
    /// Heading shown above the amount, e.g. `🔨 Dragonbone`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} {}", self.emoji, self.component)
    }

    /// Amount text: `$1000.00`, or `~~$1000.00~~ → **$800.00**` when discounted.
    #[must_use]
    pub fn amount_text(&self) -> String {
        self.net.map_or_else(
            || format_amount(self.gross),
            |net| {
                format!(
                    "~~{}~~ → **{}**",
                    format_amount(self.gross),
                    format_amount(net)
                )
            },
        )
    }
}

/// Full result of one pricing request.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Name of the priced entry
    pub entry: String,
    /// Kills the price was computed for
    pub kill_count: KillCount,
    /// Discount in effect at computation time
    pub discount: Discount,
    /// True iff the discount was above zero
    pub discount_applied: bool,
    /// One line per component, in catalog order
    pub lines: Vec<PriceLine>,
}

/// Prices every component of `entry` for `kill_count` kills.
#[must_use]
pub fn price(entry: &CatalogEntry, kill_count: KillCount, discount: Discount) -> PricingResult {
    let kills = f64::from(kill_count.get());
    let discount_applied = discount.is_active();

    let lines = entry
        .components
        .iter()
        .map(|component| {
            let gross = component.unit_price * kills;
            PriceLine {
                component: component.name.clone(),
                emoji: component.display_emoji().to_string(),
                gross,
                net: discount_applied.then(|| gross * discount.multiplier()),
            }
        })
        .collect();

    PricingResult {
        entry: entry.name.clone(),
        kill_count,
        discount,
        discount_applied,
        lines,
    }
}

/// Formats a currency amount with two decimals, e.g. `$50000.00`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_amount(amount: f64) -> String {
    // -0.0 would print as "$-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("${amount:.2}")
}
