//! Global discount - the one piece of mutable state shared by every interaction.
//!
//! The discount is owned by the bot data and handed to the pricing engine by value for
//! each calculation. Writes are last-write-wins: a calculation racing an update sees
//! either the old or the new value, never a mix.

use crate::errors::{Error, Result};
use std::fmt;
use tokio::sync::RwLock;

/// A validated discount percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Discount(u8);

impl Discount {
    /// No discount.
    pub const NONE: Self = Self(0);

    /// Largest accepted percentage.
    pub const MAX_PERCENT: u8 = 100;

    /// Percentage as an integer.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// True when the discount changes prices.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0 > 0
    }

    /// Factor applied to a gross amount, `1 - percent / 100`.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        1.0 - f64::from(self.0) / 100.0
    }
}

impl TryFrom<i64> for Discount {
    type Error = Error;

    fn try_from(percent: i64) -> Result<Self> {
        u8::try_from(percent)
            .ok()
            .filter(|p| *p <= Self::MAX_PERCENT)
            .map(Self)
            .ok_or(Error::InvalidDiscount { percent })
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Process-wide discount, reset to zero on every restart.
#[derive(Debug, Default)]
pub struct DiscountSetting {
    current: RwLock<Discount>,
}

impl DiscountSetting {
    /// Creates a setting starting at `initial`.
    #[must_use]
    pub fn new(initial: Discount) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Discount in effect right now.
    pub async fn get(&self) -> Discount {
        *self.current.read().await
    }

    /// Replaces the discount, returning the previous value.
    pub async fn set(&self, discount: Discount) -> Discount {
        let mut writer = self.current.write().await;
        std::mem::replace(&mut *writer, discount)
    }
}
