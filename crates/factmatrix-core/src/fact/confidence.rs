use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer confidence score clamped to [0, 100].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const ZERO: Self = Self(0);
    /// Confidence of a freshly created fact, and of a fact with an empty pool.
    pub const DEFAULT: Self = Self(50);
    /// Lower bound after recalculation against a non-empty pool.
    pub const FLOOR: Self = Self(5);
    /// Upper bound after recalculation.
    pub const CEILING: Self = Self(95);
    pub const MAX: Self = Self(100);

    /// Create a new Confidence, clamping to [0, 100].
    pub fn new(value: u128) -> Self {
        Self(value.min(100) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Subtract `by`, stopping at zero.
    pub fn saturating_drop(self, by: u8) -> Self {
        Self(self.0.saturating_sub(by))
    }

    /// Whether this lies in the recalculation band [5, 95].
    pub fn is_bounded(self) -> bool {
        self >= Self::FLOOR && self <= Self::CEILING
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        f64::from(c.0)
    }
}
