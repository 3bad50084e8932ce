use serde::{Deserialize, Serialize};
use std::fmt;

/// The four strings that identify a fact: `category1 = value1` relates to
/// `category2 = value2`. Slot order matters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FactQuad {
    pub category1: String,
    pub value1: String,
    pub category2: String,
    pub value2: String,
}

impl FactQuad {
    pub fn new(
        category1: impl Into<String>,
        value1: impl Into<String>,
        category2: impl Into<String>,
        value2: impl Into<String>,
    ) -> Self {
        Self {
            category1: category1.into(),
            value1: value1.into(),
            category2: category2.into(),
            value2: value2.into(),
        }
    }

    /// The `(category1, value1)` anchor.
    pub fn head(&self) -> (&str, &str) {
        (&self.category1, &self.value1)
    }

    /// The `(category2, value2)` anchor.
    pub fn tail(&self) -> (&str, &str) {
        (&self.category2, &self.value2)
    }

    /// Whether either slot names `(category, value)`.
    pub fn mentions(&self, category: &str, value: &str) -> bool {
        self.head() == (category, value) || self.tail() == (category, value)
    }

    /// If one slot names `(category, value)`, the pair in the other slot.
    ///
    /// The head slot is checked first.
    pub fn opposite_of(&self, category: &str, value: &str) -> Option<(&str, &str)> {
        if self.head() == (category, value) {
            Some(self.tail())
        } else if self.tail() == (category, value) {
            Some(self.head())
        } else {
            None
        }
    }
}

impl From<[&str; 4]> for FactQuad {
    fn from(parts: [&str; 4]) -> Self {
        let [c1, v1, c2, v2] = parts;
        Self::new(c1, v1, c2, v2)
    }
}

impl fmt::Display for FactQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} ({})",
            self.value1, self.category1, self.value2, self.category2
        )
    }
}
