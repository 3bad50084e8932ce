//! Stake totals per `(category, value)` pair and per category.
//!
//! Reporting only; confidence math never reads these. Updates are applied
//! per slot, so a fact naming the same pair in both slots counts twice.

use std::collections::HashMap;

use factmatrix_core::{FactQuad, TokenAmount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAggregates {
    by_value: HashMap<(String, String), TokenAmount>,
    by_category: HashMap<String, TokenAmount>,
}

impl CategoryAggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` for both slots of `quad`.
    pub fn credit(&mut self, quad: &FactQuad, amount: TokenAmount) {
        for (category, value) in [quad.head(), quad.tail()] {
            let pair = self
                .by_value
                .entry((category.to_string(), value.to_string()))
                .or_insert(0);
            *pair = pair.saturating_add(amount);
            let total = self.by_category.entry(category.to_string()).or_insert(0);
            *total = total.saturating_add(amount);
        }
    }

    /// Remove `amount` for both slots of `quad`, stopping at zero.
    pub fn debit(&mut self, quad: &FactQuad, amount: TokenAmount) {
        for (category, value) in [quad.head(), quad.tail()] {
            if let Some(pair) = self
                .by_value
                .get_mut(&(category.to_string(), value.to_string()))
            {
                *pair = pair.saturating_sub(amount);
            }
            if let Some(total) = self.by_category.get_mut(category) {
                *total = total.saturating_sub(amount);
            }
        }
    }

    pub fn value_stake(&self, category: &str, value: &str) -> TokenAmount {
        self.by_value
            .get(&(category.to_string(), value.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn category_stake(&self, category: &str) -> TokenAmount {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    /// Categories with their totals, sorted by name.
    pub fn categories(&self) -> Vec<(&str, TokenAmount)> {
        let mut out: Vec<_> = self
            .by_category
            .iter()
            .map(|(c, total)| (c.as_str(), *total))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }
}
