//! Pairwise relationships between facts.
//!
//! Values are compared as plain strings. Two facts compete when they make
//! different claims about the same pair of categories; only identical facts
//! support each other in the cascade. Head-to-tail chains are reported but
//! never feed confidence.

use factmatrix_core::models::{CompetitionRule, Relationship};
use factmatrix_core::FactQuad;

/// The competition rule `a` and `b` fall under, if any.
///
/// Categories are aligned directly (`category1` with `category1`) or
/// mirrored (`category1` with `category2`). Under either alignment the
/// aligned values must differ; a mirrored restatement of the same claim
/// does not compete.
pub fn competition_rule(a: &FactQuad, b: &FactQuad) -> Option<CompetitionRule> {
    if a == b {
        return None;
    }
    if a.category1 == b.category1 && a.category2 == b.category2 {
        // Categories equal and quads differ, so some value differs.
        return Some(if a.head() == b.head() {
            CompetitionRule::SharedHead
        } else if a.tail() == b.tail() {
            CompetitionRule::SharedTail
        } else {
            CompetitionRule::CategoryPair
        });
    }
    if a.category1 == b.category2 && a.category2 == b.category1 {
        if a.value1 == b.value2 && a.value2 == b.value1 {
            return None;
        }
        return Some(if a.head() == b.tail() {
            CompetitionRule::SharedHead
        } else if a.tail() == b.head() {
            CompetitionRule::SharedTail
        } else {
            CompetitionRule::CategoryPair
        });
    }
    None
}

/// Whether `a` and `b` compete for confidence.
pub fn competes(a: &FactQuad, b: &FactQuad) -> bool {
    competition_rule(a, b).is_some()
}

/// Only identical facts support each other.
pub fn supports(a: &FactQuad, b: &FactQuad) -> bool {
    a == b
}

/// `a`'s tail is `b`'s head.
pub fn chains_into(a: &FactQuad, b: &FactQuad) -> bool {
    a.tail() == b.head()
}

/// Same ordered category pair, exactly one value shared.
///
/// Narrower than [`competes`]; used by the trust-path analysis only.
pub fn contradicts_directly(a: &FactQuad, b: &FactQuad) -> bool {
    if a.category1 != b.category1 || a.category2 != b.category2 {
        return false;
    }
    (a.value1 == b.value1) != (a.value2 == b.value2)
}

/// Classify `b` relative to `a`. Competition takes precedence over chaining.
pub fn classify(a: &FactQuad, b: &FactQuad) -> Relationship {
    if supports(a, b) {
        Relationship::Identical
    } else if let Some(rule) = competition_rule(a, b) {
        Relationship::Competing(rule)
    } else if chains_into(a, b) {
        Relationship::ChainsForward
    } else if chains_into(b, a) {
        Relationship::ChainsBackward
    } else {
        Relationship::Unrelated
    }
}
