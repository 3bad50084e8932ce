//! Depth-limited search for chains of facts between two category/value pairs.

use std::collections::{BTreeSet, HashSet};

use factmatrix_core::constants::MAX_SUPPORT_PATH_DEPTH;
use factmatrix_core::{Fact, FactHash};

use super::RelationshipAnalyzer;

type Anchor<'s> = (&'s str, &'s str);

struct Search<'a, 't> {
    target: Anchor<'t>,
    path: Vec<&'a Fact>,
    on_path: HashSet<FactHash>,
    seen: HashSet<BTreeSet<FactHash>>,
    found: Vec<Vec<&'a Fact>>,
}

impl<'a> RelationshipAnalyzer<'a> {
    /// Every chain of at most `MAX_SUPPORT_PATH_DEPTH + 1` facts leading from
    /// `from` to `to`, each consecutive pair of facts sharing a slot.
    ///
    /// A fact appears at most once per chain, and chains over the same set of
    /// facts are reported once. Facts are tried in index order.
    pub fn paths_between(&self, from: Anchor<'_>, to: Anchor<'_>) -> Vec<Vec<&'a Fact>> {
        let mut search = Search {
            target: to,
            path: Vec::new(),
            on_path: HashSet::new(),
            seen: HashSet::new(),
            found: Vec::new(),
        };
        self.explore(from, 0, &mut search);
        search.found
    }

    /// Pairs appearing opposite `(category, value)` in some fact, first
    /// occurrence first.
    pub fn connections(&self, category: &str, value: &str) -> Vec<Anchor<'a>> {
        let mut out: Vec<Anchor<'a>> = Vec::new();
        for fact in self.store.iter() {
            if let Some(other) = fact.quad.opposite_of(category, value) {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
        out
    }

    fn explore(&self, current: Anchor<'_>, depth: usize, search: &mut Search<'a, '_>) {
        if depth > MAX_SUPPORT_PATH_DEPTH {
            return;
        }
        for fact in self.store.iter() {
            if search.on_path.contains(&fact.hash) {
                continue;
            }
            let Some(next) = fact.quad.opposite_of(current.0, current.1) else {
                continue;
            };
            search.on_path.insert(fact.hash);
            search.path.push(fact);
            if next == search.target {
                let key: BTreeSet<FactHash> = search.path.iter().map(|f| f.hash).collect();
                if search.seen.insert(key) {
                    search.found.push(search.path.clone());
                }
            } else {
                self.explore(next, depth + 1, search);
            }
            search.path.pop();
            search.on_path.remove(&fact.hash);
        }
    }
}
