use factmatrix_core::FactHash;

/// Append-only list of fact hashes in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactIndex {
    hashes: Vec<FactHash>,
}

impl FactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, hash: FactHash) {
        self.hashes.push(hash);
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactHash> + '_ {
        self.hashes.iter()
    }

    /// Creation position of `hash`, if indexed.
    pub fn position(&self, hash: &FactHash) -> Option<usize> {
        self.hashes.iter().position(|h| h == hash)
    }

    pub fn as_slice(&self) -> &[FactHash] {
        &self.hashes
    }
}
