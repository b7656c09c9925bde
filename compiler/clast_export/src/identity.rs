//! Identity rendering and deduplication.
//!
//! Every node is written as an identity string, either the raw
//! [`NodeIdentity`] token or a dense integer assigned by an
//! [`IdentityTable`] the first time the identity is seen. Dense integers
//! depend only on traversal order, so anonymized exports of the same tree
//! are byte-identical across runs.

use clast_ir::NodeIdentity;
use rustc_hash::FxHashMap;

use crate::IdentityMode;

#[derive(Clone, Debug, Default)]
pub struct IdentityTable {
    ids: FxHashMap<NodeIdentity, u32>,
}

impl IdentityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense id of `identity`, assigning the next free one on first sight.
    pub fn intern(&mut self, identity: NodeIdentity) -> u32 {
        let next = u32::try_from(self.ids.len()).unwrap_or(u32::MAX);
        *self.ids.entry(identity).or_insert(next)
    }

    /// Dense id of an identity already seen.
    pub fn get(&self, identity: NodeIdentity) -> Option<u32> {
        self.ids.get(&identity).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forget every assignment; the next identity gets 0 again.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// String written for `identity` under `mode`.
    pub fn render(&mut self, identity: NodeIdentity, mode: IdentityMode) -> String {
        match mode {
            IdentityMode::Raw => identity.to_string(),
            IdentityMode::Anonymized => self.intern(identity).to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
