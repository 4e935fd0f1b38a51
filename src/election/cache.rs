use dashmap::DashMap;

use super::types::ElectionOutcome;
use crate::group::types::NodeRank;
use crate::topology::types::ResourceKind;

const MAX_CACHED_OUTCOMES: usize = 1024;

/// Everything an outcome depends on.
///
/// A bump of the topology generation changes the key, so stale entries can
/// never answer a fresh phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeKey {
    pub generation: u64,
    pub kind: ResourceKind,
    pub quota: u32,
    pub rank: NodeRank,
}

/// Memoized election outcomes, keyed by everything they depend on.
#[derive(Default)]
pub struct ElectionCache {
    outcomes: DashMap<OutcomeKey, ElectionOutcome>,
}

impl ElectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &OutcomeKey) -> Option<ElectionOutcome> {
        self.outcomes.get(key).map(|entry| *entry.value())
    }

    pub fn store(&self, key: OutcomeKey, outcome: ElectionOutcome) {
        if self.outcomes.len() >= MAX_CACHED_OUTCOMES {
            // Entries from older generations can never be looked up again.
            let current = key.generation;
            self.outcomes.retain(|k, _| k.generation == current);
        }

        self.outcomes.insert(key, outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn clear(&self) {
        self.outcomes.clear();
    }
}
