use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::group::types::NodeRank;
use crate::topology::types::{ResourceId, ResourceKind};

/// Workers elected per resource when no policy is given.
pub const DEFAULT_WORKERS_PER_RESOURCE: u32 = 2;

/// What to elect over and how many winners each resource gets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElectionPolicy {
    /// The resource kind the election partitions the node by.
    pub kind: ResourceKind,
    /// Upper bound on elected workers per resource.
    pub workers_per_resource: u32,
}

impl ElectionPolicy {
    pub fn new(kind: ResourceKind, workers_per_resource: u32) -> Self {
        Self {
            kind,
            workers_per_resource,
        }
    }
}

impl Default for ElectionPolicy {
    /// Two workers per socket, a sane starting point for bandwidth-bound work.
    fn default() -> Self {
        Self::new(ResourceKind::Socket, DEFAULT_WORKERS_PER_RESOURCE)
    }
}

/// Snapshot of which node-local ranks are bound to each resource of a kind.
///
/// One owned container: per-resource lists live and die with the mapping.
/// The index into `members` is the resource index, and each inner list keeps
/// the backend's discovery order, which is what makes elections deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceMembership {
    kind: ResourceKind,
    members: Vec<Vec<NodeRank>>,
    generation: u64,
}

impl ResourceMembership {
    pub fn new(kind: ResourceKind, members: Vec<Vec<NodeRank>>, generation: u64) -> Self {
        Self {
            kind,
            members,
            generation,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Topology generation the mapping was resolved against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resource_count(&self) -> u32 {
        self.members.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Ranks bound to the resource at `index`, empty if out of range.
    pub fn ranks_on(&self, index: u32) -> &[NodeRank] {
        self.members
            .get(index as usize)
            .map(|ranks| ranks.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates resources in index order with their bound ranks.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &[NodeRank])> {
        let kind = self.kind;
        self.members
            .iter()
            .enumerate()
            .map(move |(index, ranks)| (ResourceId::new(kind, index as u32), ranks.as_slice()))
    }

    /// Content hash of the whole mapping.
    ///
    /// Processes can compare fingerprints to confirm they resolved identical
    /// mappings without shipping the tables around.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        if let Ok(encoded) = bincode::serialize(self) {
            encoded.hash(&mut hasher);
        }

        hasher.finish()
    }
}

/// The role a process drew for one phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ElectionOutcome {
    /// Elected to work the phase on `resource`.
    Worker { resource: ResourceId },
    /// Not elected; waits at the exit barrier until workers finish.
    Waiter,
}

impl ElectionOutcome {
    pub fn is_worker(&self) -> bool {
        matches!(self, ElectionOutcome::Worker { .. })
    }

    pub fn resource(&self) -> Option<ResourceId> {
        match self {
            ElectionOutcome::Worker { resource } => Some(*resource),
            ElectionOutcome::Waiter => None,
        }
    }
}
