use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::info;

use super::types::{ResourceId, ResourceKind};
use crate::group::types::NodeRank;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("topology backend not initialized")]
    NotInitialized,

    #[error("unknown resource {kind}{index}")]
    UnknownResource { kind: ResourceKind, index: u32 },

    #[error("topology backend error: {reason}")]
    Backend { reason: String },
}

/// Read-only view of the machine's hardware layout.
///
/// Backends answer two questions: how many resources of a kind exist, and
/// which node-local ranks are bound to a given resource. The `generation`
/// counter moves whenever the underlying binding data is replaced, so callers
/// can tell a fresh answer from a stale one without comparing whole tables.
#[async_trait]
pub trait TopologyService: Send + Sync {
    /// Number of resources of `kind` present on this machine.
    async fn resource_count(&self, kind: ResourceKind) -> Result<u32, TopologyError>;

    /// Node-local ranks whose binding overlaps `resource`, in discovery order.
    async fn ranks_bound_to(&self, resource: ResourceId) -> Result<Vec<NodeRank>, TopologyError>;

    /// Monotonic counter identifying the current binding tables.
    fn generation(&self) -> u64;
}

/// Topology backend fed from pre-computed binding tables.
///
/// Holds one table per resource kind: the outer vector is indexed by resource
/// index, the inner vectors list the bound ranks in discovery order.
pub struct StaticTopology {
    bindings: DashMap<ResourceKind, Vec<Vec<NodeRank>>>,
    generation: AtomicU64,
}

impl StaticTopology {
    pub fn new(kind: ResourceKind, lists: Vec<Vec<NodeRank>>) -> Self {
        let bindings = DashMap::new();
        bindings.insert(kind, lists);

        Self {
            bindings,
            generation: AtomicU64::new(1),
        }
    }

    /// A topology with no resources at all.
    pub fn empty() -> Self {
        Self {
            bindings: DashMap::new(),
            generation: AtomicU64::new(1),
        }
    }

    /// Replaces the binding table for `kind` and bumps the generation.
    pub fn rebind(&self, kind: ResourceKind, lists: Vec<Vec<NodeRank>>) {
        self.bindings.insert(kind, lists);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            "Installed new {} binding table (generation {})",
            kind, generation
        );
    }
}

#[async_trait]
impl TopologyService for StaticTopology {
    async fn resource_count(&self, kind: ResourceKind) -> Result<u32, TopologyError> {
        let count = self
            .bindings
            .get(&kind)
            .map(|lists| lists.len() as u32)
            .unwrap_or(0);

        Ok(count)
    }

    async fn ranks_bound_to(&self, resource: ResourceId) -> Result<Vec<NodeRank>, TopologyError> {
        let lists = self
            .bindings
            .get(&resource.kind)
            .ok_or(TopologyError::UnknownResource {
                kind: resource.kind,
                index: resource.index,
            })?;

        lists
            .get(resource.index as usize)
            .cloned()
            .ok_or(TopologyError::UnknownResource {
                kind: resource.kind,
                index: resource.index,
            })
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
