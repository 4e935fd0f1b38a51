use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::types::ResourceMembership;
use crate::group::types::NodeRank;
use crate::topology::service::{TopologyError, TopologyService};
use crate::topology::types::{ResourceId, ResourceKind};

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("topology query for {resource} failed")]
    Query {
        resource: ResourceId,
        #[source]
        source: TopologyError,
    },

    #[error("rank {rank} listed twice under {resource}")]
    DuplicateMember { resource: ResourceId, rank: NodeRank },
}

/// Builds the resource-to-ranks mapping an election runs on.
///
/// Queries the topology once per resource index and assembles the answers
/// into a single `ResourceMembership`. Resolution is all-or-nothing: if any
/// query fails, the whole mapping is abandoned, because electing over a
/// partial mapping would let two processes disagree about who won.
pub struct MembershipResolver {
    topology: Arc<dyn TopologyService>,
}

impl MembershipResolver {
    pub fn new(topology: Arc<dyn TopologyService>) -> Self {
        Self { topology }
    }

    /// Resolves the bound ranks for resource indices `0..count` of `kind`.
    pub async fn resolve(
        &self,
        kind: ResourceKind,
        count: u32,
    ) -> Result<ResourceMembership, ResolverError> {
        let generation = self.topology.generation();
        let mut members = Vec::with_capacity(count as usize);

        for index in 0..count {
            let resource = ResourceId::new(kind, index);

            let ranks = self
                .topology
                .ranks_bound_to(resource)
                .await
                .map_err(|source| ResolverError::Query { resource, source })?;

            check_no_duplicates(resource, &ranks)?;

            debug!("Resolved {}: {} bound rank(s)", resource, ranks.len());
            members.push(ranks);
        }

        Ok(ResourceMembership::new(kind, members, generation))
    }
}

/// A rank may span resources, but within one resource's list it appears at
/// most once.
fn check_no_duplicates(resource: ResourceId, ranks: &[NodeRank]) -> Result<(), ResolverError> {
    let mut seen = HashSet::new();

    for &rank in ranks {
        if !seen.insert(rank) {
            return Err(ResolverError::DuplicateMember { resource, rank });
        }
    }

    Ok(())
}
