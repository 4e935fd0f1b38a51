use thiserror::Error;
use tracing::debug;

use super::types::{ElectionOutcome, ElectionPolicy, ResourceMembership};
use crate::group::types::NodeRank;
use crate::topology::types::ResourceId;

/// Malformed election input.
///
/// Cannot occur on a mapping that came out of a successful resolve; hand-built
/// mappings can trip it.
#[derive(Debug, Error)]
pub enum ElectionInputError {
    #[error("rank {rank} listed twice under {resource}")]
    DuplicateRank { resource: ResourceId, rank: NodeRank },
}

/// Deterministic first-fit election over a resource membership mapping.
///
/// Scans resources in index order. A rank wins the first resource whose list
/// places it within the quota; ties inside a list are broken by list position,
/// which is the backend's discovery order. Every process running the same
/// mapping through the same quota computes the same winners.
pub struct WorkerElector {
    quota: u32,
}

impl WorkerElector {
    pub fn new(quota: u32) -> Self {
        Self { quota }
    }

    pub fn from_policy(policy: &ElectionPolicy) -> Self {
        Self::new(policy.workers_per_resource)
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Decides whether `me` works this phase, and on which resource.
    pub fn elect(
        &self,
        membership: &ResourceMembership,
        me: NodeRank,
    ) -> Result<ElectionOutcome, ElectionInputError> {
        for (resource, ranks) in membership.iter() {
            let mut position = None;

            for (slot, &rank) in ranks.iter().enumerate() {
                if rank == me {
                    if position.is_some() {
                        return Err(ElectionInputError::DuplicateRank { resource, rank: me });
                    }
                    position = Some(slot);
                }
            }

            if let Some(slot) = position
                && (slot as u32) < self.quota
            {
                debug!("Rank {} elected for {} (position {})", me, resource, slot);
                return Ok(ElectionOutcome::Worker { resource });
            }
        }

        Ok(ElectionOutcome::Waiter)
    }
}

/// Runs the election for every rank in the mapping, sorted by rank.
///
/// Diagnostic view of the full assignment, handy for logging and for
/// asserting global properties in tests.
pub fn assignment_roster(
    membership: &ResourceMembership,
    quota: u32,
) -> Result<Vec<(NodeRank, ElectionOutcome)>, ElectionInputError> {
    let mut ranks: Vec<NodeRank> = Vec::new();
    for (_, bound) in membership.iter() {
        for &rank in bound {
            if !ranks.contains(&rank) {
                ranks.push(rank);
            }
        }
    }
    ranks.sort();

    let elector = WorkerElector::new(quota);
    let mut roster = Vec::with_capacity(ranks.len());

    for rank in ranks {
        let outcome = elector.elect(membership, rank)?;
        roster.push((rank, outcome));
    }

    Ok(roster)
}
