use serde::{Deserialize, Serialize};

use crate::group::types::{GlobalRank, JobContext, NodeRank};
use crate::topology::types::ResourceId;

/// Where a process stands inside one phase.
///
/// The legal cycle is `Idle -> Electing -> (Working | Waiting) -> Synced ->
/// Idle`. Anything else is a bug in the runner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhaseState {
    /// Between phases, no decision made.
    Idle,
    /// Deciding who works, nothing entered yet.
    Electing,
    /// Elected and executing the work function.
    Working,
    /// Not elected, blocked until workers finish.
    Waiting,
    /// Past the exit barrier, phase complete.
    Synced,
}

impl PhaseState {
    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(self, next: PhaseState) -> bool {
        use PhaseState::*;

        matches!(
            (self, next),
            (Idle, Electing)
                | (Electing, Working)
                | (Electing, Waiting)
                | (Working, Synced)
                | (Waiting, Synced)
                | (Synced, Idle)
        )
    }
}

/// Identity handed to the work function of an elected process.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkContext {
    pub rank: GlobalRank,
    pub node_rank: NodeRank,
    pub group_size: u32,
    /// The resource this process was elected for.
    pub resource: ResourceId,
}

impl WorkContext {
    pub fn new(ctx: &JobContext, resource: ResourceId) -> Self {
        Self {
            rank: ctx.rank,
            node_rank: ctx.node_rank,
            group_size: ctx.group_size,
            resource,
        }
    }
}
