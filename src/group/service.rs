use async_trait::async_trait;
use thiserror::Error;

use super::types::{GlobalRank, JobContext, NodeRank};

/// Failure of a collective rendezvous.
#[derive(Debug, Error)]
#[error("group barrier failed: {reason}")]
pub struct BarrierError {
    pub reason: String,
}

impl BarrierError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The collective-communication seam.
///
/// Implementations wrap whatever actually connects the processes of a job (an
/// MPI communicator, a launcher-provided runtime, or the in-process
/// `LocalGroup`). Rank identities are fixed for the lifetime of the handle.
#[async_trait]
pub trait ProcessGroup: Send + Sync {
    /// Global rank of the calling process, unique across the group.
    fn rank(&self) -> GlobalRank;

    /// Node-local rank, unique among processes on this machine.
    fn node_rank(&self) -> NodeRank;

    /// Total number of processes in the group.
    fn size(&self) -> u32;

    /// Blocks until every process in the group has arrived.
    async fn barrier(&self) -> Result<(), BarrierError>;

    /// Snapshot of this process's identity for passing into a phase.
    fn context(&self) -> JobContext {
        JobContext {
            rank: self.rank(),
            node_rank: self.node_rank(),
            group_size: self.size(),
        }
    }
}
