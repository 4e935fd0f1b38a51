use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Barrier;

use super::service::{BarrierError, ProcessGroup};
use super::types::{GlobalRank, NodeRank};

/// In-process stand-in for a real communicator: one handle per simulated
/// process, all sharing a single barrier. Node-local ranks equal global ranks
/// since everything lives on one simulated machine.
pub struct LocalGroup {
    rank: GlobalRank,
    node_rank: NodeRank,
    size: u32,
    barrier: Arc<Barrier>,
}

impl LocalGroup {
    /// Creates handles for a simulated group of `size` processes.
    ///
    /// Each handle belongs to one task; the group only makes progress if
    /// every handle's owner reaches the barrier.
    pub fn launch(size: u32) -> Vec<Arc<Self>> {
        let barrier = Arc::new(Barrier::new(size as usize));

        (0..size)
            .map(|rank| {
                Arc::new(Self {
                    rank: GlobalRank(rank),
                    node_rank: NodeRank(rank),
                    size,
                    barrier: barrier.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl ProcessGroup for LocalGroup {
    fn rank(&self) -> GlobalRank {
        self.rank
    }

    fn node_rank(&self) -> NodeRank {
        self.node_rank
    }

    fn size(&self) -> u32 {
        self.size
    }

    async fn barrier(&self) -> Result<(), BarrierError> {
        self.barrier.wait().await;
        Ok(())
    }
}
