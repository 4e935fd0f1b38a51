use serde::{Deserialize, Serialize};
use std::fmt;

/// Global rank of a process, unique across the whole group.
///
/// Assigned by the process-group layer at job start and immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalRank(pub u32);

impl fmt::Display for GlobalRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node-local rank of a process, unique among the processes sharing one machine.
///
/// Topology backends report bindings in terms of node-local ranks, so this is
/// the identity the election runs on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRank(pub u32);

impl fmt::Display for NodeRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity snapshot of the calling process within one job.
///
/// Passed explicitly into every phase instead of living in ambient state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobContext {
    pub rank: GlobalRank,
    pub node_rank: NodeRank,
    pub group_size: u32,
}
