use serde::{Deserialize, Serialize};
use std::fmt;

/// The hardware partition types a topology backend can report on.
///
/// Mirrors the usual hwloc object hierarchy from the whole machine down to a
/// single processing unit. Ordering follows containment: a `Machine` holds
/// `NumaNode`s, which hold `Socket`s, and so on down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Machine,
    NumaNode,
    Socket,
    Core,
    ProcessingUnit,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Machine => "machine",
            ResourceKind::NumaNode => "numanode",
            ResourceKind::Socket => "socket",
            ResourceKind::Core => "core",
            ResourceKind::ProcessingUnit => "pu",
        };
        write!(f, "{}", name)
    }
}

/// One concrete hardware resource: a kind plus its index on the machine.
///
/// Indices are dense and start at zero, so `socket1` on a two-socket box is
/// the last socket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub kind: ResourceKind,
    pub index: u32,
}

impl ResourceId {
    pub fn new(kind: ResourceKind, index: u32) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.index)
    }
}
