//! Phase Synchronization Module
//!
//! Ties elections to the process group. A phase is one synchronized unit of
//! work: the group elects workers, everyone crosses an entry barrier, elected
//! processes run the work function, and everyone meets again at an exit
//! barrier before moving on.
//!
//! ## Core Pieces
//! - **PhaseState**: the per-process lifecycle and its legal transitions.
//! - **WorkContext**: the identity and resource handed to elected work.
//! - **PhaseRunner**: drives election, barriers, and failure routing for one
//!   process.

pub mod runner;
pub mod types;
