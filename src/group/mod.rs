//! Process Group Module
//!
//! The seam between this crate and the collective-communication layer that
//! launches the job (MPI or similar). The crate never moves bytes between
//! processes itself; it only asks the group for identities and barriers.
//!
//! ## Core Pieces
//! - **Identities**: `GlobalRank` / `NodeRank` newtypes and the `JobContext`
//!   snapshot passed explicitly into every phase.
//! - **`ProcessGroup`**: the trait a communicator backend implements
//!   (rank, node-local rank, group size, barrier).
//! - **`LocalGroup`**: an in-process backend driving N simulated processes
//!   over one shared barrier, used by the tests and by embedders that run a
//!   whole job inside a single OS process.

pub mod local;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
