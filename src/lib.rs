//! Topology-Aware Worker Election and Phase Synchronization
//!
//! This library crate lets an SPMD process group run phases where only a
//! bounded, hardware-aware subset of processes does the work while the rest
//! wait. Every process independently derives the same collision-free worker
//! assignment from the machine's topology, and the whole group moves through
//! each phase together behind a pair of barriers.
//!
//! ## Architecture Modules
//! The crate is composed of four loosely coupled subsystems:
//!
//! - **`group`**: The process-group seam. Defines rank identities, the
//!   `ProcessGroup` trait (rank, size, barrier), and an in-process backend
//!   for driving whole groups inside one runtime.
//! - **`topology`**: The hardware layout view. Answers how many resources of
//!   a kind exist and which node-local ranks are bound to each one, with a
//!   generation counter that tracks binding changes.
//! - **`election`**: The decision core. Resolves topology answers into a
//!   membership mapping and runs a deterministic first-fit election over it,
//!   so the group agrees on workers without exchanging messages.
//! - **`phase`**: The synchronization layer. Drives one phase end to end per
//!   process: elect, rendezvous, work if elected, rendezvous again.

pub mod election;
pub mod group;
pub mod phase;
pub mod topology;
