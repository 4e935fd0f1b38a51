//! Worker Election Module
//!
//! The core of the crate: turning "which ranks are bound to which hardware
//! resource" into "which processes work this phase". Every process computes
//! its own answer from the same mapping, so the group agrees on the winners
//! without exchanging a single message.
//!
//! ## Pipeline
//! 1. **Resolution**: `MembershipResolver` queries the topology per resource
//!    index and assembles a `ResourceMembership` snapshot, all-or-nothing.
//! 2. **Election**: `WorkerElector` runs a deterministic first-fit scan over
//!    the snapshot and hands each rank a `Worker` or `Waiter` outcome.
//! 3. **Memoization**: an opt-in `ElectionCache` reuses outcomes until the
//!    topology generation moves.
//!
//! ## Submodules
//! - **types**: policies, membership snapshots, and outcomes.
//! - **resolver**: topology-to-membership resolution.
//! - **elector**: the first-fit election itself.
//! - **cache**: generation-keyed outcome memoization.

pub mod cache;
pub mod elector;
pub mod resolver;
pub mod types;
