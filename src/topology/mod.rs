//! Hardware Topology Module
//!
//! Describes the machine's hardware layout to the rest of the crate. The
//! election pipeline needs to know how many resources of a given kind exist
//! and which node-local ranks are bound to each one; this module defines that
//! query surface and a table-driven backend for it. Discovering the layout in
//! the first place (walking the machine's sockets and cores) is a backend's
//! job, not this module's.
//!
//! ## Core Pieces
//! - **Resource identifiers**: `ResourceKind` and `ResourceId` name hardware
//!   partitions from the whole machine down to a single processing unit.
//! - **TopologyService**: the async query trait backends implement, with a
//!   generation counter that moves when binding data is replaced.
//! - **StaticTopology**: a backend fed from pre-computed binding tables,
//!   suitable for tests and for hosts where bindings are configured up front.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
