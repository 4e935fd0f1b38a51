//! Topology Module Tests
//!
//! Covers resource naming, the `StaticTopology` backend, and generation
//! tracking across rebinds.
//!
//! ## Test Scopes
//! - **Naming**: display and wire formats for resource identifiers.
//! - **Queries**: counts and per-resource rank lists, including the unknown
//!   cases.
//! - **Rebinding**: table swaps are visible and move the generation.

#[cfg(test)]
mod tests {
    use crate::group::types::NodeRank;
    use crate::topology::service::{StaticTopology, TopologyError, TopologyService};
    use crate::topology::types::{ResourceId, ResourceKind};

    fn socket(index: u32) -> ResourceId {
        ResourceId::new(ResourceKind::Socket, index)
    }

    // ============================================================
    // RESOURCE IDENTIFIER TESTS
    // ============================================================

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Machine.to_string(), "machine");
        assert_eq!(ResourceKind::NumaNode.to_string(), "numanode");
        assert_eq!(ResourceKind::Socket.to_string(), "socket");
        assert_eq!(ResourceKind::Core.to_string(), "core");
        assert_eq!(ResourceKind::ProcessingUnit.to_string(), "pu");
    }

    #[test]
    fn test_resource_id_display() {
        assert_eq!(socket(0).to_string(), "socket0");
        assert_eq!(
            ResourceId::new(ResourceKind::Core, 17).to_string(),
            "core17"
        );
    }

    #[test]
    fn test_resource_id_serialization() {
        let id = socket(1);

        let json = serde_json::to_string(&id).expect("Serialization failed");
        let restored: ResourceId = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(restored, id);

        let encoded = bincode::serialize(&id).expect("Bincode serialization failed");
        let decoded: ResourceId =
            bincode::deserialize(&encoded).expect("Bincode deserialization failed");
        assert_eq!(decoded, id);
    }

    // ============================================================
    // STATIC TOPOLOGY QUERY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_resource_count_per_kind() {
        let topology = StaticTopology::new(
            ResourceKind::Socket,
            vec![vec![NodeRank(0)], vec![NodeRank(1)]],
        );

        let sockets = topology
            .resource_count(ResourceKind::Socket)
            .await
            .expect("count failed");
        assert_eq!(sockets, 2);

        // A kind the backend was never told about simply has zero resources.
        let cores = topology
            .resource_count(ResourceKind::Core)
            .await
            .expect("count failed");
        assert_eq!(cores, 0);
    }

    #[tokio::test]
    async fn test_empty_topology_counts_zero() {
        let topology = StaticTopology::empty();

        let count = topology
            .resource_count(ResourceKind::Socket)
            .await
            .expect("count failed");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_ranks_bound_to_keeps_discovery_order() {
        let topology = StaticTopology::new(
            ResourceKind::Socket,
            vec![vec![NodeRank(5), NodeRank(2), NodeRank(9)]],
        );

        let ranks = topology
            .ranks_bound_to(socket(0))
            .await
            .expect("query failed");

        assert_eq!(ranks, vec![NodeRank(5), NodeRank(2), NodeRank(9)]);
    }

    #[tokio::test]
    async fn test_ranks_bound_to_unknown_index() {
        let topology = StaticTopology::new(
            ResourceKind::Socket,
            vec![vec![NodeRank(0)], vec![NodeRank(1)]],
        );

        let err = topology
            .ranks_bound_to(socket(2))
            .await
            .expect_err("query should fail");

        assert!(matches!(
            err,
            TopologyError::UnknownResource {
                kind: ResourceKind::Socket,
                index: 2
            }
        ));
        assert!(err.to_string().contains("socket2"));
    }

    #[tokio::test]
    async fn test_ranks_bound_to_unknown_kind() {
        let topology = StaticTopology::new(ResourceKind::Socket, vec![vec![NodeRank(0)]]);

        let err = topology
            .ranks_bound_to(ResourceId::new(ResourceKind::NumaNode, 0))
            .await
            .expect_err("query should fail");

        assert!(matches!(err, TopologyError::UnknownResource { .. }));
    }

    // ============================================================
    // REBIND TESTS
    // ============================================================

    #[tokio::test]
    async fn test_rebind_bumps_generation_and_swaps_table() {
        let topology = StaticTopology::new(ResourceKind::Socket, vec![vec![NodeRank(0)]]);
        assert_eq!(topology.generation(), 1);

        topology.rebind(
            ResourceKind::Socket,
            vec![vec![NodeRank(3)], vec![NodeRank(4)]],
        );

        assert_eq!(topology.generation(), 2);

        let count = topology
            .resource_count(ResourceKind::Socket)
            .await
            .expect("count failed");
        assert_eq!(count, 2);

        let ranks = topology
            .ranks_bound_to(socket(0))
            .await
            .expect("query failed");
        assert_eq!(ranks, vec![NodeRank(3)]);
    }
}
