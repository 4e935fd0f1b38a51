//! Group Module Tests
//!
//! Covers the process-group seam and the in-process `LocalGroup` backend.
//!
//! ## Test Scopes
//! - **Identities**: rank newtype semantics and `JobContext` snapshots.
//! - **Serialization**: identities survive the encodings used for snapshot
//!   comparison across processes.
//! - **Barrier Semantics**: `LocalGroup` releases nobody until everyone has
//!   arrived.

#[cfg(test)]
mod tests {
    use crate::group::local::LocalGroup;
    use crate::group::service::{BarrierError, ProcessGroup};
    use crate::group::types::{GlobalRank, JobContext, NodeRank};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ============================================================
    // RANK TESTS
    // ============================================================

    #[test]
    fn test_rank_equality_and_ordering() {
        assert_eq!(GlobalRank(3), GlobalRank(3));
        assert_ne!(GlobalRank(3), GlobalRank(4));
        assert!(NodeRank(1) < NodeRank(2));

        let mut ranks = vec![NodeRank(5), NodeRank(0), NodeRank(2)];
        ranks.sort();
        assert_eq!(ranks, vec![NodeRank(0), NodeRank(2), NodeRank(5)]);
    }

    #[test]
    fn test_rank_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeRank(1));
        set.insert(NodeRank(1)); // duplicate
        set.insert(NodeRank(2));

        assert_eq!(set.len(), 2, "HashSet should keep 2 unique ranks");
    }

    #[test]
    fn test_rank_display() {
        assert_eq!(GlobalRank(7).to_string(), "7");
        assert_eq!(NodeRank(0).to_string(), "0");
    }

    // ============================================================
    // JOB CONTEXT TESTS
    // ============================================================

    #[test]
    fn test_job_context_serialization() {
        let ctx = JobContext {
            rank: GlobalRank(4),
            node_rank: NodeRank(1),
            group_size: 8,
        };

        let json = serde_json::to_string(&ctx).expect("Serialization failed");
        let restored: JobContext = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(restored, ctx);

        let encoded = bincode::serialize(&ctx).expect("Bincode serialization failed");
        let decoded: JobContext =
            bincode::deserialize(&encoded).expect("Bincode deserialization failed");
        assert_eq!(decoded, ctx);
    }

    // ============================================================
    // LOCAL GROUP TESTS
    // ============================================================

    #[tokio::test]
    async fn test_local_group_assigns_ranks_in_order() {
        let group = LocalGroup::launch(4);

        assert_eq!(group.len(), 4);

        for (i, member) in group.iter().enumerate() {
            assert_eq!(member.rank(), GlobalRank(i as u32));
            assert_eq!(member.node_rank(), NodeRank(i as u32));
            assert_eq!(member.size(), 4);
        }
    }

    #[tokio::test]
    async fn test_local_group_context_snapshot() {
        let group = LocalGroup::launch(3);

        let ctx = group[2].context();
        assert_eq!(ctx.rank, GlobalRank(2));
        assert_eq!(ctx.node_rank, NodeRank(2));
        assert_eq!(ctx.group_size, 3);
    }

    #[tokio::test]
    async fn test_local_group_barrier_releases_only_when_all_arrive() {
        let group = LocalGroup::launch(5);
        let arrived = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for member in group {
            let arrived = arrived.clone();
            handles.push(tokio::spawn(async move {
                arrived.fetch_add(1, Ordering::SeqCst);
                member.barrier().await.expect("barrier failed");
                // By the time anyone is released, all five must have arrived.
                arrived.load(Ordering::SeqCst)
            }));
        }

        for handle in handles {
            let seen = handle.await.expect("task panicked");
            assert_eq!(seen, 5);
        }
    }

    #[test]
    fn test_barrier_error_message_names_reason() {
        let err = BarrierError::new("peer vanished");

        assert!(err.to_string().contains("peer vanished"));
    }
}
