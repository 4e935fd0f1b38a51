//! Phase Runner
//!
//! Drives one synchronized phase end to end for a single process: decide a
//! role, rendezvous with the group, run the work if elected, rendezvous again.
//!
//! ## Responsibilities
//! - **Election**: resolve the membership mapping and compute this process's
//!   outcome, optionally through the memoization cache.
//! - **Rendezvous**: pair every phase with an entry and an exit barrier so the
//!   whole group moves through it together.
//! - **Failure Routing**: surface which step failed, and abort without
//!   entering collectives the rest of the group is not entering.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use super::types::{PhaseState, WorkContext};
use crate::election::cache::{ElectionCache, OutcomeKey};
use crate::election::elector::{ElectionInputError, WorkerElector};
use crate::election::resolver::{MembershipResolver, ResolverError};
use crate::election::types::{ElectionOutcome, ElectionPolicy};
use crate::group::service::{BarrierError, ProcessGroup};
use crate::group::types::JobContext;
use crate::topology::service::{TopologyError, TopologyService};

/// Which of the phase's two collectives failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierPoint {
    Entry,
    Exit,
}

impl fmt::Display for BarrierPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarrierPoint::Entry => "entry",
            BarrierPoint::Exit => "exit",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("membership resolution failed")]
    Resolver(#[from] ResolverError),

    #[error("election rejected its input")]
    Election(#[from] ElectionInputError),

    #[error("{point} barrier failed")]
    Barrier {
        point: BarrierPoint,
        #[source]
        source: BarrierError,
    },

    #[error("work function failed: {0}")]
    Work(anyhow::Error),
}

/// Per-process driver for topology-aware phases.
///
/// Construction snapshots the resource count for the policy's kind, so every
/// later phase resolves the same set of resource indices. Membership itself is
/// resolved fresh each phase unless the cache is enabled.
pub struct PhaseRunner {
    group: Arc<dyn ProcessGroup>,
    topology: Arc<dyn TopologyService>,
    resolver: MembershipResolver,
    elector: WorkerElector,
    policy: ElectionPolicy,
    resource_count: u32,
    cache: Option<ElectionCache>,
}

impl PhaseRunner {
    pub async fn new(
        group: Arc<dyn ProcessGroup>,
        topology: Arc<dyn TopologyService>,
        policy: ElectionPolicy,
    ) -> Result<Self, TopologyError> {
        let resource_count = topology.resource_count(policy.kind).await?;

        tracing::info!(
            "Phase runner ready: {} {} resource(s), quota {} per resource",
            resource_count,
            policy.kind,
            policy.workers_per_resource
        );

        Ok(Self {
            group,
            topology: topology.clone(),
            resolver: MembershipResolver::new(topology),
            elector: WorkerElector::from_policy(&policy),
            policy,
            resource_count,
            cache: None,
        })
    }

    /// Enables outcome memoization across phases.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(ElectionCache::new());
        self
    }

    pub fn policy(&self) -> ElectionPolicy {
        self.policy
    }

    pub fn resource_count(&self) -> u32 {
        self.resource_count
    }

    /// Runs one synchronized phase.
    ///
    /// Elected processes cross the entry barrier, run `work`, then cross the
    /// exit barrier. Waiters skip the work and block at the exit barrier until
    /// the workers are done, which is what bounds concurrent access to each
    /// resource. Both roles cross exactly two collectives per phase.
    ///
    /// The first failing step aborts the phase: resolution and election
    /// failures happen before any barrier, and a failed work function skips
    /// the exit barrier. Nothing is retried.
    pub async fn run_phase<F, Fut>(
        &self,
        ctx: &JobContext,
        work: F,
    ) -> Result<ElectionOutcome, PhaseError>
    where
        F: FnOnce(WorkContext) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        let started = Instant::now();
        let mut state = PhaseState::Idle;

        self.advance(&mut state, PhaseState::Electing, ctx);
        let outcome = self.decide(ctx).await?;

        match outcome {
            ElectionOutcome::Worker { .. } => self.advance(&mut state, PhaseState::Working, ctx),
            ElectionOutcome::Waiter => self.advance(&mut state, PhaseState::Waiting, ctx),
        }

        self.enter_barrier(BarrierPoint::Entry).await?;

        if let ElectionOutcome::Worker { resource } = outcome {
            tracing::info!("Rank {} working on {}", ctx.rank, resource);
            work(WorkContext::new(ctx, resource)).await.map_err(|source| {
                tracing::warn!("Rank {} work function failed: {:#}", ctx.rank, source);
                PhaseError::Work(source)
            })?;
        }

        self.enter_barrier(BarrierPoint::Exit).await?;
        self.advance(&mut state, PhaseState::Synced, ctx);

        tracing::info!(
            "Rank {} {} phase closed in {:?}",
            ctx.rank,
            if outcome.is_worker() {
                "worker"
            } else {
                "waiter"
            },
            started.elapsed()
        );

        self.advance(&mut state, PhaseState::Idle, ctx);
        Ok(outcome)
    }

    async fn decide(&self, ctx: &JobContext) -> Result<ElectionOutcome, PhaseError> {
        let key = OutcomeKey {
            generation: self.topology.generation(),
            kind: self.policy.kind,
            quota: self.policy.workers_per_resource,
            rank: ctx.node_rank,
        };

        if let Some(cache) = &self.cache
            && let Some(outcome) = cache.lookup(&key)
        {
            tracing::debug!(
                "Rank {} reusing cached outcome (generation {})",
                ctx.rank,
                key.generation
            );
            return Ok(outcome);
        }

        let membership = self
            .resolver
            .resolve(self.policy.kind, self.resource_count)
            .await?;

        tracing::debug!(
            "Rank {} resolved mapping {:016x} (generation {})",
            ctx.rank,
            membership.fingerprint(),
            membership.generation()
        );

        let outcome = self.elector.elect(&membership, ctx.node_rank)?;

        if let Some(cache) = &self.cache {
            cache.store(
                OutcomeKey {
                    generation: membership.generation(),
                    ..key
                },
                outcome,
            );
        }

        Ok(outcome)
    }

    async fn enter_barrier(&self, point: BarrierPoint) -> Result<(), PhaseError> {
        self.group.barrier().await.map_err(|source| {
            tracing::error!("Group {} barrier failed: {}", point, source);
            PhaseError::Barrier { point, source }
        })
    }

    fn advance(&self, state: &mut PhaseState, next: PhaseState, ctx: &JobContext) {
        debug_assert!(
            state.can_transition_to(next),
            "illegal phase transition {:?} -> {:?}",
            state,
            next
        );

        tracing::trace!("Rank {} phase state {:?} -> {:?}", ctx.rank, *state, next);
        *state = next;
    }
}
