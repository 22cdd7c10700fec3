//! Phase-ordered batch execution.
//!
//! Mutations run sequentially in three phases: entry nodes, then typed
//! nodes, then relationships. Entry nodes are fully attempted before any
//! typed node, so every `entry {name}` link a typed node sends has
//! already had its creation attempted (success is not required: the
//! loader never blocks a typed node on its entry node's outcome).

use annograph_mutate::{GeneratedMutation, MutationBatch};

use crate::client::GraphClient;

/// Success/failure tally for one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Aggregate outcome of one load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub entry: PhaseReport,
    pub typed: PhaseReport,
    pub relationship: PhaseReport,
}

impl LoadReport {
    /// True if any entry-node or typed-node mutation failed.
    /// Relationship failures are vacuous today (no mutations are produced)
    /// and do not affect the exit status.
    pub fn has_failures(&self) -> bool {
        self.entry.failed > 0 || self.typed.failed > 0
    }

    pub fn total_failed(&self) -> usize {
        self.entry.failed + self.typed.failed + self.relationship.failed
    }

    pub fn total_succeeded(&self) -> usize {
        self.entry.succeeded + self.typed.succeeded + self.relationship.succeeded
    }
}

/// Execute a batch phase by phase.
///
/// A failed mutation is logged and counted; its siblings still run.
/// There is no retry and no rollback on partial failure.
pub async fn run_batch(client: &GraphClient, batch: &MutationBatch) -> LoadReport {
    LoadReport {
        entry: run_phase(client, "entry", &batch.entry_mutations).await,
        typed: run_phase(client, "typed", &batch.typed_mutations).await,
        relationship: run_phase(client, "relationship", &batch.relationship_mutations).await,
    }
}

async fn run_phase(
    client: &GraphClient,
    phase: &'static str,
    mutations: &[GeneratedMutation],
) -> PhaseReport {
    let mut report = PhaseReport::default();

    for mutation in mutations {
        match client.execute(&mutation.mutation).await {
            Ok(()) => {
                report.succeeded += 1;
                tracing::debug!(phase, description = %mutation.description, "Mutation applied");
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!(
                    phase,
                    description = %mutation.description,
                    error = %e,
                    "Mutation failed"
                );
            }
        }
    }

    tracing::info!(
        phase,
        succeeded = report.succeeded,
        failed = report.failed,
        "Phase complete"
    );
    report
}
