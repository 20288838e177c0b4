//! Pipeline — serial application of a signal batch.
//!
//! The pipeline is the single-writer event loop the handlers rely on: it
//! applies signals one at a time, in source order, so every check-then-create
//! sequence inside a handler is race-free. Replaying the same batch twice
//! produces the same entity graph.

use anyhow::Result;
use tracing::info;

use showup_common::ChainSignal;

use crate::projector::{ApplyResult, Projector};

/// Stats from one pipeline run.
#[derive(Debug, Default)]
pub struct ProjectionStats {
    pub signals_applied: u32,
    pub signals_noop: u32,
    pub signals_error: u32,
}

/// Drives a [`Projector`] over ordered signal batches.
pub struct Pipeline {
    projector: Projector,
}

impl Pipeline {
    pub fn new(projector: Projector) -> Self {
        Self { projector }
    }

    /// Apply a batch of signals in order. Store failures abort the batch;
    /// decode failures and no-ops are tallied and skipped.
    pub async fn process(&self, signals: &[ChainSignal]) -> Result<ProjectionStats> {
        let mut stats = ProjectionStats::default();

        for signal in signals {
            match self.projector.apply(signal).await? {
                ApplyResult::Applied => stats.signals_applied += 1,
                ApplyResult::NoOp => stats.signals_noop += 1,
                ApplyResult::DecodeError(_) => stats.signals_error += 1,
            }
        }

        info!(
            applied = stats.signals_applied,
            noop = stats.signals_noop,
            errors = stats.signals_error,
            "Projection batch complete"
        );
        Ok(stats)
    }

    /// Access the underlying projector.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }
}
