//! Pipeline Runner
//!
//! Drives the catalog in order through the executor, one check at a time.
//! The runner is the sole writer of the shared check states while a run is
//! active; display layers read the same states concurrently.
//!
//! Run state machine: idle -> running -> idle. A second run attempt while
//! running is rejected, never interleaved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use crate::logic::checks::registry::CheckRegistry;
use crate::logic::checks::types::CheckState;
use crate::logic::config::PipelineConfig;
use crate::logic::risk::{aggregate_risk, summarize, AggregateRisk, RiskSummary};

use super::executor::{CheckExecutor, OutcomeProvider};

// ============================================================================
// SHARED STATE & CALLBACK TYPES
// ============================================================================

/// Shared, externally readable check states. Allocated by the caller,
/// written only by the runner while a run is active.
pub type SharedCheckStates = Arc<RwLock<Vec<CheckState>>>;

/// One-shot completion callback, invoked after the final catalog entry is
/// processed. Per-check progress is read from the shared states instead.
pub type CompletionCallback = Box<dyn FnOnce(&RunReport) + Send>;

/// Cooperative cancellation signal, checked between checks
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ============================================================================
// RUN REPORT
// ============================================================================

/// Final snapshot delivered to the completion callback and returned by `run`
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    /// Display label for the subject under verification - opaque to the engine
    pub subject: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub cancelled: bool,
    pub aggregate: AggregateRisk,
    pub summary: RiskSummary,
    /// Full ordered state set, untouched manual checks included
    pub states: Vec<CheckState>,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Runner errors
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// A run is already in flight on this runner
    AlreadyRunning,
    /// The shared state set does not line up with the catalog
    StateMismatch { expected: usize, actual: usize },
    /// A state entry's id differs from the catalog entry at its position
    StateIdMismatch(String),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "A verification run is already in progress"),
            Self::StateMismatch { expected, actual } => write!(
                f,
                "State set does not match catalog: expected {} entries, got {}",
                expected, actual
            ),
            Self::StateIdMismatch(id) => {
                write!(f, "State entry '{}' is out of line with the catalog", id)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

// ============================================================================
// RUNNER
// ============================================================================

/// Sequential pipeline runner
pub struct PipelineRunner<P: OutcomeProvider> {
    registry: Arc<CheckRegistry>,
    executor: CheckExecutor<P>,
    config: PipelineConfig,
    subject: Option<String>,
    active: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
}

impl<P: OutcomeProvider> PipelineRunner<P> {
    pub fn new(registry: Arc<CheckRegistry>, provider: P, config: PipelineConfig) -> Self {
        let executor = CheckExecutor::new(provider, config.check_timeout());
        Self {
            registry,
            executor,
            config,
            subject: None,
            active: Arc::new(AtomicBool::new(false)),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Attach a display label for the subject under verification
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Handle for cancelling the current (or next) run between checks
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancel.clone())
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Allocate a fresh state set for this runner's catalog
    pub fn initial_states(&self) -> SharedCheckStates {
        Arc::new(RwLock::new(self.registry.initial_states()))
    }

    fn validate_states(&self, states: &[CheckState]) -> Result<(), PipelineError> {
        if states.len() != self.registry.len() {
            return Err(PipelineError::StateMismatch {
                expected: self.registry.len(),
                actual: states.len(),
            });
        }
        for (state, def) in states.iter().zip(self.registry.checks()) {
            if state.id != def.id {
                return Err(PipelineError::StateIdMismatch(state.id.clone()));
            }
        }
        Ok(())
    }

    /// Run the pipeline once over `states`.
    ///
    /// Automated checks execute strictly in catalog order, one at a time;
    /// the next check does not begin until the previous one has settled.
    /// Manual checks are left untouched. A faulting check is marked failed
    /// and the run continues unless `abort_on_fault` is set.
    pub async fn run(
        &self,
        states: &SharedCheckStates,
        on_complete: Option<CompletionCallback>,
    ) -> Result<RunReport, PipelineError> {
        self.validate_states(&states.read())?;

        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PipelineError::AlreadyRunning);
        }
        self.cancel.store(false, Ordering::SeqCst);

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        log::info!(
            "Verification run {} started ({} checks, {} automated)",
            run_id,
            self.registry.len(),
            self.registry.automated_count()
        );

        let mut cancelled = false;

        for (index, check) in self.registry.checks().iter().enumerate() {
            if self.cancel.load(Ordering::SeqCst) {
                log::warn!("Run {} cancelled before '{}'", run_id, check.id);
                cancelled = true;
                break;
            }

            if !check.automated {
                log::debug!("Skipping manual check '{}'", check.id);
                continue;
            }

            states.write()[index].mark_running();
            log::debug!("Running check '{}' ({})", check.id, check.category);

            // The one suspension point per check: the pipeline waits here
            // until the backend settles before touching the next entry.
            match self.executor.execute(check).await {
                Ok(outcome) => {
                    states.write()[index].complete(outcome);
                }
                Err(e) => {
                    log::error!("Check '{}' faulted: {}", check.id, e);
                    states.write()[index].fail(e.to_string());
                    if self.config.abort_on_fault {
                        log::warn!("Run {} aborted after fault in '{}'", run_id, check.id);
                        break;
                    }
                }
            }

            // Recomputed on every state change, never cached
            let aggregate = aggregate_risk(&states.read());
            log::debug!("Aggregate risk after '{}': {}", check.id, aggregate);
        }

        let finished_at = Utc::now();
        let snapshot = states.read().clone();
        let aggregate = aggregate_risk(&snapshot);
        let summary = summarize(&snapshot);

        let report = RunReport {
            run_id,
            subject: self.subject.clone(),
            started_at,
            finished_at,
            cancelled,
            aggregate,
            summary,
            states: snapshot,
        };

        self.active.store(false, Ordering::SeqCst);
        log::info!(
            "Verification run {} finished: aggregate {} ({} completed, {} failed, {} pending)",
            run_id,
            report.aggregate,
            report.summary.completed,
            report.summary.failed,
            report.summary.pending
        );

        if let Some(callback) = on_complete {
            callback(&report);
        }

        Ok(report)
    }
}

// ============================================================================
// TESTS
// ============================================================================
