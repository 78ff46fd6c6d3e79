//! Verification Session
//!
//! Embedding surface for the verification pipeline: one session per subject,
//! wiring a catalog and a verification backend to a runner with shared,
//! display-readable state. The due-diligence widget talks to this type only.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::logic::checks::registry::CheckRegistry;
use crate::logic::checks::types::CheckState;
use crate::logic::config::PipelineConfig;
use crate::logic::pipeline::executor::OutcomeProvider;
use crate::logic::pipeline::runner::{
    CancelHandle, CompletionCallback, PipelineError, PipelineRunner, RunReport, SharedCheckStates,
};
use crate::logic::risk::{aggregate_risk, summarize, AggregateRisk, RiskSummary};

use super::status::PipelineStatus;

/// One verification session: a catalog, a backend, and the live state set
pub struct VerificationSession<P: OutcomeProvider> {
    registry: Arc<CheckRegistry>,
    runner: Arc<PipelineRunner<P>>,
    states: SharedCheckStates,
}

impl<P: OutcomeProvider> VerificationSession<P> {
    pub fn new(
        registry: CheckRegistry,
        provider: P,
        config: PipelineConfig,
        subject: Option<String>,
    ) -> Self {
        let registry = Arc::new(registry);
        let mut runner = PipelineRunner::new(registry.clone(), provider, config);
        if let Some(subject) = subject {
            runner = runner.with_subject(subject);
        }
        let states = Arc::new(RwLock::new(registry.initial_states()));
        Self {
            registry,
            runner: Arc::new(runner),
            states,
        }
    }

    /// Run the pipeline to completion on the current task
    pub async fn run(
        &self,
        on_complete: Option<CompletionCallback>,
    ) -> Result<RunReport, PipelineError> {
        self.runner.run(&self.states, on_complete).await
    }

    /// Run the pipeline on a background task; progress stays readable
    /// through this session while the run is in flight
    pub fn spawn(
        &self,
        on_complete: Option<CompletionCallback>,
    ) -> JoinHandle<Result<RunReport, PipelineError>>
    where
        P: 'static,
    {
        let runner = self.runner.clone();
        let states = self.states.clone();
        tokio::spawn(async move { runner.run(&states, on_complete).await })
    }

    /// Clone of the current ordered state set
    pub fn snapshot(&self) -> Vec<CheckState> {
        self.states.read().clone()
    }

    /// Current aggregate classification, recomputed on every call
    pub fn aggregate(&self) -> AggregateRisk {
        aggregate_risk(&self.states.read())
    }

    pub fn summary(&self) -> RiskSummary {
        summarize(&self.states.read())
    }

    pub fn status(&self) -> PipelineStatus {
        PipelineStatus::collect(self.runner.is_active(), &self.states.read())
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.runner.cancel_handle()
    }

    /// Request cancellation of the in-flight run at the next check boundary
    pub fn cancel(&self) {
        self.runner.cancel_handle().cancel();
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_active()
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Re-arm every check to pending for a fresh run. Rejected while a run
    /// is active - the runner stays the sole writer.
    pub fn reset(&self) -> Result<(), PipelineError> {
        if self.runner.is_active() {
            return Err(PipelineError::AlreadyRunning);
        }
        *self.states.write() = self.registry.initial_states();
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::constants::FALLBACK_DETAILS;
    use crate::logic::checks::types::{
        CheckCategory, CheckDefinition, CheckResult, CheckStatus, Outcome, RiskLevel,
    };
    use crate::logic::pipeline::executor::MockOutcomeProvider;

    fn automated(id: &str) -> CheckDefinition {
        CheckDefinition {
            id: id.to_string(),
            category: CheckCategory::Compliance,
            title: id.to_string(),
            description: String::new(),
            automated: true,
        }
    }

    fn six_check_registry() -> CheckRegistry {
        CheckRegistry::new((1..=6).map(|i| automated(&format!("check-{}", i))).collect()).unwrap()
    }

    fn table(entries: &[(&str, CheckResult, RiskLevel)]) -> HashMap<String, Outcome> {
        entries
            .iter()
            .map(|(id, result, risk)| {
                (id.to_string(), Outcome::new(*result, *risk, "mock"))
            })
            .collect()
    }

    fn session_with(table: HashMap<String, Outcome>) -> VerificationSession<MockOutcomeProvider> {
        VerificationSession::new(
            six_check_registry(),
            MockOutcomeProvider::new(table, Duration::ZERO),
            PipelineConfig::default(),
            None,
        )
    }

    #[tokio::test]
    async fn test_single_high_outcome_dominates() {
        let session = session_with(table(&[
            ("check-1", CheckResult::Pass, RiskLevel::Low),
            ("check-2", CheckResult::Pass, RiskLevel::Low),
            ("check-3", CheckResult::Fail, RiskLevel::High),
            ("check-4", CheckResult::Pass, RiskLevel::Low),
            ("check-5", CheckResult::Pass, RiskLevel::Low),
            ("check-6", CheckResult::Pass, RiskLevel::Low),
        ]));

        let report = session.run(None).await.unwrap();
        assert_eq!(report.aggregate, AggregateRisk::High);
        assert_eq!(session.aggregate(), AggregateRisk::High);
    }

    #[tokio::test]
    async fn test_all_low_outcomes_aggregate_low() {
        let session = session_with(table(&[
            ("check-1", CheckResult::Pass, RiskLevel::Low),
            ("check-2", CheckResult::Pass, RiskLevel::Low),
            ("check-3", CheckResult::Pass, RiskLevel::Low),
            ("check-4", CheckResult::Warning, RiskLevel::Low),
            ("check-5", CheckResult::Pass, RiskLevel::Low),
            ("check-6", CheckResult::Pass, RiskLevel::Low),
        ]));

        let report = session.run(None).await.unwrap();
        assert_eq!(report.aggregate, AggregateRisk::Low);
    }

    #[tokio::test]
    async fn test_unmapped_id_contributes_medium() {
        // check-6 has no table entry and resolves through the fallback
        let session = session_with(table(&[
            ("check-1", CheckResult::Pass, RiskLevel::Low),
            ("check-2", CheckResult::Pass, RiskLevel::Low),
            ("check-3", CheckResult::Pass, RiskLevel::Low),
            ("check-4", CheckResult::Pass, RiskLevel::Low),
            ("check-5", CheckResult::Pass, RiskLevel::Low),
        ]));

        let report = session.run(None).await.unwrap();

        let fallback = report.states.iter().find(|s| s.id == "check-6").unwrap();
        assert_eq!(fallback.status, CheckStatus::Completed);
        assert_eq!(fallback.result, Some(CheckResult::Inconclusive));
        assert_eq!(fallback.risk_level, Some(RiskLevel::Medium));
        assert_eq!(fallback.details.as_deref(), Some(FALLBACK_DETAILS));

        assert_eq!(report.aggregate, AggregateRisk::Medium);
    }

    #[tokio::test]
    async fn test_fallbacks_accumulate_toward_escalation() {
        // Three unmapped ids -> three medium findings -> high
        let session = session_with(table(&[
            ("check-1", CheckResult::Pass, RiskLevel::Low),
            ("check-2", CheckResult::Pass, RiskLevel::Low),
            ("check-3", CheckResult::Pass, RiskLevel::Low),
        ]));

        let report = session.run(None).await.unwrap();
        assert_eq!(report.summary.medium_risk, 3);
        assert_eq!(report.aggregate, AggregateRisk::High);
    }

    #[tokio::test]
    async fn test_status_and_reset() {
        let session = session_with(HashMap::new());
        assert_eq!(session.aggregate(), AggregateRisk::Unknown);

        session.run(None).await.unwrap();
        let status = session.status();
        assert!(!status.active);
        assert_eq!(status.completed, 6);
        assert_eq!(status.pending, 0);

        session.reset().unwrap();
        assert_eq!(session.aggregate(), AggregateRisk::Unknown);
        assert!(session.snapshot().iter().all(|s| s.status == CheckStatus::Pending));
    }

    #[tokio::test]
    async fn test_spawned_run_observable_through_session() {
        let session = VerificationSession::new(
            six_check_registry(),
            MockOutcomeProvider::new(HashMap::new(), Duration::from_millis(10)),
            PipelineConfig::default(),
            Some("Thanh Binh Trading Co.".to_string()),
        );

        let handle = session.spawn(None);
        let report = handle.await.unwrap().unwrap();
        assert_eq!(report.subject.as_deref(), Some("Thanh Binh Trading Co."));
        assert_eq!(report.summary.completed, 6);
        assert_eq!(session.summary().completed, 6);
        assert!(!session.is_running());
    }
}
