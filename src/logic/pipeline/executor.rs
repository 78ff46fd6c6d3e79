//! Check Executor
//!
//! Resolves one automated check to an outcome through an injected
//! verification backend. An id the backend does not recognize resolves to a
//! deterministic inconclusive fallback, so every automated check settles and
//! the pipeline never stalls on an unknown id.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use once_cell::sync::Lazy;
use tokio::time::{sleep, timeout};

use crate::constants::FALLBACK_DETAILS;
use crate::logic::checks::types::{CheckDefinition, CheckResult, Outcome, RiskLevel};

// ============================================================================
// PROVIDER CONTRACT
// ============================================================================

/// Boxed future returned by outcome providers
pub type ProviderFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<Outcome>, ProviderError>> + Send + 'a>>;

/// Outcome source backing the executor.
///
/// Production backends resolve a check id against real verification
/// services; `Ok(None)` means the backend has no mapping for the id.
pub trait OutcomeProvider: Send + Sync {
    fn produce<'a>(&'a self, check: &'a CheckDefinition) -> ProviderFuture<'a>;
}

/// Provider-level faults
#[derive(Debug, Clone)]
pub enum ProviderError {
    Backend(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "Backend error: {}", e),
        }
    }
}

impl std::error::Error for ProviderError {}

// ============================================================================
// EXECUTOR
// ============================================================================

/// Executor faults, absorbed by the runner into failed check states
#[derive(Debug, Clone)]
pub enum ExecutorError {
    Provider(String),
    Timeout(u64),
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(e) => write!(f, "Verification backend fault: {}", e),
            Self::Timeout(ms) => write!(f, "Check timed out after {}ms", ms),
        }
    }
}

impl std::error::Error for ExecutorError {}

/// The deterministic fallback for unrecognized check ids
pub fn fallback_outcome() -> Outcome {
    Outcome::new(CheckResult::Inconclusive, RiskLevel::Medium, FALLBACK_DETAILS)
}

/// Runs one check against the injected provider, bounding its latency.
///
/// Never invoked for manual checks - the runner skips those entirely.
pub struct CheckExecutor<P: OutcomeProvider> {
    provider: P,
    check_timeout: Duration,
}

impl<P: OutcomeProvider> CheckExecutor<P> {
    pub fn new(provider: P, check_timeout: Duration) -> Self {
        Self {
            provider,
            check_timeout,
        }
    }

    /// Execute one automated check.
    pub async fn execute(&self, check: &CheckDefinition) -> Result<Outcome, ExecutorError> {
        match timeout(self.check_timeout, self.provider.produce(check)).await {
            Ok(Ok(Some(outcome))) => Ok(outcome),
            Ok(Ok(None)) => {
                log::debug!("No outcome mapping for '{}', using fallback", check.id);
                Ok(fallback_outcome())
            }
            Ok(Err(e)) => Err(ExecutorError::Provider(e.to_string())),
            Err(_) => Err(ExecutorError::Timeout(self.check_timeout.as_millis() as u64)),
        }
    }
}

// ============================================================================
// MOCK PROVIDER
// ============================================================================

/// Canned outcomes for the default catalog
static MOCK_OUTCOMES: Lazy<HashMap<&'static str, Outcome>> = Lazy::new(|| {
    let mut outcomes = HashMap::new();
    outcomes.insert(
        "business-registration",
        Outcome::new(
            CheckResult::Pass,
            RiskLevel::Low,
            "Registration confirmed with the provincial business registry",
        ),
    );
    outcomes.insert(
        "tax-compliance",
        Outcome::new(
            CheckResult::Pass,
            RiskLevel::Low,
            "Tax filings current through the last fiscal year",
        ),
    );
    outcomes.insert(
        "financial-statements",
        Outcome::new(
            CheckResult::Warning,
            RiskLevel::Medium,
            "Statements are unaudited; revenue figures could not be independently confirmed",
        ),
    );
    outcomes.insert(
        "litigation-history",
        Outcome::new(
            CheckResult::Pass,
            RiskLevel::Low,
            "No active litigation found in court records",
        ),
    );
    outcomes.insert(
        "sanctions-screening",
        Outcome::new(
            CheckResult::Pass,
            RiskLevel::Low,
            "No matches against consolidated sanctions lists",
        ),
    );
    outcomes.insert(
        "adverse-media",
        Outcome::new(
            CheckResult::Warning,
            RiskLevel::Medium,
            "Two regional articles reference a 2023 supplier dispute",
        ),
    );
    outcomes
});

/// Mock verification backend with simulated network latency.
///
/// Stands in for the real verification services during development and in
/// the demo binary. The integration point for production backends is the
/// `OutcomeProvider` trait, not this table.
pub struct MockOutcomeProvider {
    outcomes: HashMap<String, Outcome>,
    latency: Duration,
}

impl MockOutcomeProvider {
    pub fn new(outcomes: HashMap<String, Outcome>, latency: Duration) -> Self {
        Self { outcomes, latency }
    }

    /// Backend pre-loaded with canned outcomes for the default catalog
    pub fn with_default_table(latency: Duration) -> Self {
        let outcomes = MOCK_OUTCOMES
            .iter()
            .map(|(id, outcome)| (id.to_string(), outcome.clone()))
            .collect();
        Self { outcomes, latency }
    }
}

impl OutcomeProvider for MockOutcomeProvider {
    fn produce<'a>(&'a self, check: &'a CheckDefinition) -> ProviderFuture<'a> {
        let outcome = self.outcomes.get(&check.id).cloned();
        let latency = self.latency;
        Box::pin(async move {
            if !latency.is_zero() {
                sleep(latency).await;
            }
            Ok(outcome)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
