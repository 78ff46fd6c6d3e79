//! Diligence Core - Partner Verification Engine
//!
//! Sequential due-diligence pipeline: an ordered catalog of checks, one
//! asynchronous execution at a time, explicit per-check status transitions,
//! and a deterministic roll-up of completed outcomes into one aggregate risk
//! classification.

pub mod api;
pub mod constants;
pub mod logic;

// Re-export the embedding surface at the crate root
pub use api::{PipelineStatus, VerificationSession};
pub use logic::checks::{
    default_registry, CheckCategory, CheckDefinition, CheckRegistry, CheckResult, CheckState,
    CheckStatus, Outcome, RegistryError, RiskLevel,
};
pub use logic::config::PipelineConfig;
pub use logic::pipeline::{
    fallback_outcome, CancelHandle, CheckExecutor, CompletionCallback, ExecutorError,
    MockOutcomeProvider, OutcomeProvider, PipelineError, PipelineRunner, ProviderError,
    ProviderFuture, RunReport, SharedCheckStates,
};
pub use logic::risk::{
    aggregate_risk, aggregate_with_rules, summarize, AggregateRisk, AggregationRules, RiskSummary,
};
