//! Pipeline Module
//!
//! Sequential execution of the check catalog.
//!
//! ## Structure
//! - `executor`: Resolves one check through an injected verification backend
//! - `runner`: Drives the catalog in order, owns all state writes during a run

pub mod executor;
pub mod runner;

// Re-export main types for convenience
pub use executor::{
    fallback_outcome, CheckExecutor, ExecutorError, MockOutcomeProvider, OutcomeProvider,
    ProviderError, ProviderFuture,
};
pub use runner::{
    CancelHandle, CompletionCallback, PipelineError, PipelineRunner, RunReport, SharedCheckStates,
};
