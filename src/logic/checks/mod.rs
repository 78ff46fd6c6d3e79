//! Checks Module
//!
//! The catalog side of the verification pipeline.
//!
//! ## Structure
//! - `types`: Core types (CheckDefinition, CheckState, status/result enums)
//! - `registry`: Ordered catalog with identity guarantees

pub mod registry;
pub mod types;

// Re-export main types for convenience
pub use registry::{default_registry, CheckRegistry, RegistryError};
pub use types::{
    CheckCategory, CheckDefinition, CheckResult, CheckState, CheckStatus, Outcome, RiskLevel,
};
