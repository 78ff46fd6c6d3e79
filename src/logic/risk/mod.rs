//! Risk Module
//!
//! Rolls completed check outcomes up into one overall classification.
//! This is the decision step the due-diligence display renders.
//!
//! ## Structure
//! - `types`: Core types (AggregateRisk, RiskSummary)
//! - `rules`: Escalation thresholds and configurable rules
//! - `aggregator`: Aggregation logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::risk::{aggregate_risk, AggregateRisk};
//!
//! match aggregate_risk(&states) {
//!     AggregateRisk::Unknown => println!("No results yet"),
//!     AggregateRisk::Low => println!("Proceed"),
//!     AggregateRisk::Medium => println!("Review findings"),
//!     AggregateRisk::High => println!("Escalate"),
//! }
//! ```

pub mod aggregator;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use aggregator::{aggregate_risk, aggregate_with_rules, summarize};
pub use rules::{AggregationRules, MEDIUM_ESCALATION_COUNT};
pub use types::{AggregateRisk, RiskSummary};
