//! Risk Types
//!
//! Core types for risk aggregation. No logic - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// AGGREGATE RISK
// ============================================================================

/// Overall risk classification derived from completed checks.
///
/// Derived, never stored: recomputed from the current state set on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateRisk {
    /// No check has resolved to an outcome yet
    Unknown,
    Low,
    Medium,
    High,
}

impl AggregateRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateRisk::Unknown => "unknown",
            AggregateRisk::Low => "low",
            AggregateRisk::Medium => "medium",
            AggregateRisk::High => "high",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            AggregateRisk::Unknown => 0,
            AggregateRisk::Low => 1,
            AggregateRisk::Medium => 2,
            AggregateRisk::High => 3,
        }
    }
}

impl std::fmt::Display for AggregateRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK SUMMARY
// ============================================================================

/// Counts over the current state set, for display and reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total: usize,
    pub pending: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,

    // Result counts over completed checks
    pub passed: usize,
    pub warnings: usize,
    pub adverse: usize,
    pub inconclusive: usize,

    // Risk level counts over completed checks
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}
