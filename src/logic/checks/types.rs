//! Check Types
//!
//! Core types for the verification pipeline.
//! No logic here - data structures only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// CHECK CATEGORY
// ============================================================================

/// Due-diligence category a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckCategory {
    Legal,
    Financial,
    Reputational,
    Operational,
    Compliance,
}

impl CheckCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCategory::Legal => "legal",
            CheckCategory::Financial => "financial",
            CheckCategory::Reputational => "reputational",
            CheckCategory::Operational => "operational",
            CheckCategory::Compliance => "compliance",
        }
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CHECK STATUS
// ============================================================================

/// Lifecycle status of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Not yet executed. Manual checks stay here until handled out-of-band.
    Pending,
    /// Execution in flight (automated checks only)
    Running,
    /// Resolved to an outcome
    Completed,
    /// Executor-level fault (timeout or backend error)
    Failed,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pending => "pending",
            CheckStatus::Running => "running",
            CheckStatus::Completed => "completed",
            CheckStatus::Failed => "failed",
        }
    }

    /// Completed and Failed are terminal - the runner never touches
    /// a check again once it reaches either.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckStatus::Completed | CheckStatus::Failed)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CHECK RESULT
// ============================================================================

/// Classification of a resolved check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResult {
    Pass,
    Fail,
    Warning,
    Inconclusive,
}

impl CheckResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckResult::Pass => "pass",
            CheckResult::Fail => "fail",
            CheckResult::Warning => "warning",
            CheckResult::Inconclusive => "inconclusive",
        }
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk level attached to a resolved check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Resolved outcome of one executed check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: CheckResult,
    pub risk_level: RiskLevel,
    pub details: String,
}

impl Outcome {
    pub fn new(result: CheckResult, risk_level: RiskLevel, details: impl Into<String>) -> Self {
        Self {
            result,
            risk_level,
            details: details.into(),
        }
    }
}

// ============================================================================
// CHECK DEFINITION
// ============================================================================

/// One catalog entry. Immutable after registry construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDefinition {
    /// Unique identity, stable across runs
    pub id: String,
    pub category: CheckCategory,
    /// Display text - opaque to the engine
    pub title: String,
    /// Display text - opaque to the engine
    pub description: String,
    /// Only automated checks are executed by the runner
    pub automated: bool,
}

// ============================================================================
// CHECK STATE
// ============================================================================

/// Mutable per-check state, one per catalog entry.
///
/// Owned by the runner while a run is active. The outcome fields are all
/// unset exactly while status is pending or running; a failed check carries
/// details and last_checked but never a result or risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckState {
    pub id: String,
    pub status: CheckStatus,
    pub result: Option<CheckResult>,
    pub risk_level: Option<RiskLevel>,
    pub details: Option<String>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl CheckState {
    /// Initial state for a catalog entry
    pub fn pending(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: CheckStatus::Pending,
            result: None,
            risk_level: None,
            details: None,
            last_checked: None,
        }
    }

    pub fn mark_running(&mut self) {
        self.status = CheckStatus::Running;
    }

    /// Settle the check with a resolved outcome
    pub fn complete(&mut self, outcome: Outcome) {
        self.status = CheckStatus::Completed;
        self.result = Some(outcome.result);
        self.risk_level = Some(outcome.risk_level);
        self.details = Some(outcome.details);
        self.last_checked = Some(Utc::now());
    }

    /// Settle the check as faulted. No result or risk level is recorded.
    pub fn fail(&mut self, details: String) {
        self.status = CheckStatus::Failed;
        self.result = None;
        self.risk_level = None;
        self.details = Some(details);
        self.last_checked = Some(Utc::now());
    }

    /// True when the check resolved to an outcome usable for aggregation
    pub fn has_outcome(&self) -> bool {
        self.status == CheckStatus::Completed && self.result.is_some()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(CheckCategory::Legal.to_string(), "legal");
        assert_eq!(CheckCategory::Reputational.as_str(), "reputational");
    }

    #[test]
    fn test_status_terminal() {
        assert!(!CheckStatus::Pending.is_terminal());
        assert!(!CheckStatus::Running.is_terminal());
        assert!(CheckStatus::Completed.is_terminal());
        assert!(CheckStatus::Failed.is_terminal());
    }

    #[test]
    fn test_pending_state_has_no_outcome_fields() {
        let state = CheckState::pending("business-registration");
        assert_eq!(state.status, CheckStatus::Pending);
        assert!(state.result.is_none());
        assert!(state.risk_level.is_none());
        assert!(state.details.is_none());
        assert!(state.last_checked.is_none());
        assert!(!state.has_outcome());
    }

    #[test]
    fn test_complete_sets_all_outcome_fields() {
        let mut state = CheckState::pending("tax-compliance");
        state.mark_running();
        assert_eq!(state.status, CheckStatus::Running);
        assert!(state.result.is_none());

        state.complete(Outcome::new(
            CheckResult::Pass,
            RiskLevel::Low,
            "Filings current",
        ));
        assert_eq!(state.status, CheckStatus::Completed);
        assert_eq!(state.result, Some(CheckResult::Pass));
        assert_eq!(state.risk_level, Some(RiskLevel::Low));
        assert_eq!(state.details.as_deref(), Some("Filings current"));
        assert!(state.last_checked.is_some());
        assert!(state.has_outcome());
    }

    #[test]
    fn test_fail_leaves_result_unset() {
        let mut state = CheckState::pending("adverse-media");
        state.mark_running();
        state.fail("backend unreachable".to_string());

        assert_eq!(state.status, CheckStatus::Failed);
        assert!(state.result.is_none());
        assert!(state.risk_level.is_none());
        assert_eq!(state.details.as_deref(), Some("backend unreachable"));
        assert!(state.last_checked.is_some());
        assert!(!state.has_outcome());
    }
}
