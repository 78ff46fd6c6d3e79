//! Risk Aggregator
//!
//! Pure reduction over the current check states. The classification is
//! recomputed on every call - never cached - and is independent of the
//! order checks completed in.

use crate::logic::checks::types::{CheckResult, CheckState, CheckStatus, RiskLevel};

use super::rules::AggregationRules;
use super::types::{AggregateRisk, RiskSummary};

// ============================================================================
// AGGREGATION
// ============================================================================

/// Classify the current state set with the default rules
pub fn aggregate_risk(states: &[CheckState]) -> AggregateRisk {
    aggregate_with_rules(states, &AggregationRules::default())
}

/// Classify the current state set with custom rules.
///
/// Only checks that completed with an outcome participate. First match wins:
/// any high finding, then the medium escalation count, then any medium.
pub fn aggregate_with_rules(states: &[CheckState], rules: &AggregationRules) -> AggregateRisk {
    let mut completed = 0usize;
    let mut high_count = 0usize;
    let mut medium_count = 0usize;

    for state in states {
        if !state.has_outcome() {
            continue;
        }
        completed += 1;
        match state.risk_level {
            Some(RiskLevel::High) => high_count += 1,
            Some(RiskLevel::Medium) => medium_count += 1,
            _ => {}
        }
    }

    if completed == 0 {
        return AggregateRisk::Unknown;
    }

    if high_count > 0 {
        AggregateRisk::High
    } else if medium_count > rules.medium_escalation_count {
        AggregateRisk::High
    } else if medium_count > 0 {
        AggregateRisk::Medium
    } else {
        AggregateRisk::Low
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Count statuses, results, and risk levels over the state set
pub fn summarize(states: &[CheckState]) -> RiskSummary {
    let mut summary = RiskSummary {
        total: states.len(),
        ..Default::default()
    };

    for state in states {
        match state.status {
            CheckStatus::Pending => summary.pending += 1,
            CheckStatus::Running => summary.running += 1,
            CheckStatus::Completed => summary.completed += 1,
            CheckStatus::Failed => summary.failed += 1,
        }

        match state.result {
            Some(CheckResult::Pass) => summary.passed += 1,
            Some(CheckResult::Warning) => summary.warnings += 1,
            Some(CheckResult::Fail) => summary.adverse += 1,
            Some(CheckResult::Inconclusive) => summary.inconclusive += 1,
            None => {}
        }

        match state.risk_level {
            Some(RiskLevel::High) => summary.high_risk += 1,
            Some(RiskLevel::Medium) => summary.medium_risk += 1,
            Some(RiskLevel::Low) => summary.low_risk += 1,
            None => {}
        }
    }

    summary
}

// ============================================================================
// TESTS
// ============================================================================
