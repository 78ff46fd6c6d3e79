//! Engine Status
//!
//! Read-only progress view for display layers. Collected from the shared
//! state set; safe to call while a run is in flight.

use serde::Serialize;

use crate::logic::checks::types::{CheckState, CheckStatus};
use crate::logic::risk::{aggregate_risk, AggregateRisk};

/// Point-in-time progress of the verification pipeline
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStatus {
    pub active: bool,
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
    /// Id of the check currently in flight, if any
    pub running_check: Option<String>,
    pub aggregate: AggregateRisk,
}

impl PipelineStatus {
    pub fn collect(active: bool, states: &[CheckState]) -> Self {
        let mut status = Self {
            active,
            total: states.len(),
            pending: 0,
            completed: 0,
            failed: 0,
            running_check: None,
            aggregate: aggregate_risk(states),
        };

        for state in states {
            match state.status {
                CheckStatus::Pending => status.pending += 1,
                CheckStatus::Running => {
                    status.running_check = Some(state.id.clone());
                }
                CheckStatus::Completed => status.completed += 1,
                CheckStatus::Failed => status.failed += 1,
            }
        }

        status
    }
}
