//! Risk Aggregation Rules & Thresholds
//!
//! Constants and configurable rules for rolling completed outcomes into one
//! classification. No aggregation logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// More than this many medium-risk findings escalate the aggregate to high
pub const MEDIUM_ESCALATION_COUNT: usize = 2;

// ============================================================================
// CONFIGURABLE RULES
// ============================================================================

/// Aggregation rules (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationRules {
    /// Medium-risk findings beyond this count classify as high
    pub medium_escalation_count: usize,
}

impl Default for AggregationRules {
    fn default() -> Self {
        Self {
            medium_escalation_count: MEDIUM_ESCALATION_COUNT,
        }
    }
}

impl AggregationRules {
    /// Strict posture - a single medium finding already escalates
    pub fn strict() -> Self {
        Self {
            medium_escalation_count: 0,
        }
    }

    /// Lenient posture - tolerate more medium findings before escalating
    pub fn lenient() -> Self {
        Self {
            medium_escalation_count: 4,
        }
    }
}
