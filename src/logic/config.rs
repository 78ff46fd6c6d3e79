//! Pipeline Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Runtime configuration for one pipeline runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Per-check timeout in milliseconds. An elapsed deadline marks the
    /// check failed instead of stalling the run.
    pub check_timeout_ms: u64,

    /// Abort the remaining checks when one faults. Off by default: a bad
    /// check is isolated and the pipeline continues.
    pub abort_on_fault: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            check_timeout_ms: constants::DEFAULT_CHECK_TIMEOUT_MS,
            abort_on_fault: false,
        }
    }
}

impl PipelineConfig {
    /// Read configuration from environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            check_timeout_ms: constants::get_check_timeout_ms(),
            abort_on_fault: constants::is_abort_on_fault(),
        }
    }

    pub fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.check_timeout_ms, constants::DEFAULT_CHECK_TIMEOUT_MS);
        assert!(!config.abort_on_fault);
        assert_eq!(config.check_timeout(), Duration::from_millis(30_000));
    }
}
