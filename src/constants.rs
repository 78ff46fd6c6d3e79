//! Central Configuration Constants
//!
//! Single source of truth for engine defaults.
//! To change a default timeout or latency, only edit this file.

/// Detail text attached to the fallback outcome when no verification
/// backend recognizes a check id.
pub const FALLBACK_DETAILS: &str = "Unable to complete automated verification";

/// Default per-check timeout (milliseconds)
pub const DEFAULT_CHECK_TIMEOUT_MS: u64 = 30_000;

/// Default simulated latency of the mock verification backend (milliseconds)
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 400;

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const ENGINE_NAME: &str = "Diligence Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get per-check timeout from environment or use default
pub fn get_check_timeout_ms() -> u64 {
    std::env::var("DILIGENCE_CHECK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CHECK_TIMEOUT_MS)
}

/// Get mock backend latency from environment or use default
pub fn get_mock_latency_ms() -> u64 {
    std::env::var("DILIGENCE_MOCK_LATENCY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MOCK_LATENCY_MS)
}

/// Check if a faulting check should abort the whole run
pub fn is_abort_on_fault() -> bool {
    std::env::var("DILIGENCE_ABORT_ON_FAULT")
        .map(|s| s.to_lowercase() == "true" || s == "1")
        .unwrap_or(false)
}
