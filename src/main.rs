//! Diligence Core - Demo Entry Point
//!
//! Runs the default due-diligence catalog against the mock verification
//! backend and prints the final report.

use std::time::Duration;

use diligence_core::{
    constants, default_registry, MockOutcomeProvider, PipelineConfig, RunReport,
    VerificationSession,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::ENGINE_NAME,
        constants::ENGINE_VERSION
    );

    let registry = default_registry();
    let provider = MockOutcomeProvider::with_default_table(Duration::from_millis(
        constants::get_mock_latency_ms(),
    ));
    let session = VerificationSession::new(
        registry,
        provider,
        PipelineConfig::from_env(),
        Some("Thanh Binh Trading Co.".to_string()),
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    let result = rt.block_on(async {
        session
            .run(Some(Box::new(|report: &RunReport| {
                log::info!("Verification complete: aggregate risk {}", report.aggregate);
            })))
            .await
    });

    match result {
        Ok(report) => match report.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to render report: {}", e),
        },
        Err(e) => log::error!("Verification run failed: {}", e),
    }
}
