//! Scripted black-box check of a running resort-service.
//!
//! Usage: `resort-api-check [BASE_URL]` (falls back to `RESORT_API_URL`).
//! Exits non-zero when any check fails.

use std::process::ExitCode;
use workflow_tests::{base_url_from_env, run_api_checks, truncate, ResortApiClient};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let base_url = std::env::args().nth(1).unwrap_or_else(base_url_from_env);
    let client = match ResortApiClient::new(base_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Resort API checks against {}", base_url);
    println!("{}", "=".repeat(50));

    let outcomes = run_api_checks(&client).await;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(body) => println!(
                "PASS  {:<24} {}",
                outcome.name,
                truncate(&body.to_string(), 100)
            ),
            Err(e) => println!("FAIL  {:<24} {}", outcome.name, e),
        }
    }

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    println!("{}", "=".repeat(50));
    println!("Results: {}/{} passed", passed, outcomes.len());

    if passed == outcomes.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
