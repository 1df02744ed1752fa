//! Common test utilities for black-box tests.

use std::time::Duration;
use workflow_tests::{init_tracing, wait_for_service, ResortApiClient};

/// Default timeout for waiting on the service.
pub const SERVICE_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the service under test, once it reports healthy.
pub async fn setup() -> ResortApiClient {
    init_tracing();

    let client = ResortApiClient::from_env().expect("Failed to build API client");
    wait_for_service(&client, SERVICE_TIMEOUT)
        .await
        .expect("resort-service not healthy - start it and set RESORT_API_URL");
    client
}
