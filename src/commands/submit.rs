// ABOUTME: Submit command implementation.
// ABOUTME: Smoke-tests the configured submission endpoint from the CLI.

use waypost::config::Config;
use waypost::error::{Error, Result};
use waypost::submit::SubmissionClient;

/// Send a test submission and report the normalized result.
pub async fn submit(config: Config, name: String, destinations: Vec<String>) -> Result<()> {
    let client = SubmissionClient::new(config.resolved_endpoint(), config.submission.timeout);

    let result = client.submit(&name, &destinations).await;
    if result.success {
        println!("Submission accepted for {name} ({} destinations)", destinations.len());
        return Ok(());
    }

    Err(Error::Submission(
        result.error.unwrap_or_else(|| "unknown error".to_string()),
    ))
}
