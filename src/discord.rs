//! Delivery of the formatted status message to a Discord webhook.

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the webhook request body.
pub fn webhook_payload(message: &str) -> Value {
    json!({ "content": message })
}

/// Post the message to the webhook in a single attempt. Any response status
/// of 400 or above is an error carrying the code.
pub fn post_to_discord(webhook_url: &str, message: &str) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let resp = client
        .post(webhook_url)
        .json(&webhook_payload(message))
        .send()
        .map_err(|e| anyhow!("Failed to send Discord webhook: {}", e))?;

    let code = resp.status().as_u16();
    if code >= 400 {
        return Err(anyhow!("Discord webhook error: HTTP {}", code));
    }
    Ok(())
}
