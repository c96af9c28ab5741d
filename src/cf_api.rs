//! Client for the Codeforces `user.info` API.
//!
//! Transport and envelope validation are split: [`fetch_user_info`] performs
//! the single blocking GET, [`parse_user_info`] validates the response
//! envelope and extracts the raw user records.

use anyhow::{anyhow, Result};
use serde_json::Value;
use std::time::Duration;

const API_ENDPOINT: &str = "https://codeforces.com/api/user.info";
const CLIENT_USER_AGENT: &str = "cffstatus-bot";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Join handles into the `handles` query parameter value.
pub fn handles_param(handles: &[String]) -> String {
    handles.join(";")
}

/// Fetch raw user records for the given handles in one request.
pub fn fetch_user_info(handles: &[String]) -> Result<Vec<Value>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let resp = client
        .get(API_ENDPOINT)
        .query(&[("handles", handles_param(handles))])
        .header(reqwest::header::USER_AGENT, CLIENT_USER_AGENT)
        .send()
        .map_err(|e| anyhow!("Failed to reach Codeforces API: {}", e))?;

    let payload: Value = resp
        .json()
        .map_err(|e| anyhow!("Invalid JSON from Codeforces API: {}", e))?;

    parse_user_info(payload)
}

/// Validate the API envelope and extract the raw user records.
///
/// A missing `result` on an OK response yields an empty list; a `result`
/// that is present but not a list is a format error.
pub fn parse_user_info(payload: Value) -> Result<Vec<Value>> {
    if payload.get("status").and_then(Value::as_str) != Some("OK") {
        return Err(anyhow!("Codeforces API error: {}", payload));
    }
    match payload.get("result") {
        None => Ok(Vec::new()),
        Some(Value::Array(records)) => Ok(records.clone()),
        Some(_) => Err(anyhow!("Unexpected API response format.")),
    }
}
