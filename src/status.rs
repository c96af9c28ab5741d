//! Online/offline classification of raw Codeforces user records.

use serde_json::Value;

/// Snapshot of a single user's presence at the time of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatus {
    pub handle: String,
    /// Absent when the account is unrated.
    pub rating: Option<i64>,
    /// Unix timestamp of the user's last observed activity.
    pub last_online_seconds: i64,
    pub online: bool,
}

/// Build status entries from raw `user.info` records, preserving input order.
///
/// Malformed fields degrade to defaults rather than failing: a missing
/// handle becomes `"unknown"`, a missing last-online timestamp becomes 0,
/// and a rating that is not an integer counts as absent.
pub fn build_statuses(users: &[Value], now: i64, threshold: i64) -> Vec<UserStatus> {
    users
        .iter()
        .map(|user| {
            let handle = user
                .get("handle")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            let last_online = user
                .get("lastOnlineTimeSeconds")
                .and_then(Value::as_i64)
                .unwrap_or(0);
            let rating = user.get("rating").and_then(Value::as_i64);
            UserStatus {
                handle,
                rating,
                last_online_seconds: last_online,
                online: (now - last_online) <= threshold,
            }
        })
        .collect()
}
