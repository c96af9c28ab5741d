//! Rendering of status entries into the Discord message body.

use crate::status::UserStatus;

/// Render the full status message: a header line, a blank line, then one
/// line per entry in input order.
///
/// The exact line format is relied on by existing channel consumers; change
/// with care.
pub fn format_message(statuses: &[UserStatus], now: i64) -> String {
    let mut lines = vec!["**Codeforces Status Update**".to_string(), String::new()];
    for status in statuses {
        let status_label = if status.online {
            "🟢 Online"
        } else {
            "⚪ Offline"
        };
        let rating_label = match status.rating {
            Some(rating) => format!(" (rating {})", rating),
            None => String::new(),
        };
        let minutes_ago = (now - status.last_online_seconds).max(0) / 60;
        lines.push(format!(
            "- `{}`{}: {} · last online {} min ago",
            status.handle, rating_label, status_label, minutes_ago
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::build_statuses;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn entry(handle: &str, rating: Option<i64>, last_online: i64, online: bool) -> UserStatus {
        UserStatus {
            handle: handle.to_string(),
            rating,
            last_online_seconds: last_online,
            online,
        }
    }

    #[test]
    fn test_header_and_blank_line() {
        let message = format_message(&[], NOW);
        assert_eq!(message, "**Codeforces Status Update**\n");
    }

    #[test]
    fn test_online_line_with_rating() {
        let statuses = vec![entry("tourist", Some(3500), NOW - 60, true)];
        let message = format_message(&statuses, NOW);
        assert!(message.contains("- `tourist` (rating 3500): 🟢 Online · last online 1 min ago"));
    }

    #[test]
    fn test_offline_line_without_rating() {
        let statuses = vec![entry("newbie", None, NOW - 3600, false)];
        let message = format_message(&statuses, NOW);
        assert!(message.contains("- `newbie`: ⚪ Offline · last online 60 min ago"));
    }

    #[test]
    fn test_minutes_clamped_at_zero() {
        // A last-online timestamp in the future must not render negative.
        let statuses = vec![entry("clocked", None, NOW + 120, true)];
        let message = format_message(&statuses, NOW);
        assert!(message.contains("last online 0 min ago"));
    }

    #[test]
    fn test_raw_record_to_message_line() {
        let users = vec![json!({
            "handle": "tourist",
            "lastOnlineTimeSeconds": NOW - 60,
            "rating": 3500
        })];
        let statuses = build_statuses(&users, NOW, 300);
        assert!(statuses[0].online);

        let message = format_message(&statuses, NOW);
        assert!(message.starts_with("**Codeforces Status Update**\n\n"));
        assert!(message.contains("- `tourist` (rating 3500): 🟢 Online · last online 1 min ago"));
    }

    #[test]
    fn test_line_order_matches_input() {
        let statuses = vec![
            entry("b", None, NOW, true),
            entry("a", None, NOW, true),
        ];
        let message = format_message(&statuses, NOW);
        let b_pos = message.find("`b`").unwrap();
        let a_pos = message.find("`a`").unwrap();
        assert!(b_pos < a_pos);
    }
}
