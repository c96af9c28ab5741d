//! Resolution of the handle list from the environment or `users.json`.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Default path of the handles config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "users.json";

/// Shape of the handles config file. `handles` stays a raw [`Value`];
/// list/type validation happens in [`handles_from_file`].
#[derive(Debug, Deserialize)]
struct HandlesFile {
    handles: Option<Value>,
}

/// Split a comma-separated handle list, trimming whitespace and dropping
/// empty entries.
fn split_handle_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|handle| handle.trim().to_string())
        .filter(|handle| !handle.is_empty())
        .collect()
}

/// Resolve the list of handles to query.
///
/// A non-blank override list (CF_HANDLES or `--handles`) wins outright and
/// the config file is never consulted; otherwise the file at `path` must
/// supply a non-empty `handles` list. Failing both, the error tells the
/// operator how to configure the tool.
pub fn resolve_handles(override_list: Option<&str>, path: &Path) -> Result<Vec<String>> {
    if let Some(raw) = override_list {
        if !raw.trim().is_empty() {
            let handles = split_handle_list(raw);
            if handles.is_empty() {
                return Err(anyhow!("CF_HANDLES contains no usable handles."));
            }
            return Ok(handles);
        }
    }

    if path.exists() {
        return handles_from_file(path);
    }

    Err(anyhow!(
        "No handles configured. Set CF_HANDLES or create {}.",
        path.display()
    ))
}

fn handles_from_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let data: HandlesFile = serde_json::from_str(&text)
        .map_err(|e| anyhow!("Invalid JSON in {}: {}", path.display(), e))?;

    if let Some(Value::Array(entries)) = data.handles {
        let cleaned: Vec<String> = entries
            .iter()
            .map(|entry| match entry {
                Value::String(handle) => handle.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|handle| !handle.is_empty())
            .collect();
        if !cleaned.is_empty() {
            return Ok(cleaned);
        }
    }

    Err(anyhow!(
        "{} must contain a non-empty 'handles' list or set CF_HANDLES.",
        path.display()
    ))
}
