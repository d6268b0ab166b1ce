use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a loan document piped on stdin.
///
/// Returns `None` when stdin is a terminal or the pipe is empty.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

/// JSON objects start with `{`; any other document is read as YAML.
fn parse_piped<T: DeserializeOwned>(text: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin as JSON: {e}"))?
    } else {
        serde_yaml::from_str(trimmed).map_err(|e| format!("Failed to parse stdin as YAML: {e}"))?
    };
    tracing::debug!(target: "tms.input", bytes = trimmed.len(), "Read loan input from stdin");
    Ok(Some(value))
}
