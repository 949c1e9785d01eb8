use std::fs;
use std::path::Path;

use crate::error::PollError;
use crate::models::Poll;

/// Read polls from a JSON file holding either one poll or an array of them.
pub fn load_polls(path: impl AsRef<Path>) -> Result<Vec<Poll>, PollError> {
    let text = fs::read_to_string(path)?;
    parse_polls(&text)
}

/// Same as [`load_polls`] without blocking the runtime thread.
pub async fn load_polls_async(path: impl AsRef<Path>) -> Result<Vec<Poll>, PollError> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_polls(&text)
}

pub fn parse_polls(text: &str) -> Result<Vec<Poll>, PollError> {
    // Pick the shape up front so serde reports the real error position
    match text.trim_start().as_bytes().first() {
        Some(b'[') => Ok(serde_json::from_str(text)?),
        _ => Ok(vec![serde_json::from_str(text)?]),
    }
}
