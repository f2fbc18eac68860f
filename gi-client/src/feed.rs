//! Activity feed page shapes and token extraction
//!
//! The v4 private feed wraps its interesting content twice: each page
//! entry carries a `payload` field that is itself a JSON-encoded array of
//! sub-events, and each sub-event's inner `payload` names a game mode and
//! token. Only singleplayer "Standard" games contribute tokens; duels and
//! party modes are filtered out here.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// One page of `/api/v4/feed/private`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedPage {
    pub entries: Vec<FeedEntry>,
    /// Opaque cursor for the next page; null or empty on the last page
    #[serde(default)]
    pub pagination_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedEntry {
    /// JSON-encoded array of sub-events
    pub payload: String,
}

/// Extract Standard-mode game tokens from one entry's encoded payload
///
/// A payload that decodes to something other than an array represents no
/// sub-events and yields nothing. Sub-events of the wrong shape or with
/// missing fields are skipped without aborting the page; a payload that
/// is not valid JSON at all fails the listing.
pub(crate) fn extract_tokens(payload: &str) -> Result<Vec<String>> {
    let decoded: Value =
        serde_json::from_str(payload).context("decoding feed entry payload")?;
    let Some(events) = decoded.as_array() else {
        return Ok(Vec::new());
    };

    let mut tokens = Vec::new();
    for event in events {
        let inner = &event["payload"];
        if inner["gameMode"].as_str() != Some("Standard") {
            continue;
        }
        if let Some(token) = inner["gameToken"].as_str() {
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}
