//! Collaborator trait seams
//!
//! `GameSource` abstracts the upstream API (implemented over HTTP in
//! `gi-client`, and by in-memory stubs in tests). `ProgressSink` is the
//! engine's coarse progress reporting boundary; the presentation layer
//! supplies its own implementation.

use crate::model::GameRecord;
use anyhow::Result;

/// Source of game tokens and game detail records
pub trait GameSource {
    /// List the caller's singleplayer Standard game tokens,
    /// most-recent-first
    ///
    /// Total inability to list (transport failure, unexpected page shape)
    /// is an error; individual malformed feed entries are skipped silently.
    fn list_game_tokens(&self) -> Result<Vec<String>>;

    /// Fetch the full detail record for one game
    ///
    /// Any failure here (network, HTTP status, JSON shape) makes the
    /// engine skip that single game; it never aborts a batch.
    fn fetch_game(&self, token: &str) -> Result<GameRecord>;
}

/// Receiver for coarse batch progress
pub trait ProgressSink {
    /// Called synchronously after each game is processed, success or not.
    /// `percent` is `floor(index * 100 / limit)`, so it ranges over
    /// 0..100 during a batch.
    fn progress(&mut self, percent: u8, message: &str);
}

/// Progress sink that discards all reports
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn progress(&mut self, _percent: u8, _message: &str) {}
}
