//! The stats aggregation engine
//!
//! A single synchronous pass over a bounded list of game tokens: fetch
//! each detail record, classify it by its restriction flags, and fold its
//! rounds into the matching mode's accumulator. One bad record never
//! aborts the batch; each token produces an explicit `GameOutcome` and
//! skips are folded away by the driver rather than hidden in exception
//! control flow.

use crate::model::Mode;
use crate::source::{GameSource, ProgressSink};
use crate::summary::{ModeAccumulators, ModeSummaries};
use thiserror::Error;
use tracing::debug;

/// Why a single game contributed nothing to the aggregates
#[derive(Debug, Error)]
pub enum SkipReason {
    /// Network failure, HTTP error status, or JSON shape mismatch.
    /// Recovered locally; an expired session cookie manifests as every
    /// game skipping this way, yielding three empty summaries.
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),

    /// The restriction-flag triple matches none of the three
    /// singleplayer modes (e.g. zooming forbidden on its own). Dropped
    /// without counting anywhere.
    #[error("restriction flags match no singleplayer mode")]
    UnclassifiedMode,
}

/// Per-record result of processing one game token
#[derive(Debug)]
pub enum GameOutcome {
    /// The game was folded into the given mode's accumulator
    Folded(Mode),
    /// The game was skipped; the batch continues
    Skipped(SkipReason),
}

/// Aggregate the caller's most recent `limit` games into per-mode summaries
///
/// Tokens are processed strictly in order (front = most recent), one
/// blocking fetch at a time. Progress is reported after every game,
/// success or failure, as `floor(index * 100 / limit)` percent. A limit
/// of zero performs no fetches and returns three empty summaries.
pub fn aggregate(
    source: &dyn GameSource,
    tokens: &[String],
    limit: usize,
    progress: &mut dyn ProgressSink,
) -> ModeSummaries {
    let mut accumulators = ModeAccumulators::default();
    if limit == 0 {
        return accumulators.finalize();
    }

    for (index, token) in tokens.iter().take(limit).enumerate() {
        let outcome = process_game(source, token, &mut accumulators);
        if let GameOutcome::Skipped(reason) = &outcome {
            debug!(token = %token, reason = %reason, "skipping game");
        }

        let percent = (index * 100 / limit) as u8;
        progress.progress(percent, &format!("Analyzing... ({percent}%)"));
    }

    accumulators.finalize()
}

/// Fetch, classify and fold a single game
///
/// Either the whole game folds into exactly one mode or nothing is
/// mutated at all; there is no partial credit for a record that fails
/// mid-parse (deserialization happens before any accumulation).
pub fn process_game(
    source: &dyn GameSource,
    token: &str,
    accumulators: &mut ModeAccumulators,
) -> GameOutcome {
    let game = match source.fetch_game(token) {
        Ok(game) => game,
        Err(e) => return GameOutcome::Skipped(SkipReason::Fetch(e)),
    };

    match Mode::classify(&game) {
        Some(mode) => {
            accumulators.entry(mode).fold_game(&game);
            GameOutcome::Folded(mode)
        }
        None => GameOutcome::Skipped(SkipReason::UnclassifiedMode),
    }
}
