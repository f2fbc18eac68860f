//! GeoInsight Core Library
//!
//! Data model and aggregation engine for GeoGuessr gameplay stats: a
//! single pass over a player's recent games, partitioned into the three
//! singleplayer modes, folded into per-mode summaries with derived
//! ranking, frequency and histogram tables for the presentation layer.

pub mod aggregate;
pub mod charts;
pub mod countries;
pub mod histogram;
pub mod model;
pub mod rank;
pub mod source;
pub mod summary;

pub use aggregate::{aggregate, GameOutcome, SkipReason};
pub use model::{GameRecord, Mode};
pub use source::{GameSource, NullProgress, ProgressSink};
pub use summary::{ModeSummaries, ModeSummary};
