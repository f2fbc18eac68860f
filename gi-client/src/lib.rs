//! GeoInsight API Client
//!
//! Blocking, cookie-authenticated access to the GeoGuessr private API:
//! feed pagination for game-token listing and per-game detail fetching.
//! Implements `gi_core::GameSource` so the aggregation engine never sees
//! HTTP.

mod feed;
mod session;

pub use session::GeoSession;
