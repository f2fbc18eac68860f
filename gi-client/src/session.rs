//! Authenticated GeoGuessr session
//!
//! Wraps a blocking HTTP client carrying the caller's `_ncfa` session
//! cookie. There is no token refresh and no re-authentication: an expired
//! cookie simply makes every per-game fetch fail, which the engine
//! swallows into empty summaries.

use crate::feed::{self, FeedPage};
use anyhow::{Context, Result};
use gi_core::model::GameRecord;
use gi_core::source::GameSource;
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

const BASE_URL_V3: &str = "https://www.geoguessr.com/api/v3";
const BASE_URL_V4: &str = "https://www.geoguessr.com/api/v4";
const COOKIE_DOMAIN: &str = "https://www.geoguessr.com";

/// Authenticated session against the GeoGuessr API
pub struct GeoSession {
    http: Client,
}

impl GeoSession {
    /// Build a session from an `_ncfa` cookie value
    pub fn new(ncfa_cookie: &str) -> Result<Self> {
        let domain: Url = COOKIE_DOMAIN.parse().context("parsing cookie domain")?;
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(
            &format!("_ncfa={ncfa_cookie}; Domain=www.geoguessr.com"),
            &domain,
        );

        let http = Client::builder()
            .cookie_provider(jar)
            .build()
            .context("building HTTP client")?;

        Ok(Self { http })
    }

    /// List the player's Standard singleplayer game tokens,
    /// most-recent-first
    ///
    /// Walks the private activity feed page by page until the server
    /// stops returning a pagination cursor. Order is the server's; no
    /// de-duplication is performed.
    pub fn list_game_tokens(&self) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self.http.get(format!("{BASE_URL_V4}/feed/private"));
            if let Some(cursor) = &cursor {
                request = request.query(&[("paginationToken", cursor)]);
            }

            let page: FeedPage = request
                .send()
                .context("requesting activity feed")?
                .error_for_status()
                .context("activity feed request rejected")?
                .json()
                .context("decoding activity feed page")?;

            for entry in &page.entries {
                tokens.extend(feed::extract_tokens(&entry.payload)?);
            }
            debug!(collected = tokens.len(), "fetched feed page");

            match page.pagination_token {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        info!(games = tokens.len(), "listed game tokens");
        Ok(tokens)
    }

    /// Fetch one game's full detail record
    pub fn fetch_game(&self, token: &str) -> Result<GameRecord> {
        let game = self
            .http
            .get(format!("{BASE_URL_V3}/games/{token}"))
            .send()
            .with_context(|| format!("requesting game {token}"))?
            .error_for_status()
            .with_context(|| format!("game {token} request rejected"))?
            .json()
            .with_context(|| format!("decoding game {token}"))?;
        Ok(game)
    }
}

impl GameSource for GeoSession {
    fn list_game_tokens(&self) -> Result<Vec<String>> {
        GeoSession::list_game_tokens(self)
    }

    fn fetch_game(&self, token: &str) -> Result<GameRecord> {
        GeoSession::fetch_game(self, token)
    }
}
