// src/api/mod.rs
//
// The stats service seen from the search core: a trait with one call per
// facet, and the error taxonomy the coordinator interprets.

pub mod balldontlie;
pub mod types;

pub use balldontlie::BallDontLie;
pub use types::{Conference, Page, PageMeta, Player, Team};

use thiserror::Error;

use crate::search::cancel::CancelSignal;
use crate::search::mode::{NameFilter, TeamFilter};

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request was superseded; not a failure.
    #[error("request cancelled")]
    Cancelled,

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Remote lookups. Calls block; the coordinator runs each on its own
/// worker thread and hands it the request's cancel signal. Honoring the
/// signal is optional.
pub trait StatsClient: Send + Sync + 'static {
    fn search_players(
        &self,
        filter: &NameFilter,
        cancel: &CancelSignal,
    ) -> Result<Page<Player>, FetchError>;

    fn search_teams(
        &self,
        filter: &TeamFilter,
        cancel: &CancelSignal,
    ) -> Result<Page<Team>, FetchError>;
}
