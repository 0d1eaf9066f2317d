// src/search/results.rs
//
// The two result collections and the single status they share.
// A failure latches: once Failed, nothing here leaves Failed again.

use crate::api::{Player, Team};
use crate::config::consts::{FATAL_TEXT, LOADING_TEXT, NO_RESULTS_TEXT};

use super::mode::SearchMode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Succeeded(usize),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Players,
    Teams,
}

/// A full replacement for one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultSet {
    Players(Vec<Player>),
    Teams(Vec<Team>),
}

impl ResultSet {
    pub fn kind(&self) -> ResultKind {
        match self {
            ResultSet::Players(_) => ResultKind::Players,
            ResultSet::Teams(_) => ResultKind::Teams,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResultSet::Players(v) => v.len(),
            ResultSet::Teams(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the presentation layer should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayStatus<'a> {
    /// Nothing searched yet in this mode.
    Idle,
    Loading,
    NoResults,
    Players(&'a [Player]),
    Teams(&'a [Team]),
    /// Terminal. Carries the cause for logging; users see `FATAL_TEXT`.
    Fatal(&'a str),
}

impl DisplayStatus<'_> {
    /// The one-line status text, if this state has one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DisplayStatus::Loading => Some(LOADING_TEXT),
            DisplayStatus::NoResults => Some(NO_RESULTS_TEXT),
            DisplayStatus::Fatal(_) => Some(FATAL_TEXT),
            _ => None,
        }
    }

    /// Rendered result rows, empty for non-populated states.
    pub fn lines(&self) -> Vec<String> {
        match self {
            DisplayStatus::Players(ps) => ps.iter().map(Player::display_line).collect(),
            DisplayStatus::Teams(ts) => ts.iter().map(Team::display_line).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResultStore {
    players: Vec<Player>,
    teams: Vec<Team>,
    status: QueryStatus,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self.status, QueryStatus::Failed(_))
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// A new request is out: drop whatever the last one showed.
    pub fn set_loading(&mut self) {
        if self.is_fatal() {
            return;
        }
        self.players.clear();
        self.teams.clear();
        self.status = QueryStatus::Loading;
    }

    /// Replace one collection wholesale; the other is emptied so only one
    /// is ever meaningful.
    pub fn set_results(&mut self, results: ResultSet) {
        if self.is_fatal() {
            return;
        }
        let n = results.len();
        match results {
            ResultSet::Players(items) => {
                self.players = items;
                self.teams.clear();
            }
            ResultSet::Teams(items) => {
                self.teams = items;
                self.players.clear();
            }
        }
        self.status = QueryStatus::Succeeded(n);
    }

    pub fn set_failed(&mut self, cause: impl Into<String>) {
        if self.is_fatal() {
            return;
        }
        self.players.clear();
        self.teams.clear();
        self.status = QueryStatus::Failed(cause.into());
    }

    /// Back to Idle with both collections empty. A failure survives this.
    pub fn clear(&mut self) {
        self.players.clear();
        self.teams.clear();
        if !self.is_fatal() {
            self.status = QueryStatus::Idle;
        }
    }

    pub fn display_status(&self, mode: SearchMode) -> DisplayStatus<'_> {
        match &self.status {
            QueryStatus::Failed(cause) => DisplayStatus::Fatal(cause),
            QueryStatus::Loading => DisplayStatus::Loading,
            QueryStatus::Idle => DisplayStatus::Idle,
            QueryStatus::Succeeded(_) => match mode {
                SearchMode::None => DisplayStatus::Idle,
                SearchMode::ByName if self.players.is_empty() => DisplayStatus::NoResults,
                SearchMode::ByName => DisplayStatus::Players(&self.players),
                SearchMode::ByTeam if self.teams.is_empty() => DisplayStatus::NoResults,
                SearchMode::ByTeam => DisplayStatus::Teams(&self.teams),
            },
        }
    }
}
