// src/search/coordinator.rs
//
// Owns mode, cancellation and results; lives on the UI thread.
//
// submit() validates, supersedes the previous request, marks Loading and
// spawns one worker thread for the call. The worker sends its outcome back
// over a channel tagged with its token. pump()/wait() drain that channel
// and reduce each settlement here, on the owning thread: a token that is
// no longer live is dropped without touching anything.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use thiserror::Error;

use crate::api::{FetchError, StatsClient};

use super::{
    cancel::{QueryCancellationManager, Token},
    mode::{NameFilter, SearchMode, SearchModeState, TeamFilter},
    results::{DisplayStatus, QueryStatus, ResultKind, ResultSet, ResultStore},
};

/// Why a submission did not go out. Nothing changed state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no search mode selected")]
    NoMode,
    #[error("enter a first or last name")]
    EmptyName,
    #[error("pick a conference")]
    NoConference,
    #[error("search is halted after an earlier failure")]
    Halted,
}

/// What reducing one settlement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Populated { kind: ResultKind, count: usize },
    /// Token was no longer live; result discarded.
    Superseded,
    /// Live token, but the transport reported a cancel. Ignored.
    Cancelled,
    Failed,
}

/// Called from the worker thread after its settlement is queued.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Filter snapshot taken at submit time.
#[derive(Clone, Debug)]
enum Request {
    Players(NameFilter),
    Teams(TeamFilter),
}

struct Settlement {
    token: Token,
    outcome: Result<ResultSet, FetchError>,
}

pub struct SearchCoordinator<C: StatsClient> {
    client: Arc<C>,
    modes: SearchModeState,
    cancel: QueryCancellationManager,
    results: ResultStore,
    tx: Sender<Settlement>,
    rx: Receiver<Settlement>,
    waker: Option<Waker>,
    in_flight: usize,
}

impl<C: StatsClient> SearchCoordinator<C> {
    pub fn new(client: Arc<C>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            modes: SearchModeState::new(),
            cancel: QueryCancellationManager::new(),
            results: ResultStore::new(),
            tx,
            rx,
            waker: None,
            in_flight: 0,
        }
    }

    /// Install a hook that runs whenever a worker settles (e.g. repaint).
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /* ---------- reads ---------- */

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.modes.mode()
    }

    pub fn name_filter(&self) -> &NameFilter {
        self.modes.name()
    }

    pub fn team_filter(&self) -> &TeamFilter {
        self.modes.team()
    }

    pub fn status(&self) -> &QueryStatus {
        self.results.status()
    }

    pub fn results(&self) -> &ResultStore {
        &self.results
    }

    pub fn display_status(&self) -> DisplayStatus<'_> {
        self.results.display_status(self.modes.mode())
    }

    pub fn is_fatal(&self) -> bool {
        self.results.is_fatal()
    }

    /// Workers spawned whose settlement has not been drained yet,
    /// superseded ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /* ---------- user events ---------- */

    pub fn name_filter_mut(&mut self) -> &mut NameFilter {
        self.modes.name_mut()
    }

    pub fn team_filter_mut(&mut self) -> &mut TeamFilter {
        self.modes.team_mut()
    }

    /// Switch facet. Always wins over an outstanding request: the request
    /// stays running but its result will be dropped.
    pub fn select_mode(&mut self, mode: SearchMode) {
        let prev = self.modes.mode();
        if self.cancel.invalidate() {
            logd!("Search: Mode switch superseded the outstanding request");
        }
        self.modes.select(mode);
        self.results.clear();
        logf!("UI: Mode {:?} → {:?}", prev, mode);
    }

    pub fn reset(&mut self) {
        self.select_mode(SearchMode::None);
    }

    pub fn submit(&mut self) -> Result<Token, SubmitError> {
        let request = self.validate().inspect_err(|e| {
            logd!("Search: Submit refused ({e})");
        })?;

        let token = self.cancel.begin();
        self.results.set_loading();
        logf!("Search: Dispatch token={} {:?}", token.id(), request);
        self.dispatch(token.clone(), request);
        Ok(token)
    }

    fn validate(&self) -> Result<Request, SubmitError> {
        if self.results.is_fatal() {
            return Err(SubmitError::Halted);
        }
        match self.modes.mode() {
            SearchMode::None => Err(SubmitError::NoMode),
            SearchMode::ByName => {
                let name = self.modes.name();
                if name.is_empty() {
                    return Err(SubmitError::EmptyName);
                }
                Ok(Request::Players(name.trimmed()))
            }
            SearchMode::ByTeam => {
                let team = *self.modes.team();
                if team.is_empty() {
                    return Err(SubmitError::NoConference);
                }
                Ok(Request::Teams(team))
            }
        }
    }

    fn dispatch(&mut self, token: Token, request: Request) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let outcome = match &request {
                Request::Players(f) => client
                    .search_players(f, token.signal())
                    .map(|page| ResultSet::Players(page.into_items())),
                Request::Teams(f) => client
                    .search_teams(f, token.signal())
                    .map(|page| ResultSet::Teams(page.into_items())),
            };
            // Receiver lives as long as the coordinator; a send error just
            // means nobody is listening any more.
            let _ = tx.send(Settlement { token, outcome });
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    /* ---------- settlement ---------- */

    /// Reduce everything that has settled so far. Never blocks.
    pub fn pump(&mut self) -> Vec<Outcome> {
        let mut done = Vec::new();
        while let Ok(s) = self.rx.try_recv() {
            done.push(self.settle(s));
        }
        done
    }

    /// Block for the next settlement, live or not.
    /// `None` when nothing is in flight.
    pub fn wait(&mut self) -> Option<Outcome> {
        if self.in_flight == 0 {
            return None;
        }
        let s = self.rx.recv().ok()?;
        Some(self.settle(s))
    }

    /// Block until the live request settles, discarding stale ones on the way.
    /// `None` when there is no live request to wait for.
    pub fn wait_live(&mut self) -> Option<Outcome> {
        while self.cancel.has_live() {
            match self.wait()? {
                Outcome::Superseded => continue,
                other => return Some(other),
            }
        }
        None
    }

    fn settle(&mut self, Settlement { token, outcome }: Settlement) -> Outcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if !self.cancel.is_live(&token) {
            logd!("Search: Dropped stale settlement token={}", token.id());
            return Outcome::Superseded;
        }

        match outcome {
            Ok(set) => {
                self.cancel.retire(&token);
                let (kind, count) = (set.kind(), set.len());
                logf!("Search: OK token={} {:?} count={}", token.id(), kind, count);
                self.results.set_results(set);
                Outcome::Populated { kind, count }
            }
            Err(e) if e.is_cancelled() => {
                logd!("Search: Transport cancelled live token={}, ignoring", token.id());
                Outcome::Cancelled
            }
            Err(e) => {
                self.cancel.retire(&token);
                loge!("Search: Failed token={}: {}", token.id(), e);
                self.results.set_failed(e.to_string());
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Conference, Page, Player, Team};
    use crate::search::cancel::CancelSignal;
    use std::sync::Mutex;

    /// Answers instantly from canned pages and records every call.
    #[derive(Default)]
    struct Canned {
        players: Vec<Player>,
        teams: Vec<Team>,
        fail_with: Option<u16>,
        calls: Mutex<Vec<String>>,
    }

    impl StatsClient for Canned {
        fn search_players(&self, f: &NameFilter, _: &CancelSignal) -> Result<Page<Player>, FetchError> {
            self.calls.lock().unwrap().push(format!("players {}|{}", f.first_name, f.last_name));
            match self.fail_with {
                Some(code) => Err(FetchError::Status { code, body: s!("nope") }),
                None => Ok(Page::new(self.players.clone())),
            }
        }

        fn search_teams(&self, f: &TeamFilter, _: &CancelSignal) -> Result<Page<Team>, FetchError> {
            self.calls.lock().unwrap().push(format!("teams {:?}", f.conference));
            match self.fail_with {
                Some(code) => Err(FetchError::Status { code, body: s!("nope") }),
                None => Ok(Page::new(self.teams.clone())),
            }
        }
    }

    fn coordinator(client: Canned) -> (Arc<Canned>, SearchCoordinator<Canned>) {
        let client = Arc::new(client);
        (Arc::clone(&client), SearchCoordinator::new(client))
    }

    fn settlement(token: &Token, outcome: Result<ResultSet, FetchError>) -> Settlement {
        Settlement { token: token.clone(), outcome }
    }

    #[test]
    fn submit_without_mode_is_refused() {
        let (client, mut c) = coordinator(Canned::default());
        assert_eq!(c.submit().unwrap_err(), SubmitError::NoMode);
        assert_eq!(c.status(), &QueryStatus::Idle);
        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_name_never_loads() {
        let (client, mut c) = coordinator(Canned::default());
        c.select_mode(SearchMode::ByName);
        c.name_filter_mut().first_name = s!("   ");
        assert_eq!(c.submit().unwrap_err(), SubmitError::EmptyName);
        assert_eq!(c.status(), &QueryStatus::Idle);
        assert_eq!(c.in_flight(), 0);
        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_conference_never_loads() {
        let (_, mut c) = coordinator(Canned::default());
        c.select_mode(SearchMode::ByTeam);
        assert_eq!(c.submit().unwrap_err(), SubmitError::NoConference);
        assert_eq!(c.status(), &QueryStatus::Idle);
    }

    #[test]
    fn submit_sends_trimmed_filter() {
        let (client, mut c) = coordinator(Canned {
            players: vec![Player::new(237, "LeBron", "James")],
            ..Canned::default()
        });
        c.select_mode(SearchMode::ByName);
        c.name_filter_mut().first_name = s!(" LeBron ");
        c.submit().unwrap();
        assert_eq!(c.status(), &QueryStatus::Loading);

        assert_eq!(c.wait_live(), Some(Outcome::Populated { kind: ResultKind::Players, count: 1 }));
        assert_eq!(client.calls.lock().unwrap().as_slice(), ["players LeBron|"]);
    }

    #[test]
    fn stale_settlement_is_dropped() {
        let (_, mut c) = coordinator(Canned::default());
        c.modes.select(SearchMode::ByName);
        let a = c.cancel.begin();
        c.results.set_loading();
        let b = c.cancel.begin();

        let out = c.settle(settlement(&a, Ok(ResultSet::Players(vec![Player::new(1, "Old", "Result")]))));
        assert_eq!(out, Outcome::Superseded);
        assert_eq!(c.status(), &QueryStatus::Loading);
        assert!(c.results().players().is_empty());

        let out = c.settle(settlement(&b, Ok(ResultSet::Players(Vec::new()))));
        assert_eq!(out, Outcome::Populated { kind: ResultKind::Players, count: 0 });
        assert_eq!(c.display_status(), DisplayStatus::NoResults);
    }

    #[test]
    fn stale_failure_is_dropped_too() {
        let (_, mut c) = coordinator(Canned::default());
        c.modes.select(SearchMode::ByTeam);
        let a = c.cancel.begin();
        let _b = c.cancel.begin();
        c.results.set_loading();

        let out = c.settle(settlement(&a, Err(FetchError::Status { code: 500, body: s!() })));
        assert_eq!(out, Outcome::Superseded);
        assert!(!c.is_fatal());
    }

    #[test]
    fn live_cancel_is_not_a_failure() {
        let (_, mut c) = coordinator(Canned::default());
        c.modes.select(SearchMode::ByName);
        let a = c.cancel.begin();
        c.results.set_loading();

        assert_eq!(c.settle(settlement(&a, Err(FetchError::Cancelled))), Outcome::Cancelled);
        assert!(!c.is_fatal());
        assert_eq!(c.status(), &QueryStatus::Loading);
    }

    #[test]
    fn live_failure_is_terminal() {
        let (client, mut c) = coordinator(Canned { fail_with: Some(401), ..Canned::default() });
        c.select_mode(SearchMode::ByTeam);
        c.team_filter_mut().conference = Some(Conference::West);
        c.submit().unwrap();
        assert_eq!(c.wait_live(), Some(Outcome::Failed));
        assert!(matches!(c.display_status(), DisplayStatus::Fatal(cause) if cause.contains("401")));

        // Nothing brings it back.
        c.select_mode(SearchMode::ByName);
        c.name_filter_mut().last_name = s!("James");
        assert_eq!(c.submit().unwrap_err(), SubmitError::Halted);
        c.reset();
        assert!(c.is_fatal());
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn mode_switch_clears_results_and_supersedes() {
        let (_, mut c) = coordinator(Canned::default());
        c.modes.select(SearchMode::ByName);
        let a = c.cancel.begin();
        c.results.set_loading();

        c.select_mode(SearchMode::ByTeam);
        assert!(a.signal().is_cancelled());
        assert_eq!(c.status(), &QueryStatus::Idle);

        let out = c.settle(settlement(&a, Ok(ResultSet::Players(vec![Player::new(237, "LeBron", "James")]))));
        assert_eq!(out, Outcome::Superseded);
        assert!(c.results().players().is_empty());
        assert_eq!(c.display_status(), DisplayStatus::Idle);
    }

    #[test]
    fn resubmitting_same_filter_issues_fresh_request() {
        let (client, mut c) = coordinator(Canned::default());
        c.select_mode(SearchMode::ByTeam);
        c.team_filter_mut().conference = Some(Conference::East);
        let first = c.submit().unwrap();
        let second = c.submit().unwrap();
        assert_ne!(first, second);

        while c.wait().is_some() {}
        assert_eq!(client.calls.lock().unwrap().len(), 2);
        assert_eq!(c.display_status(), DisplayStatus::NoResults);
    }

    #[test]
    fn wait_with_nothing_in_flight_returns_none() {
        let (_, mut c) = coordinator(Canned::default());
        assert_eq!(c.wait(), None);
        assert_eq!(c.wait_live(), None);
        assert!(c.pump().is_empty());
    }

    #[test]
    fn waker_runs_after_settlement() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let mut c = SearchCoordinator::new(Arc::new(Canned::default()))
            .with_waker(Arc::new(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            }));
        c.select_mode(SearchMode::ByName);
        c.name_filter_mut().first_name = s!("x");
        c.submit().unwrap();
        c.wait_live();
        // The waker runs right after the send; give the worker a moment.
        for _ in 0..100 {
            if hits.load(Ordering::SeqCst) == 1 {
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
