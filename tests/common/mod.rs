// tests/common/mod.rs
//
// A stats client whose calls block until the test releases them.
// Gates are keyed by request ("name:First|Last" / "team:East") so tests can
// decide the settlement order regardless of thread scheduling.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};

use bdl_search::api::{Conference, FetchError, Page, Player, StatsClient, Team};
use bdl_search::search::{CancelSignal, NameFilter, TeamFilter};

pub enum Reply {
    Players(Vec<Player>),
    Teams(Vec<Team>),
    Fail(u16),
    Cancelled,
}

pub struct Gate(Sender<Reply>);

impl Gate {
    pub fn release(self, reply: Reply) {
        self.0.send(reply).expect("call already gave up on this gate");
    }
}

#[derive(Default)]
pub struct ScriptedClient {
    gates: Mutex<HashMap<String, VecDeque<Receiver<Reply>>>>,
    calls: Mutex<Vec<String>>,
    /// Mimic a transport that checks the cancel flag once the reply is in.
    pub honor_cancel: bool,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { honor_cancel: true, ..Self::default() })
    }

    pub fn ignoring_cancel() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register the next answer for `key`. Must happen before the submit.
    pub fn gate(&self, key: &str) -> Gate {
        let (tx, rx) = mpsc::channel();
        self.gates
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(rx);
        Gate(tx)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, key: String, cancel: &CancelSignal) -> Result<Reply, FetchError> {
        self.calls.lock().unwrap().push(key.clone());
        let rx = self.gates.lock().unwrap().get_mut(&key).and_then(|q| q.pop_front());
        let Some(rx) = rx else {
            return Err(FetchError::Status { code: 0, body: format!("unexpected call {key}") });
        };
        let reply = rx.recv().unwrap_or(Reply::Cancelled);
        if self.honor_cancel && cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        Ok(reply)
    }
}

fn settle<T>(reply: Result<Reply, FetchError>, pick: impl FnOnce(Reply) -> Option<Vec<T>>) -> Result<Page<T>, FetchError> {
    match reply? {
        Reply::Fail(code) => Err(FetchError::Status { code, body: "scripted failure".into() }),
        Reply::Cancelled => Err(FetchError::Cancelled),
        other => pick(other)
            .map(Page::new)
            .ok_or_else(|| FetchError::Status { code: 0, body: "wrong reply kind".into() }),
    }
}

impl StatsClient for ScriptedClient {
    fn search_players(&self, filter: &NameFilter, cancel: &CancelSignal) -> Result<Page<Player>, FetchError> {
        settle(self.answer(name_key(filter), cancel), |r| match r {
            Reply::Players(v) => Some(v),
            _ => None,
        })
    }

    fn search_teams(&self, filter: &TeamFilter, cancel: &CancelSignal) -> Result<Page<Team>, FetchError> {
        settle(self.answer(team_key(filter), cancel), |r| match r {
            Reply::Teams(v) => Some(v),
            _ => None,
        })
    }
}

pub fn name_key(f: &NameFilter) -> String {
    format!("name:{}|{}", f.first_name, f.last_name)
}

pub fn team_key(f: &TeamFilter) -> String {
    format!("team:{}", f.conference.map_or("-", Conference::as_str))
}

pub fn lebron() -> Player {
    Player::new(237, "LeBron", "James")
}

pub fn lakers() -> Team {
    Team::new(14, "Los Angeles Lakers", "LAL", Conference::West)
}

pub fn celtics() -> Team {
    Team::new(2, "Boston Celtics", "BOS", Conference::East)
}
