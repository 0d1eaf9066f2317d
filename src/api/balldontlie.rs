// src/api/balldontlie.rs
//
// HTTPS client for api.balldontlie.io. Auth is the raw key in the
// Authorization header. Cancellation is checked before the request goes
// out and again once the response is in; an in-flight socket read is not
// interrupted.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::{FetchError, Page, Player, StatsClient, Team};
use crate::{
    config::{consts::USER_AGENT, options::ApiOptions},
    search::{
        cancel::CancelSignal,
        mode::{NameFilter, TeamFilter},
    },
};

/// Error bodies are echoed into the log and the failure cause; keep them short.
const MAX_ERROR_BODY: usize = 200;

pub struct BallDontLie {
    http: Client,
    base_url: String,
    api_key: String,
    per_page: u32,
}

impl BallDontLie {
    pub fn new(opts: &ApiOptions) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()?;

        logf!("Api: Client ready base={} key={}", opts.base_url, if opts.has_key() { "set" } else { "empty" });

        Ok(Self {
            http,
            base_url: s!(opts.base_url.trim_end_matches('/')),
            api_key: opts.api_key.clone(),
            per_page: opts.per_page,
        })
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
        cancel: &CancelSignal,
    ) -> Result<T, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        logd!("Api: GET {} {:?}", url, query);

        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .query(query)
            .send()?;

        if cancel.is_cancelled() {
            logd!("Api: Response for {} arrived after cancel, dropping", endpoint);
            return Err(FetchError::Cancelled);
        }

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                body: clip(&body, MAX_ERROR_BODY),
            });
        }
        decode(&body)
    }
}

impl StatsClient for BallDontLie {
    fn search_players(
        &self,
        filter: &NameFilter,
        cancel: &CancelSignal,
    ) -> Result<Page<Player>, FetchError> {
        self.get("players", &player_query(filter, self.per_page), cancel)
    }

    fn search_teams(
        &self,
        filter: &TeamFilter,
        cancel: &CancelSignal,
    ) -> Result<Page<Team>, FetchError> {
        self.get("teams", &team_query(filter), cancel)
    }
}

/// Decode a response body into a typed page.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Empty name parts are left out so the service treats them as unconstrained.
pub fn player_query(filter: &NameFilter, per_page: u32) -> Vec<(&'static str, String)> {
    let mut q = Vec::with_capacity(3);
    if !filter.first().is_empty() {
        q.push(("first_name", s!(filter.first())));
    }
    if !filter.last().is_empty() {
        q.push(("last_name", s!(filter.last())));
    }
    q.push(("per_page", per_page.to_string()));
    q
}

pub fn team_query(filter: &TeamFilter) -> Vec<(&'static str, String)> {
    filter
        .conference
        .map(|c| vec![("conference", s!(c.as_str()))])
        .unwrap_or_default()
}

fn clip(s: &str, max: usize) -> String {
    let s = s.trim();
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s!(s),
    }
}
