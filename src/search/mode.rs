// src/search/mode.rs
//
// Which facet is active, plus the two form filters behind it.
// Every selection, including re-selecting the current mode, starts from
// blank filters.

use crate::api::Conference;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    #[default]
    None,
    ByName,
    ByTeam,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::None, SearchMode::ByName, SearchMode::ByTeam];

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::None => "Select an option...",
            SearchMode::ByName => "Name",
            SearchMode::ByTeam => "Team",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(SearchMode::None),
            "name" | "player" => Some(SearchMode::ByName),
            "team" | "conference" => Some(SearchMode::ByTeam),
            _ => None,
        }
    }
}

/// Partial first/last name. Either part may be blank, not both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
    pub first_name: String,
    pub last_name: String,
}

impl NameFilter {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self { first_name: s!(first_name), last_name: s!(last_name) }
    }

    #[inline]
    pub fn first(&self) -> &str {
        self.first_name.trim()
    }

    #[inline]
    pub fn last(&self) -> &str {
        self.last_name.trim()
    }

    /// Whitespace-only counts as empty.
    pub fn is_empty(&self) -> bool {
        self.first().is_empty() && self.last().is_empty()
    }

    /// The filter as it goes over the wire.
    pub fn trimmed(&self) -> Self {
        Self::new(self.first(), self.last())
    }

    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub conference: Option<Conference>,
}

impl TeamFilter {
    pub fn new(conference: Conference) -> Self {
        Self { conference: Some(conference) }
    }

    pub fn is_empty(&self) -> bool {
        self.conference.is_none()
    }

    pub fn clear(&mut self) {
        self.conference = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchModeState {
    mode: SearchMode,
    name: NameFilter,
    team: TeamFilter,
}

impl SearchModeState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn select(&mut self, mode: SearchMode) {
        self.mode = mode;
        self.name.clear();
        self.team.clear();
    }

    pub fn reset(&mut self) {
        self.select(SearchMode::None);
    }

    pub fn name(&self) -> &NameFilter {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut NameFilter {
        &mut self.name
    }

    pub fn team(&self) -> &TeamFilter {
        &self.team
    }

    pub fn team_mut(&mut self) -> &mut TeamFilter {
        &mut self.team
    }
}
