// src/api/types.rs
//
// Wire shapes for the stats service. Only the fields we display are
// required; anything else the service adds is ignored or defaulted.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Extra text fields come back as `null` for some historical rows.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default)]
    pub team: Option<Team>,
}

impl Player {
    pub fn new(id: u64, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: s!(first_name),
            last_name: s!(last_name),
            position: s!(),
            team: None,
        }
    }

    /// `(237) LeBron James`
    pub fn display_line(&self) -> String {
        format!("({}) {} {}", self.id, self.first_name, self.last_name)
    }
}

/// One team shape for every view. The service sends both the abbreviation
/// and the conference, so we keep both rather than picking per screen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: u64,
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub abbreviation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conference: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub division: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Team {
    pub fn new(id: u64, full_name: &str, abbreviation: &str, conference: Conference) -> Self {
        Self {
            id,
            full_name: s!(full_name),
            abbreviation: s!(abbreviation),
            conference: s!(conference.as_str()),
            division: s!(),
            city: s!(),
            name: s!(),
        }
    }

    /// `(14) Los Angeles Lakers LAL`
    pub fn display_line(&self) -> String {
        format!("({}) {} {}", self.id, self.full_name, self.abbreviation)
    }
}

/// League conferences accepted by the teams endpoint. The service wants
/// them capitalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::West, Conference::East];

    pub fn as_str(self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }

    /// Case-insensitive; accepts the short forms too.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" | "e" => Some(Conference::East),
            "west" | "w" => Some(Conference::West),
            _ => None,
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageMeta {
    #[serde(default)]
    pub next_cursor: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// First (and only) page of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, meta: None }
    }

    pub fn items(&self) -> &[T] {
        &self.data
    }

    pub fn into_items(self) -> Vec<T> {
        self.data
    }
}
