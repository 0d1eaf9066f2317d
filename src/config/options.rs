// src/config/options.rs
use std::fmt;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
}

impl AppOptions {
    pub fn from_env() -> Self {
        Self { api: ApiOptions::from_env() }
    }
}

/// Everything the stats client needs at construction.
///
/// The key is passed through untouched: an empty or wrong key is not
/// rejected here, it surfaces as a failed first request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
    /// Transport-level timeout. `None` lets a hung request hang.
    pub timeout: Option<Duration>,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(API_BASE_URL),
            api_key: s!(),
            per_page: DEFAULT_PER_PAGE,
            timeout: None,
        }
    }
}

impl ApiOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some(key) = lookup(API_KEY_ENV) {
            opts.api_key = s!(key.trim());
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            opts.base_url = s!(url.trim());
        }
        opts
    }

    pub fn has_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// Keep the credential out of logs.
impl fmt::Debug for ApiOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.has_key() { "<set>" } else { "<empty>" })
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .finish()
    }
}
