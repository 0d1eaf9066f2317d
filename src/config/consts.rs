// src/config/consts.rs

// Net config
pub const API_BASE_URL: &str = "https://api.balldontlie.io/v1";
pub const USER_AGENT: &str = concat!("bdl_search/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_PER_PAGE: u32 = 25;

// Environment
pub const API_KEY_ENV: &str = "BALL_API_KEY";
pub const API_URL_ENV: &str = "BALL_API_URL";

// Logging
pub const LOG_FILE: &str = "bdl_search.log";

// Window
pub const APP_TITLE: &str = "Ball Don't Lie";
pub const WINDOW_W: f32 = 520.0;
pub const WINDOW_H: f32 = 640.0;

// Status text
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str = "No results found";
pub const FATAL_TEXT: &str = "Something went wrong!";
