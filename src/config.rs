//! Application configuration loaded from environment variables.
//!
//! Every knob has a default, so loading never fails; a missing `.env` file
//! is fine for embedded use.

use std::env;
use std::path::PathBuf;

/// Where the workout blob lives when no path is configured.
const DEFAULT_DATA_PATH: &str = "data/workouts.json";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted workout blob (JSON file)
    pub data_path: PathBuf,
    /// Number of trailing weeks in the chart series
    pub chart_weeks: usize,
    /// Number of records shown in the recent-workouts list
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart_weeks: 8,
            recent_limit: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            data_path: env::var("MILEAGE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            chart_weeks: env::var("MILEAGE_CHART_WEEKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.chart_weeks),
            recent_limit: env::var("MILEAGE_RECENT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.recent_limit),
        }
    }
}
