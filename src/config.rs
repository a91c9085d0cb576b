//! Process-wide settings for one poll of the charging station.
//!
//! Everything is compiled in; [`Config::default`] is the deployed setup and the
//! `with_*` setters exist so tests can point the poller elsewhere.

use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

pub const STATION_ID: &str = "5j6my7";
pub const API_BASE: &str = "https://api.chargefinder.com/status";
pub const CSV_PATH: &str = "laadpaal_imbrexstraat_log.csv";
pub const TIMEZONE: Tz = chrono_tz::Europe::Amsterdam;
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Headers that make the request look like it comes from a normal browser tab
/// on chargefinder.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserProfile {
    pub user_agent: String,
    pub origin: String,
    pub referer: String,
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; laadpaal-logger/1.0)".to_string(),
            origin: "https://chargefinder.com".to_string(),
            referer: "https://chargefinder.com/".to_string(),
        }
    }
}

/// What to do with the row when fetching or interpreting fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Append a row with `-1` as the count.
    #[default]
    RecordSentinel,
    /// Report the error and append nothing.
    SkipRow,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub station_id: String,
    pub api_base: String,
    pub csv_path: PathBuf,
    pub timezone: Tz,
    pub timeout: Duration,
    pub headers: BrowserProfile,
    pub on_failure: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            station_id: STATION_ID.to_string(),
            api_base: API_BASE.to_string(),
            csv_path: PathBuf::from(CSV_PATH),
            timezone: TIMEZONE,
            timeout: TIMEOUT,
            headers: BrowserProfile::default(),
            on_failure: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Full status endpoint for the configured station.
    pub fn status_url(&self) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), self.station_id)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}
