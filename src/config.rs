use log::info;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::PollError;

const DEFAULT_SNAPSHOT: &str = "polls.json";
const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub check_interval: Duration,
    pub watch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECONDS),
            watch: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, PollError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Split out so tests don't have to touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PollError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = lookup("POLL_SNAPSHOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                info!("POLL_SNAPSHOT not set, using default: {}", DEFAULT_SNAPSHOT);
                PathBuf::from(DEFAULT_SNAPSHOT)
            });

        let check_interval = match lookup("CHECK_INTERVAL_SECONDS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    PollError::Config(format!("CHECK_INTERVAL_SECONDS={:?}: {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(PollError::Config("CHECK_INTERVAL_SECONDS must be positive".to_string()));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECONDS),
        };

        let watch = lookup("POLL_WATCH")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            snapshot_path,
            check_interval,
            watch,
        })
    }
}
