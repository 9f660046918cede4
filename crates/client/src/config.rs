//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Settings for a single journey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// TOML file with `[game]` and `[breaker]` sections.
    pub config_path: Option<PathBuf>,
    /// Fixed seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub days: u32,
    /// Percent of guarded requests that fail.
    pub request_failure_percent: u32,
    /// Directory for the log file. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
    pub party: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: None,
            days: 60,
            request_failure_percent: 20,
            log_dir: None,
            party: ["Ezra", "Mary", "Abe", "Sarah", "Jed"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TRAIL_CONFIG` - Path to the trail TOML file
    /// - `TRAIL_SEED` - Journey seed (default: random)
    /// - `TRAIL_DAYS` - Days to play (default: 60)
    /// - `TRAIL_REQUEST_FAILURE_PERCENT` - Guarded request failure rate (default: 20)
    /// - `TRAIL_LOG_DIR` - Directory for `trail.log`
    /// - `TRAIL_PARTY` - Comma-separated traveller names, leader first
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.config_path = lookup("TRAIL_CONFIG").map(PathBuf::from);
        config.seed = parse(&lookup, "TRAIL_SEED");
        config.log_dir = lookup("TRAIL_LOG_DIR").map(PathBuf::from);
        if let Some(days) = parse(&lookup, "TRAIL_DAYS") {
            config.days = days;
        }
        if let Some(percent) = parse::<u32>(&lookup, "TRAIL_REQUEST_FAILURE_PERCENT") {
            config.request_failure_percent = percent.min(100);
        }
        if let Some(names) = lookup("TRAIL_PARTY") {
            let names: Vec<String> = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
            if !names.is_empty() {
                config.party = names;
            }
        }

        config
    }
}

fn parse<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}
