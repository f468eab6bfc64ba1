//! Environment-driven configuration
//!
//! The capture script and the service are usually deployed together, so
//! configuration stays minimal: a port, the log file location, and the
//! dedup switch. Unset variables fall back to defaults; unparseable values
//! are warned about and ignored.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_FILE: &str = "replays.jsonl";

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on (`PORT`).
    pub port: u16,
    /// Path of the append-only replay log (`REPLAY_DATA_FILE`).
    pub data_file: PathBuf,
    /// Skip payloads whose `gameId` is already stored (`REPLAY_DEDUP`).
    pub dedup_by_game_id: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            dedup_by_game_id: false,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("PORT") {
            match raw.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable PORT"),
            }
        }
        if let Ok(path) = env::var("REPLAY_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Ok(raw) = env::var("REPLAY_DEDUP") {
            config.dedup_by_game_id = parse_bool(&raw);
        }

        config
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_file, PathBuf::from("replays.jsonl"));
        assert!(!config.dedup_by_game_id);
    }

    #[test]
    fn bool_parsing() {
        for truthy in ["1", "true", "TRUE", "Yes", "on"] {
            assert!(parse_bool(truthy), "{truthy} should enable");
        }
        for falsy in ["0", "false", "off", "", "nope"] {
            assert!(!parse_bool(falsy), "{falsy} should disable");
        }
    }
}
