//! Runtime settings read from the environment.
//!
//! - `FLASHCARDS_DB`: path of the SQLite file holding the saved deck
//!   (default `db.sqlite3` in the working directory)
//! - `FLASHCARDS_LOG`: default `tracing` filter; `RUST_LOG` still wins

use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "FLASHCARDS_DB";
pub const LOG_FILTER_VAR: &str = "FLASHCARDS_LOG";

const DEFAULT_DB_PATH: &str = "db.sqlite3";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            db_path: var(DB_PATH_VAR).map(PathBuf::from).unwrap_or(defaults.db_path),
            log_filter: var(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path, PathBuf::from("db.sqlite3"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_values_from_lookup() {
        let vars = HashMap::from([
            (DB_PATH_VAR, "/tmp/cards.sqlite3"),
            (LOG_FILTER_VAR, "flashcard_deck=debug"),
        ]);
        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/tmp/cards.sqlite3"));
        assert_eq!(config.log_filter, "flashcard_deck=debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
