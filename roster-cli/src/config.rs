//! Configuration for the roster CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. The database path can additionally
//! be overridden on the command line, which takes precedence over everything
//! here.

use std::path::PathBuf;

/// Database location under `$HOME` when no override is given.
const DEFAULT_CONFIG_DB: &str = ".config/roster/roster.db";

/// Fallback database location for development when `HOME` is unset.
const DEV_DB_PATH: &str = "./data/roster.db";

/// Default SQLite pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Get the database file path.
///
/// Priority:
/// 1. `ROSTER_DATABASE_PATH` env variable if set
/// 2. `$HOME/.config/roster/roster.db` if HOME is set
/// 3. `./data/roster.db` as fallback
pub fn get_database_path() -> PathBuf {
    if let Ok(path) = std::env::var("ROSTER_DATABASE_PATH") {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DB);
    }

    PathBuf::from(DEV_DB_PATH)
}

/// Get the maximum number of pooled SQLite connections.
///
/// Priority:
/// 1. `ROSTER_MAX_CONNECTIONS` env variable if set (falls back to the default
///    if the value is not a positive integer)
/// 2. `5` as fallback
pub fn get_max_connections() -> u32 {
    if let Ok(value) = std::env::var("ROSTER_MAX_CONNECTIONS") {
        return parse_max_connections(&value);
    }

    DEFAULT_MAX_CONNECTIONS
}

fn parse_max_connections(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_MAX_CONNECTIONS,
    }
}

/// Get the directory for rolling log files, if file logging is enabled.
///
/// When `ROSTER_LOG_DIR` is unset, logs go to stderr.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("ROSTER_LOG_DIR").ok().map(PathBuf::from)
}
