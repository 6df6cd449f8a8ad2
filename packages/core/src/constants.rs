use std::env;
use std::path::PathBuf;

/// Get the path to the Carryover directory (~/.carryover)
pub fn carryover_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".carryover")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".carryover")
    }
}

/// Get the path to the default database file (~/.carryover/carryover.db)
pub fn database_file() -> PathBuf {
    carryover_dir().join("carryover.db")
}
