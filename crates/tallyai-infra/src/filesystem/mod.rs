//! Data directory layout for TallyAI.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TALLYAI_DATA_DIR";

/// Resolve the TallyAI data directory.
///
/// `TALLYAI_DATA_DIR` if set, else `~/.tallyai`, else `./.tallyai`.
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok(), dirs::home_dir())
}

fn data_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".tallyai");
    }

    // Last resort: current directory
    PathBuf::from(".tallyai")
}

/// Path of `config.toml` inside the data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}
