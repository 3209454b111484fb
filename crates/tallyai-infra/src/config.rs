//! Global configuration loader for TallyAI.
//!
//! Reads `config.toml` from the data directory (`~/.tallyai/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use tallyai_types::config::GlobalConfig;
use tallyai_types::error::ConfigError;

use crate::filesystem::config_path;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    match try_load_global_config(data_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No config.toml found in {}, using defaults",
                data_dir.display()
            );
            GlobalConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            GlobalConfig::default()
        }
    }
}

/// Strict variant of [`load_global_config`]: `Ok(None)` when the file is
/// absent, an error when it cannot be read or parsed.
pub async fn try_load_global_config(data_dir: &Path) -> Result<Option<GlobalConfig>, ConfigError> {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::Read(format!("{}: {err}", path.display()))),
    };

    toml::from_str::<GlobalConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}
