mod config;

pub use config::{BookingConfig, Config, DirectoryConfig};

use std::path::PathBuf;

/// Returns `~/.config/eraya[-dev]/` based on ERAYA_ENV.
///
/// Set ERAYA_ENV=dev to use the development data directory. ERAYA_HOME
/// replaces `~/.config` as the base directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = match std::env::var_os("ERAYA_HOME") {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };

    let env = std::env::var("ERAYA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("eraya-dev")
    } else {
        base_dir.join("eraya")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
