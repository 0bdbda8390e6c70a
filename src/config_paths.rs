//! Where pip-drag keeps its files: `config.yaml` and the `logs/` directory

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "pip-drag";

/// `$XDG_CONFIG_HOME/pip-drag`, `~/.config/pip-drag`, or
/// `%APPDATA%\pip-drag` on Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// Interaction thresholds read by `PipConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Daily-rotated trace files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory for logs")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
