//! Where preferences are stored.
//!
//! Resolution chain: CLI flag > `PLATES_STORE_DIR` env var >
//! `$XDG_CONFIG_HOME/plates` > `~/.config/plates`.

use std::path::{Path, PathBuf};

pub const STORE_DIR_ENV: &str = "PLATES_STORE_DIR";

/// The default store directory, always in XDG layout.
#[must_use]
pub fn default_store_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("plates");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("plates")
}

#[must_use]
pub fn resolve_store_dir(cli_dir: Option<&Path>) -> PathBuf {
    resolve_with(cli_dir, std::env::var(STORE_DIR_ENV).ok())
}

fn resolve_with(cli_dir: Option<&Path>, env_dir: Option<String>) -> PathBuf {
    if let Some(dir) = cli_dir {
        dir.to_path_buf()
    } else if let Some(dir) = env_dir.filter(|dir| !dir.is_empty()) {
        PathBuf::from(dir)
    } else {
        default_store_dir()
    }
}
