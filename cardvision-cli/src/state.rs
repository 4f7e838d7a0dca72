use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CARDVISION_HOME`, else `~/.cardvision`.
pub fn cardvision_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("CARDVISION_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cardvision"))
}

pub fn ensure_cardvision_home() -> Result<PathBuf> {
    let dir = cardvision_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Log file used while the dashboard owns the terminal.
pub fn log_path() -> Result<PathBuf> {
    Ok(ensure_cardvision_home()?.join("cardvision.log"))
}
