use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const HOME_ENV_VAR: &str = "TEAMLINE_HOME";

/// `$TEAMLINE_HOME`, else `~/.teamline`.
pub fn teamline_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".teamline"))
}

pub fn ensure_teamline_home() -> Result<PathBuf> {
    let dir = teamline_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
