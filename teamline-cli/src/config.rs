use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_teamline_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardSection,
    #[serde(default)]
    pub view: ViewSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSection {
    /// IANA zone used to read offset timestamps and to decide what "today" is.
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSection {
    pub row_height: u32,
    pub row_margin: u32,
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            row_height: 40,
            row_margin: 60,
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        self.board
            .timezone
            .parse()
            .map_err(|_| anyhow!("invalid timezone in config: {}", self.board.timezone))
    }

    /// Current calendar day in the board timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        let tz = self.timezone()?;
        Ok(chrono::Utc::now().with_timezone(&tz).date_naive())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_teamline_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    cfg.timezone()?;
    Ok(cfg)
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
