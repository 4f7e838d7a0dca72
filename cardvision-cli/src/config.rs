use anyhow::{Context, Result};
use cardvision_export::ExportFormat;
use cardvision_ingest::DEFAULT_SAMPLE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_cardvision_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractSection,
    pub dashboard: DashboardSection,
    pub export: ExportSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSection {
    /// Transactions kept per statement
    pub sample_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    pub show_raw_text: bool,
    pub raw_text_preview_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// tracing-subscriber filter directive; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            show_raw_text: false,
            raw_text_preview_chars: 2000,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            out_dir: PathBuf::from("."),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_cardvision_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.extract.sample_size, 5);
        assert_eq!(cfg.dashboard.raw_text_preview_chars, 2000);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[export]\nformat = \"csv\"\n\n[extract]\nsample_size = 10\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.export.format, ExportFormat::Csv);
        assert_eq!(cfg.export.out_dir, PathBuf::from("."));
        assert_eq!(cfg.extract.sample_size, 10);
        assert_eq!(cfg.log.filter, "info");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.dashboard.show_raw_text = true;
        cfg.log.filter = "cardvision_ingest=debug".to_string();
        save_config_to(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[extract]\nsample_size = \"many\"\n").unwrap();
        assert!(load_config_from(&p).is_err());
    }
}
