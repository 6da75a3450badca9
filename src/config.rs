use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::units::*;
use crate::winch::EngineOptions;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_STORE_PATH: &str = "winch_configs.json";

/// Units used when printing results. Calculations are always done in SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    /// Drum and layer diameters, free flange
    pub drum_length: LengthUnit,
    /// Cable lengths and depths
    pub cable_length: LengthUnit,
    pub speed: VelocityUnit,
    pub pressure: PressureUnit,
    pub force: ForceUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            drum_length: LengthUnit::Inch,
            cable_length: LengthUnit::Meter,
            speed: VelocityUnit::MeterPerMinute,
            pressure: PressureUnit::Psi,
            force: ForceUnit::KilogramForce,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the named winch configurations
    pub store_path: PathBuf,
    pub engine: EngineOptions,
    pub display: DisplayUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            engine: EngineOptions::default(),
            display: DisplayUnits::default(),
        }
    }
}

/// Errors while loading or saving the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads the settings at `path`, writing the defaults there first if the file is missing.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = load_or_default(&path).expect("load");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        assert_eq!(load_or_default(&path).expect("reload"), cfg);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: Config = toml::from_str(
            "[engine]\nenforce_free_flange_limit = false\nreserve_length_m = 300.0\n",
        )
        .expect("parse");
        assert!(!cfg.engine.enforce_free_flange_limit);
        assert_eq!(cfg.engine.reserve_length_m, 300.0);
        assert_eq!(cfg.display, DisplayUnits::default());
        assert_eq!(cfg.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }
}
