use std::fs;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;
use crate::store::{ConfigStore, StoreError};
use crate::ui_cli::{self, Cli, Command, Format};
use crate::winch::{self, AhcError, EngineOptions};

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings error: {0}")]
    Config(#[from] ConfigError),
    #[error("configuration store error: {0}")]
    Store(#[from] StoreError),
    #[error("unit conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("AHC calculation error: {0}")]
    Ahc(#[from] AhcError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Executes one CLI command against the loaded settings.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Command::List => {
            let store = ConfigStore::load(&config.store_path)?;
            ui_cli::print_names(store.iter());
        }
        Command::Show { name } => {
            let store = ConfigStore::load(&config.store_path)?;
            let inputs = store.require(name)?;
            println!("{}", serde_json::to_string_pretty(inputs)?);
        }
        Command::Calc {
            name,
            format,
            per_wrap,
            no_flange_limit,
            reserve,
        } => {
            let store = ConfigStore::load(&config.store_path)?;
            let inputs = store.require(name)?;
            let options = engine_options(config.engine, *no_flange_limit, *reserve);
            info!(name = %name, ?options, "running calculation");
            let report = winch::calculate(inputs, &options);
            match format {
                Format::Table => ui_cli::print_report(&report, &config.display, *per_wrap),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Ahc {
            height,
            period,
            offset,
        } => {
            let speed = winch::required_ahc_speed(*height, *period, *offset)?;
            ui_cli::print_ahc(&speed);
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind: QuantityKind = kind.parse()?;
            let result = conversion::convert(kind, *value, from.trim(), to.trim())?;
            println!("{result} {}", to.trim());
        }
        Command::Export { file } => {
            let store = ConfigStore::load(&config.store_path)?;
            fs::write(file, store.to_json()?)?;
            println!("Exported {} configurations to {}", store.len(), file.display());
        }
        Command::Import { file } => {
            let imported = ConfigStore::from_json(&fs::read_to_string(file)?)?;
            let mut store = ConfigStore::load(&config.store_path)?;
            let mut count = 0;
            for (name, inputs) in imported.iter() {
                store.insert(name, inputs.clone())?;
                count += 1;
            }
            store.save(&config.store_path)?;
            println!("Imported {count} configurations");
        }
        Command::Remove { name } => {
            let mut store = ConfigStore::load(&config.store_path)?;
            store.remove(name)?;
            store.save(&config.store_path)?;
            println!("Removed {name}");
        }
    }
    Ok(())
}

fn engine_options(base: EngineOptions, no_flange_limit: bool, reserve: Option<f64>) -> EngineOptions {
    EngineOptions {
        enforce_free_flange_limit: base.enforce_free_flange_limit && !no_flange_limit,
        reserve_length_m: reserve.unwrap_or(base.reserve_length_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let base = EngineOptions {
            enforce_free_flange_limit: true,
            reserve_length_m: 100.0,
        };
        let opts = engine_options(base, true, Some(300.0));
        assert!(!opts.enforce_free_flange_limit);
        assert_eq!(opts.reserve_length_m, 300.0);
        assert_eq!(engine_options(base, false, None), base);
    }
}
