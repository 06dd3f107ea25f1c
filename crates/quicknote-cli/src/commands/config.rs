use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ConfigCommands;
use crate::commands::common::AppContext;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub timestamp_format: String,
}

pub fn effective_config(ctx: &AppContext) -> EffectiveConfig {
    EffectiveConfig {
        config_path: ctx.config_path.clone(),
        data_dir: ctx.data_dir.clone(),
        timestamp_format: ctx.config.timestamp_format().to_string(),
    }
}

pub fn run_config(command: ConfigCommands, ctx: &AppContext) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&effective_config(ctx))?);
        }
        ConfigCommands::Path => println!("{}", ctx.config_path.display()),
        ConfigCommands::Set {
            data_dir,
            timestamp_format,
        } => {
            if data_dir.is_none() && timestamp_format.is_none() {
                return Err(CliError::Config(
                    "Nothing to set. Pass --data-dir and/or --timestamp-format.".to_string(),
                ));
            }

            let mut config = ctx.config.clone();
            if data_dir.is_some() {
                config.data_dir = data_dir;
            }
            if timestamp_format.is_some() {
                config.timestamp_format = timestamp_format;
            }
            config.save_to_path(&ctx.config_path)?;
            println!("{}", ctx.config_path.display());
        }
    }

    Ok(())
}
