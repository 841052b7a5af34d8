use crate::cli::Cli;
use crate::error::EncodeError;
use crate::record::ConfigRecord;
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub record: ConfigRecord,
    pub hex: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self, EncodeError> {
        Self::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Result<Self, EncodeError> {
        let record = match cli.values.as_deref() {
            Some(vals) => ConfigRecord::try_from(vals)?,
            None => ConfigRecord::default(),
        };
        Ok(Config {
            output: PathBuf::from(cli.output),
            record,
            hex: cli.hex,
        })
    }
}
