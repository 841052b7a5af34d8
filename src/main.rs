use std::process::ExitCode;

use anyhow::{Context, Result};
use config_bin::{EncodeError, config::Config, encoder, hexdump};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = Config::from_cli().context("invalid config values")?;

    for (pos, (name, value)) in config.record.fields().enumerate() {
        tracing::debug!(position = pos + 1, field = name, value, "encoding field");
    }

    encoder::write_record(&config.record, &config.output)
        .with_context(|| format!("could not write config to {}", config.output.display()))?;
    tracing::info!(path = %config.output.display(), "wrote config record");

    if config.hex {
        println!("{}", hexdump::hex_dump(&config.record.to_bytes()));
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let contract = e
                .downcast_ref::<EncodeError>()
                .is_some_and(EncodeError::is_contract_violation);
            if contract {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
