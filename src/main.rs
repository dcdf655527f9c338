//! SIA to graph translator

use clap::Parser;
use sia2graph::{Config, Result, cli, init_logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let (config, source) = if let Some(config_path) = &args.config {
        (Config::from_file(config_path)?, Some(config_path.clone()))
    } else {
        Config::load()?
    };

    init_logging(args.log_level.as_deref().unwrap_or(&config.logging.level));

    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)?;

    Ok(())
}
