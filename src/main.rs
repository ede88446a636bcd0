use clap::Parser;
use dealer_inventory::app::commands;
use dealer_inventory::config::cli::Cli;
use dealer_inventory::config::DEFAULT_CONFIG_FILE;
use dealer_inventory::utils::{logger, validation::Validate};
use dealer_inventory::{InventoryConfig, Result, TomlConfig};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level.as_deref(), config.log_format());
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    match commands::run(cli.command, &config, &mut stdout, &mut stderr).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_config(cli: &Cli) -> Result<InventoryConfig> {
    let file = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => TomlConfig::from_file(DEFAULT_CONFIG_FILE)?,
        None => TomlConfig::default(),
    };
    Ok(InventoryConfig::from_toml(file)?.with_api_base_url(cli.api_url.clone()))
}
