//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up realmdex defaults.

use crate::config::Config;
use anyhow::Result;
use realmdex::Region;
use std::path::PathBuf;

/// Values passed to `configure`
pub struct ConfigureArgs {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub output: Option<PathBuf>,
    pub token_region: Option<Region>,
    pub show: bool,
}

/// Handle the configure command
pub fn handle(args: ConfigureArgs) -> Result<()> {
    let mut config = Config::load()?;

    if args.show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, args) {
        config.save()?;
        println!("Configuration updated");
        if let Ok(path) = Config::config_path() {
            println!("Config saved to: {}", path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

/// Copy provided values into the config; returns whether anything changed
fn apply(config: &mut Config, args: ConfigureArgs) -> bool {
    let mut changed = false;

    if let Some(id) = args.client_id {
        config.client_id = Some(id);
        changed = true;
    }
    if let Some(secret) = args.client_secret {
        config.client_secret = Some(secret);
        changed = true;
    }
    if let Some(output) = args.output {
        config.output = Some(output);
        changed = true;
    }
    if let Some(region) = args.token_region {
        config.token_region = Some(region);
        changed = true;
    }

    changed
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.client_id {
        Some(id) => println!("Client ID: {}", id),
        None => println!("No client ID configured"),
    }
    match config.masked_secret() {
        Some(secret) => println!("Client secret: {}", secret),
        None => println!("No client secret configured"),
    }
    if let Some(output) = &config.output {
        println!("Output: {}", output.display());
    }
    if let Some(region) = config.token_region {
        println!("Token region: {}", region);
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: realmdex configure --client-id ID --client-secret SECRET");
    println!("   or: realmdex configure --output PATH --token-region us");
    println!("   or: realmdex configure --show");
}
