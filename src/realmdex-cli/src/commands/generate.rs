//! Generate command handler
//!
//! Resolves credentials and settings, then runs a full export.

use crate::config::Config;
use anyhow::{Context, Result};
use realmdex::{BattleNetClient, Credentials, Namespace, Region, RunOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Values passed to `generate`
pub struct GenerateArgs {
    pub output: Option<PathBuf>,
    pub token_region: Option<Region>,
    pub env_file: PathBuf,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub namespaces: Vec<Namespace>,
    pub regions: Vec<Region>,
    pub json: Option<PathBuf>,
    pub attribution: Option<String>,
    pub timeout: u64,
}

/// Handle `generate`
pub fn handle(args: GenerateArgs) -> Result<()> {
    let GenerateArgs {
        output,
        token_region,
        env_file,
        client_id,
        client_secret,
        namespaces,
        regions,
        json,
        attribution,
        timeout,
    } = args;

    load_env_file(&env_file)?;
    let config = Config::load()?;

    let credentials = resolve_credentials(client_id, client_secret, &config, |key| {
        std::env::var(key).ok()
    })?;
    tracing::debug!("Using client id {}", credentials.client_id());

    let settings = Settings {
        output,
        token_region,
        namespaces,
        regions,
        attribution,
    };
    let options = run_options(settings, &config);

    let client = BattleNetClient::with_timeout(Duration::from_secs(timeout));
    let summary = realmdex::generate(&credentials, &client, &client, &options)
        .context("Realm export failed")?;

    println!(
        "{} has been created ({} realms fetched, {} names written).",
        summary.output.display(),
        summary.realms_seen,
        summary.names_written
    );

    if let Some(path) = json {
        let contents = serde_json::to_string_pretty(&summary.document.to_json())?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("JSON written to {}", path.display());
    }

    Ok(())
}

/// Run settings taken from the command line
struct Settings {
    output: Option<PathBuf>,
    token_region: Option<Region>,
    namespaces: Vec<Namespace>,
    regions: Vec<Region>,
    attribution: Option<String>,
}

/// Merge command line settings over config over built-in defaults
fn run_options(settings: Settings, config: &Config) -> RunOptions {
    let defaults = RunOptions::default();
    RunOptions {
        output: settings
            .output
            .or_else(|| config.output.clone())
            .unwrap_or(defaults.output),
        token_region: settings
            .token_region
            .or(config.token_region)
            .unwrap_or(defaults.token_region),
        namespaces: if settings.namespaces.is_empty() {
            defaults.namespaces
        } else {
            settings.namespaces
        },
        regions: if settings.regions.is_empty() {
            defaults.regions
        } else {
            settings.regions
        },
        attribution: settings.attribution.unwrap_or(defaults.attribution),
        date: None,
    }
}

/// Load KEY=VALUE pairs into the environment; existing variables win
fn load_env_file(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!("No env file at {}", path.display());
        return Ok(());
    }
    dotenvy::from_path(path)
        .with_context(|| format!("Failed to load env file {}", path.display()))?;
    tracing::debug!("Loaded {}", path.display());
    Ok(())
}

/// Pick credentials: flag, then environment, then config file
fn resolve_credentials<F>(
    client_id: Option<String>,
    client_secret: Option<String>,
    config: &Config,
    env: F,
) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let id = client_id
        .or_else(|| env(CLIENT_ID_VAR))
        .or_else(|| config.client_id.clone())
        .unwrap_or_default();
    let secret = client_secret
        .or_else(|| env(CLIENT_SECRET_VAR))
        .or_else(|| config.client_secret.clone())
        .unwrap_or_default();

    Credentials::new(id, secret).with_context(|| {
        format!(
            "Set {} and {} (environment, env file, or `realmdex configure`)",
            CLIENT_ID_VAR, CLIENT_SECRET_VAR
        )
    })
}
