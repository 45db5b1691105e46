mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
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
        } => {
            commands::generate::handle(commands::generate::GenerateArgs {
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
            })?;
        }

        Commands::Configure {
            client_id,
            client_secret,
            output,
            token_region,
            show,
        } => {
            commands::configure::handle(commands::configure::ConfigureArgs {
                client_id,
                client_secret,
                output,
                token_region,
                show,
            })?;
        }

        Commands::Catalog => {
            commands::catalog::handle()?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "realmdex=debug,realmdex_cli=debug"
    } else {
        "realmdex=info,realmdex_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
