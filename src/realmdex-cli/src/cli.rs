//! CLI argument definitions for realmdex

use clap::{Parser, Subcommand};
use realmdex::{Namespace, Region};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "realmdex")]
#[command(about = "Regenerate the GRM realm name table from the Battle.net API", long_about = None)]
pub struct Cli {
    /// Log request-level detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every realm list and write the Lua table
    #[command(visible_alias = "g")]
    Generate {
        /// Output file (uses configured default, then GRM_Realms.lua)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Region used for the OAuth token request
        #[arg(long)]
        token_region: Option<Region>,

        /// File with CLIENT_ID / CLIENT_SECRET entries
        #[arg(long, default_value = "Client.env")]
        env_file: PathBuf,

        /// API client id (overrides CLIENT_ID)
        #[arg(long)]
        client_id: Option<String>,

        /// API client secret (overrides CLIENT_SECRET)
        #[arg(long)]
        client_secret: Option<String>,

        /// Only export these game versions (retail, classic, classic-era)
        #[arg(short, long = "namespace", value_delimiter = ',')]
        namespaces: Vec<Namespace>,

        /// Only export these regions (us, eu, kr, tw)
        #[arg(short, long = "region", value_delimiter = ',')]
        regions: Vec<Region>,

        /// Also write the table as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Attribution line for the file header
        #[arg(long)]
        attribution: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default API client id
        #[arg(long)]
        client_id: Option<String>,

        /// Set default API client secret
        #[arg(long)]
        client_secret: Option<String>,

        /// Set default output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Set default token region
        #[arg(long)]
        token_region: Option<Region>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// List the game versions, regions and locales a run covers
    Catalog,
}
