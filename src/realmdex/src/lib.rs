//! # realmdex
//!
//! Builds the realm name table used by the GRM addon.
//!
//! This library provides functionality to:
//! - Exchange Battle.net client credentials for an access token
//! - Fetch the realm index for every game version, region and locale
//! - Filter out internal realm entries and normalize realm names
//! - Render the nested table as a Lua file with a lookup accessor
//!
//! ## Example
//!
//! ```no_run
//! use realmdex::{BattleNetClient, Credentials, RunOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("client-id", "client-secret")?;
//! let client = BattleNetClient::new();
//!
//! let summary = realmdex::generate(&credentials, &client, &client, &RunOptions::default())?;
//! println!("{} names written to {}", summary.names_written, summary.output.display());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod catalog;
pub mod client;
pub mod error;
pub mod export;
pub mod name;
pub mod run;
pub mod sink;

#[cfg(test)]
mod mock;

#[doc(inline)]
pub use aggregate::{build_for_region, RealmNameList, RegionRealms, RunContext};
#[doc(inline)]
pub use catalog::{Locale, Namespace, Region};
#[doc(inline)]
pub use client::{AccessToken, BattleNetClient, Credentials, RawRealm, RealmSource, TokenProvider};
#[doc(inline)]
pub use error::{CatalogError, RealmError};
#[doc(inline)]
pub use export::{ExportBuilder, ExportDocument, NamespaceSection};
#[doc(inline)]
pub use name::{filter_name, is_valid, normalize, RealmName};
#[doc(inline)]
pub use run::{generate, RunOptions, RunSummary};
#[doc(inline)]
pub use sink::{write_export, DEFAULT_ATTRIBUTION, DEFAULT_OUTPUT};
