//! Error types shared by every stage of a realm export run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing catalog identifiers (regions, locales, namespaces)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),
}

/// Errors that abort a realm export run
#[derive(Error, Debug)]
pub enum RealmError {
    #[error("Missing API credentials: {0} is empty")]
    MissingCredentials(&'static str),

    #[error("Authentication failed ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("Realm index request failed for {namespace} {locale} ({status}): {body}")]
    Fetch {
        status: u16,
        body: String,
        namespace: String,
        locale: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RealmError {
    /// HTTP status carried by the error, if it came from an API response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
