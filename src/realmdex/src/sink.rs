//! Writing the generated file.

use crate::error::RealmError;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// File name the addon loads
pub const DEFAULT_OUTPUT: &str = "GRM_Realms.lua";

/// Attribution line written below the date stamp
pub const DEFAULT_ATTRIBUTION: &str =
    "Author: Aaron Topping (GenomeWhisperer) - Using custom written program realmdex";

/// Two-line comment header followed by a blank line
pub fn header(attribution: &str, date: NaiveDate) -> String {
    format!(
        "-- Realms updated on: {} UTC\n-- {}\n\n",
        date.format("%Y-%m-%d"),
        attribution
    )
}

/// Write header and content, replacing any existing file
pub fn write_export(path: &Path, content: &str, attribution: &str, date: NaiveDate) -> Result<(), RealmError> {
    let io_err = |source| RealmError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(header(attribution, date).as_bytes())
        .map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;

    tracing::info!("{} has been created", path.display());
    Ok(())
}
