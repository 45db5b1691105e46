//! One complete export: token, fetch, render, write.

use crate::aggregate::RunContext;
use crate::catalog::{Namespace, Region};
use crate::client::{Credentials, RealmSource, TokenProvider};
use crate::error::RealmError;
use crate::export::{ExportBuilder, ExportDocument};
use crate::sink::{self, DEFAULT_ATTRIBUTION, DEFAULT_OUTPUT};
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

/// Settings for [`generate`]
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub token_region: Region,
    pub namespaces: Vec<Namespace>,
    pub regions: Vec<Region>,
    pub attribution: String,
    /// Date stamped into the header; today (UTC) when unset
    pub date: Option<NaiveDate>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            token_region: Region::default(),
            namespaces: Namespace::ALL.to_vec(),
            regions: Region::EXPORTED.to_vec(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            date: None,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct RunSummary {
    pub realms_seen: usize,
    pub names_written: usize,
    pub output: PathBuf,
    pub document: ExportDocument,
}

/// Acquire a token, build the document and write it
///
/// Any failure aborts before the output file is touched.
pub fn generate<T, S>(
    credentials: &Credentials,
    tokens: &T,
    source: &S,
    options: &RunOptions,
) -> Result<RunSummary, RealmError>
where
    T: TokenProvider + ?Sized,
    S: RealmSource + ?Sized,
{
    tracing::info!("Requesting access token ({})", options.token_region);
    let token = tokens.access_token(credentials, options.token_region)?;
    let mut ctx = RunContext::new(token);

    let document = ExportBuilder::new(source)
        .namespaces(&options.namespaces)
        .regions(&options.regions)
        .build(&mut ctx)?;

    let date = options.date.unwrap_or_else(|| Utc::now().date_naive());
    sink::write_export(&options.output, &document.render(), &options.attribution, date)?;

    tracing::info!(
        "Processed {} realms, wrote {} names",
        ctx.realms_seen(),
        document.total_names()
    );

    Ok(RunSummary {
        realms_seen: ctx.realms_seen(),
        names_written: document.total_names(),
        output: options.output.clone(),
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Locale;
    use crate::mock::{MockRealmSource, MockTokenProvider};
    use std::fs;

    fn credentials() -> Credentials {
        Credentials::new("id", "secret").unwrap()
    }

    fn options(dir: &std::path::Path) -> RunOptions {
        RunOptions {
            output: dir.join("GRM_Realms.lua"),
            date: NaiveDate::from_ymd_opt(2025, 1, 2),
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_failed_token_prevents_fetching() {
        let temp_dir = tempfile::tempdir().unwrap();
        let opts = options(temp_dir.path());
        let tokens = MockTokenProvider::rejecting(401);
        let source = MockRealmSource::new();

        let err = generate(&credentials(), &tokens, &source, &opts).unwrap_err();
        assert!(matches!(err, RealmError::Authentication { status: 401, .. }));
        assert_eq!(source.call_count(), 0);
        assert!(!opts.output.exists());
    }

    #[test]
    fn test_fetch_failure_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let opts = options(temp_dir.path());
        let source = MockRealmSource::new().failing_at(Namespace::ClassicEra, Region::Tw, Locale::ItIt);

        let result = generate(&credentials(), &MockTokenProvider::accepting(), &source, &opts);
        assert!(result.is_err());
        assert!(!opts.output.exists());
    }

    #[test]
    fn test_full_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let opts = options(temp_dir.path());
        let tokens = MockTokenProvider::accepting();
        let source = MockRealmSource::new()
            .with_names(
                Namespace::Retail,
                Region::Us,
                Locale::EnUs,
                &["Stormrage (US)", "TEST REALM", "Area 52"],
            )
            .with_names(Namespace::ClassicEra, Region::Eu, Locale::DeDe, &["Everlook"]);

        let summary = generate(&credentials(), &tokens, &source, &opts).unwrap();

        assert_eq!(tokens.requests.get(), 1);
        assert_eq!(source.call_count(), 3 * 4 * Locale::ALL.len());
        assert_eq!(summary.realms_seen, 4);
        assert_eq!(summary.names_written, 3);

        let written = fs::read_to_string(&summary.output).unwrap();
        assert!(written.starts_with("-- Realms updated on: 2025-01-02 UTC\n"));
        assert!(written.contains("Realms.us.enUS = {\n            \"Area 52\", \"Stormrage\"\n        }"));
        assert!(written.contains("Realms.eu.deDE = {\n            \"Everlook\"\n        }"));
        assert!(written.contains("elseif GRM.GameVersion() == \"CATA\" then"));
    }
}
