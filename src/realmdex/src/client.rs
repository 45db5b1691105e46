//! Battle.net API access: OAuth token exchange and the realm index.
//!
//! The two traits are the seams the rest of the crate is written against;
//! [`BattleNetClient`] is the blocking HTTP implementation.

use crate::catalog::{Locale, Namespace, Region, REALM_INDEX_PATH};
use crate::error::RealmError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API client credentials
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self, RealmError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() {
            return Err(RealmError::MissingCredentials("client id"));
        }
        if client_secret.trim().is_empty() {
            return Err(RealmError::MissingCredentials("client secret"));
        }
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Value of the `Authorization` header for the token request
    fn basic_auth(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token returned by the OAuth endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// One entry of the realm index. Only the name is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRealm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl RawRealm {
    /// Entry with only a name, as used by fixtures and mocks
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            id: None,
            slug: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RealmIndex {
    realms: Vec<RawRealm>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges client credentials for an access token
pub trait TokenProvider {
    fn access_token(&self, credentials: &Credentials, region: Region) -> Result<AccessToken, RealmError>;
}

/// Fetches the raw realm list for one namespace, region and locale
pub trait RealmSource {
    fn fetch_realms(
        &self,
        token: &AccessToken,
        region: Region,
        locale: Locale,
        namespace: Namespace,
    ) -> Result<Vec<RawRealm>, RealmError>;
}

/// Blocking Battle.net client
pub struct BattleNetClient {
    agent: ureq::Agent,
    token_url: Option<String>,
    api_base: Option<String>,
}

impl BattleNetClient {
    /// Client with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("realmdex/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            token_url: None,
            api_base: None,
        }
    }

    /// Send every request to fixed endpoints instead of the regional hosts
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self.api_base = Some(api_base.into());
        self
    }

    fn token_url(&self, region: Region) -> String {
        self.token_url.clone().unwrap_or_else(|| region.oauth_url())
    }

    fn realm_index_url(&self, region: Region) -> String {
        match &self.api_base {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), REALM_INDEX_PATH),
            None => region.realm_index_url(),
        }
    }
}

impl Default for BattleNetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for BattleNetClient {
    fn access_token(&self, credentials: &Credentials, region: Region) -> Result<AccessToken, RealmError> {
        let url = self.token_url(region);
        tracing::debug!("Requesting access token from {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &credentials.basic_auth())
            .send_form(&[("grant_type", "client_credentials")]);

        match response {
            Ok(resp) => {
                let token: TokenResponse = resp
                    .into_json()
                    .map_err(|e| RealmError::Decode(e.to_string()))?;
                Ok(AccessToken(token.access_token))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(RealmError::Authentication { status, body })
            }
            Err(e) => Err(RealmError::Transport(e.to_string())),
        }
    }
}

impl RealmSource for BattleNetClient {
    fn fetch_realms(
        &self,
        token: &AccessToken,
        region: Region,
        locale: Locale,
        namespace: Namespace,
    ) -> Result<Vec<RawRealm>, RealmError> {
        let url = self.realm_index_url(region);
        let api_namespace = namespace.api_namespace(region);
        tracing::debug!("GET {} namespace={} locale={}", url, api_namespace, locale);

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", token.secret()))
            .query("namespace", &api_namespace)
            .query("locale", locale.tag())
            .call();

        match response {
            Ok(resp) => {
                let index: RealmIndex = resp
                    .into_json()
                    .map_err(|e| RealmError::Decode(e.to_string()))?;
                Ok(index.realms)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(RealmError::Fetch {
                    status,
                    body,
                    namespace: api_namespace,
                    locale: locale.tag().to_string(),
                })
            }
            Err(e) => Err(RealmError::Transport(e.to_string())),
        }
    }
}
