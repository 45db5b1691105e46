//! In-memory token provider and realm source for tests.

use crate::catalog::{Locale, Namespace, Region};
use crate::client::{AccessToken, Credentials, RawRealm, RealmSource, TokenProvider};
use crate::error::RealmError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

type Key = (Namespace, Region, Locale);

/// Realm source serving fixed payloads and recording every request
#[derive(Default)]
pub struct MockRealmSource {
    payloads: HashMap<Key, Vec<RawRealm>>,
    failing: Option<Key>,
    pub calls: RefCell<Vec<Key>>,
}

impl MockRealmSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these names for one tuple; unlisted tuples return no realms
    pub fn with_names(mut self, namespace: Namespace, region: Region, locale: Locale, names: &[&str]) -> Self {
        self.payloads.insert(
            (namespace, region, locale),
            names.iter().map(|n| RawRealm::named(n)).collect(),
        );
        self
    }

    pub fn with_realms(mut self, namespace: Namespace, region: Region, locale: Locale, realms: Vec<RawRealm>) -> Self {
        self.payloads.insert((namespace, region, locale), realms);
        self
    }

    /// Answer this tuple with a 503
    pub fn failing_at(mut self, namespace: Namespace, region: Region, locale: Locale) -> Self {
        self.failing = Some((namespace, region, locale));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl RealmSource for MockRealmSource {
    fn fetch_realms(
        &self,
        _token: &AccessToken,
        region: Region,
        locale: Locale,
        namespace: Namespace,
    ) -> Result<Vec<RawRealm>, RealmError> {
        let key = (namespace, region, locale);
        self.calls.borrow_mut().push(key);

        if self.failing == Some(key) {
            return Err(RealmError::Fetch {
                status: 503,
                body: "unavailable".to_string(),
                namespace: namespace.api_namespace(region),
                locale: locale.tag().to_string(),
            });
        }
        Ok(self.payloads.get(&key).cloned().unwrap_or_default())
    }
}

/// Token provider that either always succeeds or always rejects
pub struct MockTokenProvider {
    reject_with: Option<u16>,
    pub requests: Cell<usize>,
}

impl MockTokenProvider {
    pub fn accepting() -> Self {
        Self {
            reject_with: None,
            requests: Cell::new(0),
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            requests: Cell::new(0),
        }
    }
}

impl TokenProvider for MockTokenProvider {
    fn access_token(&self, _credentials: &Credentials, _region: Region) -> Result<AccessToken, RealmError> {
        self.requests.set(self.requests.get() + 1);
        match self.reject_with {
            Some(status) => Err(RealmError::Authentication {
                status,
                body: r#"{"error":"invalid_client"}"#.to_string(),
            }),
            None => Ok(AccessToken::new("mock-token")),
        }
    }
}
