//! Realm name validation and normalization.
//!
//! The realm index mixes real realm names with internal entries (test
//! realms, status tags). An entry is treated as internal when any of its
//! whitespace-separated words is an all-caps alphabetic token longer than two
//! characters, since no player-facing realm name contains one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

/// Parenthetical suffixes such as `(US)` or `(Portuguese)`, with leading whitespace
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)").expect("parenthetical pattern is valid"));

/// Tokens up to this many characters are never treated as tags
const MAX_ALLOWED_CAPS_LEN: usize = 2;

/// A cleaned realm name, held as a quoted literal ready to embed in Lua
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RealmName(String);

impl RealmName {
    /// Wrap already-cleaned text as a quoted literal
    pub fn from_inner(inner: &str) -> Self {
        let mut literal = String::with_capacity(inner.len() + 2);
        literal.push('"');
        for c in inner.chars() {
            if c == '"' || c == '\\' {
                literal.push('\\');
            }
            literal.push(c);
        }
        literal.push('"');
        RealmName(literal)
    }

    /// The quoted literal, e.g. `"Area 52"`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unquoted name text
    pub fn inner(&self) -> String {
        let body = &self.0[1..self.0.len() - 1];
        let mut out = String::with_capacity(body.len());
        let mut escaped = false;
        for c in body.chars() {
            if escaped || c != '\\' {
                out.push(c);
                escaped = false;
            } else {
                escaped = true;
            }
        }
        out
    }
}

impl std::fmt::Display for RealmName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RealmName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner())
    }
}

/// Whether a word looks like a tag rather than part of a realm name
fn is_tag_token(token: &str) -> bool {
    token.chars().count() > MAX_ALLOWED_CAPS_LEN
        && token.chars().all(char::is_alphabetic)
        && token.chars().any(char::is_uppercase)
        && !token.chars().any(char::is_lowercase)
}

/// Decide whether a raw realm index name is a real realm name
pub fn is_valid(name: Option<&str>) -> bool {
    match name {
        Some(name) if !name.is_empty() => !name.split_whitespace().any(is_tag_token),
        _ => false,
    }
}

/// Strip parenthetical suffixes, trim, and quote
///
/// A name that is empty after stripping still yields an empty literal.
pub fn normalize(name: &str) -> RealmName {
    let stripped = PARENTHETICAL.replace_all(name, "");
    RealmName::from_inner(stripped.trim())
}

/// Re-apply normalization to an existing name
pub fn normalize_quoted(name: &RealmName) -> RealmName {
    normalize(&name.inner())
}

/// Validate and normalize in one step
pub fn filter_name(name: Option<&str>) -> Option<RealmName> {
    if is_valid(name) {
        name.map(normalize)
    } else {
        tracing::debug!("Skipping realm entry {:?}", name);
        None
    }
}
