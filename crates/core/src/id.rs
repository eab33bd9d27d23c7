//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// The remote catalog sends ids as integers, but nothing guarantees that, so
/// the id is kept in its textual form. `7` and `"7"` decode to the same id;
/// `"07"` and `" 7"` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Taken verbatim; surrounding whitespace is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if s.trim() != s {
            return Err(DomainError::invalid_id(format!("ProductId: {s:?} has surrounding whitespace")));
        }
        // Ids end up as a single path segment against the remote API.
        if s.contains('/') {
            return Err(DomainError::invalid_id(format!("ProductId: {s:?} contains '/'")));
        }
        Ok(Self(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawProductId::deserialize(deserializer)? {
            RawProductId::Unsigned(n) => Ok(Self::from(n)),
            RawProductId::Signed(n) => Ok(Self(n.to_string())),
            RawProductId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
