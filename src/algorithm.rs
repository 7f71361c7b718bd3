//! Signing algorithm tags and the name table used by header parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The closed set of signing algorithms this crate supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// RSA PKCS#1 v1.5 over SHA-256.
    #[serde(rename = "RS256")]
    Rs256,
    /// ECDSA over P-256 with SHA-256, fixed-width `r || s` signatures.
    #[serde(rename = "ES256")]
    Es256,
    /// HMAC-SHA256.
    #[serde(rename = "HS256")]
    Hs256,
    /// HMAC-SHA512.
    #[serde(rename = "HS512")]
    Hs512,
}

impl Algorithm {
    /// Map an RFC 7518 algorithm name to its tag.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "RS256" => Ok(Self::Rs256),
            "ES256" => Ok(Self::Es256),
            "HS256" => Ok(Self::Hs256),
            "HS512" => Ok(Self::Hs512),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }

    /// The RFC 7518 name for this algorithm.
    #[must_use]
    pub fn as_name(self) -> &'static str {
        match self {
            Self::Rs256 => "RS256",
            Self::Es256 => "ES256",
            Self::Hs256 => "HS256",
            Self::Hs512 => "HS512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
