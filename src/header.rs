//! The JOSE header carried in a token's first segment.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

/// Token header.
///
/// Serialized member order is fixed: `alg`, then `typ` if present, then
/// `kid` if present. Absent options are omitted entirely, never emitted as
/// null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signing algorithm.
    pub alg: Algorithm,
    /// Token type, conventionally "JWT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Key identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

// Parse-side shape: `alg` stays a string so an unrecognized name surfaces
// as UnknownAlgorithm rather than a generic deserialization failure.
// Unknown members are ignored by default.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
    typ: Option<String>,
    kid: Option<String>,
}

impl Header {
    /// Default header for `alg`: `typ` is "JWT", no key id.
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg,
            typ: Some("JWT".to_string()),
            kid: None,
        }
    }

    /// Attach a key identifier.
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Serialize as JSON with members in `alg`, `typ`, `kid` order.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| Error::BadHeader)
    }

    /// Parse a header from JSON.
    ///
    /// `alg` is required and mapped through the algorithm name table;
    /// a missing or non-string `alg` is [`Error::BadHeader`], an
    /// unrecognized name is [`Error::UnknownAlgorithm`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawHeader = serde_json::from_str(json).map_err(|_| Error::BadHeader)?;
        Ok(Self {
            alg: Algorithm::from_name(&raw.alg)?,
            typ: raw.typ,
            kid: raw.kid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_order_is_fixed_and_absent_options_are_omitted() {
        let header = Header::new(Algorithm::Hs256);
        assert_eq!(header.to_json().unwrap(), r#"{"alg":"HS256","typ":"JWT"}"#);

        let header = Header::new(Algorithm::Rs256).with_key_id("key-1");
        assert_eq!(
            header.to_json().unwrap(),
            r#"{"alg":"RS256","typ":"JWT","kid":"key-1"}"#
        );

        let bare = Header {
            alg: Algorithm::Es256,
            typ: None,
            kid: None,
        };
        assert_eq!(bare.to_json().unwrap(), r#"{"alg":"ES256"}"#);
    }

    #[test]
    fn parse_requires_alg() {
        assert_eq!(
            Header::from_json(r#"{"typ":"JWT"}"#),
            Err(Error::BadHeader)
        );
        assert_eq!(Header::from_json(r#"{"alg":42}"#), Err(Error::BadHeader));
        assert_eq!(Header::from_json("[]"), Err(Error::BadHeader));
        assert_eq!(Header::from_json("not json"), Err(Error::BadHeader));
    }

    #[test]
    fn parse_rejects_unrecognized_algorithm() {
        assert_eq!(
            Header::from_json(r#"{"alg":"PS256"}"#),
            Err(Error::UnknownAlgorithm("PS256".to_string()))
        );
    }

    #[test]
    fn parse_ignores_unknown_members() {
        let header =
            Header::from_json(r#"{"alg":"ES256","typ":"JWT","cty":"JWT","x5t":"abc"}"#).unwrap();
        assert_eq!(header.alg, Algorithm::Es256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        assert_eq!(header.kid, None);
    }

    #[test]
    fn parse_round_trips() {
        let header = Header::new(Algorithm::Hs512).with_key_id("rotation-7");
        let parsed = Header::from_json(&header.to_json().unwrap()).unwrap();
        assert_eq!(parsed, header);
    }
}
