//! Claim names and the order-preserving payload.

use std::borrow::Cow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// A claim name.
///
/// Any string is a valid claim; the registered names from RFC 7519 and
/// OpenID Connect are predefined as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim(Cow<'static, str>);

impl Claim {
    pub const ISS: Self = Self::registered("iss");
    pub const SUB: Self = Self::registered("sub");
    pub const AUD: Self = Self::registered("aud");
    pub const EXP: Self = Self::registered("exp");
    pub const NBF: Self = Self::registered("nbf");
    pub const IAT: Self = Self::registered("iat");
    pub const JTI: Self = Self::registered("jti");
    pub const TYP: Self = Self::registered("typ");
    pub const CTYP: Self = Self::registered("ctyp");
    pub const ALG: Self = Self::registered("alg");
    pub const AUTH_TIME: Self = Self::registered("auth_time");
    pub const NONCE: Self = Self::registered("nonce");
    pub const ACR: Self = Self::registered("acr");
    pub const AMR: Self = Self::registered("amr");
    pub const AZP: Self = Self::registered("azp");

    const fn registered(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// A custom claim name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Claim {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Claim {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered claim set, stored as `(Claim, String)` pairs.
///
/// Insertion order is preserved and observable, and duplicate claim names
/// are permitted; [`Payload::find_claim`] returns the most recently added
/// entry. This is deliberately not a uniqueness-enforcing map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Vec<(Claim, String)>);

impl Payload {
    /// An empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a claim, builder style.
    #[must_use]
    pub fn with_claim(mut self, claim: impl Into<Claim>, value: impl Into<String>) -> Self {
        self.add_claim(claim, value);
        self
    }

    /// Append a claim.
    pub fn add_claim(&mut self, claim: impl Into<Claim>, value: impl Into<String>) {
        self.0.push((claim.into(), value.into()));
    }

    /// The most recently added value for `claim`, if any.
    #[must_use]
    pub fn find_claim(&self, claim: &Claim) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(name, _)| name == claim)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claims in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Claim, &str)> {
        self.0.iter().map(|(claim, value)| (claim, value.as_str()))
    }

    /// Emit the claim set as a JSON object, members in insertion order.
    ///
    /// Members named exactly `exp` or `iat` are re-parsed as integers and
    /// emitted as JSON numbers ([`Error::BadPayload`] when that fails).
    /// Every other member is emitted as a JSON string, even when the stored
    /// text looks like a number, boolean, or JSON structure. The round trip
    /// is lossy by design.
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::with_capacity(2 + 16 * self.0.len());
        let mut ser = serde_json::Serializer::new(&mut out);
        // Streaming the members lets duplicate claim names survive into the
        // emitted object.
        let mut map = ser
            .serialize_map(Some(self.0.len()))
            .map_err(|_| Error::BadPayload)?;
        for (claim, value) in &self.0 {
            match claim.as_str() {
                "exp" | "iat" => {
                    let seconds: i64 = value.parse().map_err(|_| Error::BadPayload)?;
                    map.serialize_entry(claim.as_str(), &seconds)
                        .map_err(|_| Error::BadPayload)?;
                }
                name => map
                    .serialize_entry(name, value)
                    .map_err(|_| Error::BadPayload)?,
            }
        }
        map.end().map_err(|_| Error::BadPayload)?;
        String::from_utf8(out).map_err(|_| Error::BadPayload)
    }

    /// Parse a JSON object into a claim set, preserving member order.
    ///
    /// Members stream straight into the pair sequence, so duplicate claim
    /// names survive the parse. Values are coerced to strings: a JSON
    /// string is stored verbatim, a JSON integer as its decimal text, and
    /// anything else as its compact JSON text. A top-level value that is
    /// not an object is [`Error::BadPayload`].
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        let payload = de
            .deserialize_map(MemberVisitor)
            .map_err(|_| Error::BadPayload)?;
        de.end().map_err(|_| Error::BadPayload)?;
        Ok(payload)
    }
}

// Streams object members into pairs one by one. Deserializing through a
// serde_json map value would enforce key uniqueness, which this model
// deliberately does not.
struct MemberVisitor;

impl<'de> Visitor<'de> for MemberVisitor {
    type Value = Payload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Payload, A::Error> {
        let mut payload = Payload::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            let stored = match value {
                Value::String(text) => text,
                other => other.to_string(),
            };
            payload.add_claim(name, stored);
        }
        Ok(payload)
    }
}

impl FromIterator<(Claim, String)> for Payload {
    fn from_iter<I: IntoIterator<Item = (Claim, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Payload {
    type Item = (Claim, String);
    type IntoIter = std::vec::IntoIter<(Claim, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
