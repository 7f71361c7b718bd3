//! Compact token assembly: signing, rendering, and parsing.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::claims::Payload;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::key::PrivateKey;

/// A signed token, produced exactly once by [`Token::sign`],
/// [`Token::sign_with_header`], or [`Token::parse`], and immutable after
/// that.
///
/// `unsigned_token` is the exact two-segment string the signature covers.
/// For signed tokens it is computed from the header and payload; for parsed
/// tokens it is taken verbatim from the incoming encoded segments, so
/// verification never depends on JSON serialization being canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    header: Header,
    payload: Payload,
    signature: Vec<u8>,
    unsigned_token: String,
}

impl Token {
    /// Sign `payload` under the default header for `key`'s algorithm
    /// (`typ` set to "JWT").
    pub fn sign(key: &PrivateKey, payload: Payload) -> Result<Self> {
        Self::sign_with_header(key, Header::new(key.algorithm()), payload)
    }

    /// Sign `payload` under an explicit header.
    ///
    /// The header is taken as given; it is the caller's responsibility that
    /// `header.alg` matches the key when that matters downstream.
    pub fn sign_with_header(key: &PrivateKey, header: Header, payload: Payload) -> Result<Self> {
        let header_b64 = URL_SAFE_NO_PAD.encode(header.to_json()?);
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload.to_json()?);
        let unsigned_token = format!("{header_b64}.{payload_b64}");
        let signature = key.sign(unsigned_token.as_bytes())?;
        tracing::debug!(alg = %header.alg, "signed token");
        Ok(Self {
            header,
            payload,
            signature,
            unsigned_token,
        })
    }

    /// Parse a compact token string.
    ///
    /// Requires exactly three `.`-separated segments. Every failure in
    /// splitting, base64url decoding, or JSON decoding collapses into
    /// [`Error::BadToken`]; sub-causes are not distinguished.
    pub fn parse(compact: &str) -> Result<Self> {
        let mut segments = compact.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Error::BadToken);
        };

        let header_json = URL_SAFE_NO_PAD
            .decode(header_b64)
            .map_err(|_| Error::BadToken)?;
        let header_json = String::from_utf8(header_json).map_err(|_| Error::BadToken)?;
        let header = Header::from_json(&header_json).map_err(|_| Error::BadToken)?;

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| Error::BadToken)?;
        let payload_json = String::from_utf8(payload_json).map_err(|_| Error::BadToken)?;
        let payload = Payload::from_json(&payload_json).map_err(|_| Error::BadToken)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| Error::BadToken)?;

        Ok(Self {
            header,
            payload,
            signature,
            // The original encoded segments, not a re-serialization. This
            // is what the signature was computed over.
            unsigned_token: format!("{header_b64}.{payload_b64}"),
        })
    }

    /// Render the three-segment compact form.
    #[must_use]
    pub fn compact(&self) -> String {
        format!(
            "{}.{}",
            self.unsigned_token,
            URL_SAFE_NO_PAD.encode(&self.signature)
        )
    }

    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Raw signature bytes over [`Token::unsigned_token`].
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The two-segment signing input, `base64url(header).base64url(payload)`.
    #[must_use]
    pub fn unsigned_token(&self) -> &str {
        &self.unsigned_token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::claims::Claim;
    use crate::key::SymmetricSecret;

    fn hs256_key() -> PrivateKey {
        PrivateKey::Hs256(SymmetricSecret::new(b"test-secret".to_vec()))
    }

    #[test]
    fn sign_produces_three_segments_in_the_url_safe_alphabet() {
        let payload = Payload::new()
            .with_claim(Claim::SUB, "user1")
            .with_claim(Claim::EXP, "1700000000");
        let token = Token::sign(&hs256_key(), payload).unwrap();

        let compact = token.compact();
        assert_eq!(compact.split('.').count(), 3);
        assert!(!compact.contains('='));
        assert!(!compact.contains('+'));
        assert!(!compact.contains('/'));
        assert_eq!(token.header().alg, Algorithm::Hs256);
        assert_eq!(token.header().typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn unsigned_token_is_the_first_two_segments() {
        let token = Token::sign(&hs256_key(), Payload::new().with_claim("k", "v")).unwrap();
        let compact = token.compact();
        let dot = compact.rfind('.').unwrap();
        assert_eq!(token.unsigned_token(), &compact[..dot]);
    }

    #[test]
    fn parse_round_trips_a_signed_token() {
        let payload = Payload::new()
            .with_claim(Claim::SUB, "user1")
            .with_claim(Claim::EXP, "1700000000")
            .with_claim("role", "admin");
        let token = Token::sign(&hs256_key(), payload).unwrap();

        let parsed = Token::parse(&token.compact()).unwrap();
        assert_eq!(parsed, token);
        assert_eq!(parsed.compact(), token.compact());
    }

    #[test]
    fn parse_round_trips_duplicate_claims() {
        let payload = Payload::new()
            .with_claim(Claim::AUD, "api")
            .with_claim(Claim::AUD, "web");
        let token = Token::sign(&hs256_key(), payload).unwrap();

        let parsed = Token::parse(&token.compact()).unwrap();
        assert_eq!(parsed.payload().len(), 2);
        assert_eq!(parsed.payload().find_claim(&Claim::AUD), Some("web"));
        assert_eq!(parsed, token);
    }

    #[test]
    fn parse_keeps_original_segments_verbatim() {
        // Non-canonical JSON (extra whitespace) that re-serialization would
        // not reproduce.
        let header_b64 = URL_SAFE_NO_PAD.encode(r#"{ "alg" : "HS256" , "typ" : "JWT" }"#);
        let payload_b64 = URL_SAFE_NO_PAD.encode(r#"{ "sub" : "user1" }"#);
        let message = format!("{header_b64}.{payload_b64}");
        let signature = hs256_key().sign(message.as_bytes()).unwrap();
        let compact = format!("{message}.{}", URL_SAFE_NO_PAD.encode(&signature));

        let token = Token::parse(&compact).unwrap();
        assert_eq!(token.unsigned_token(), message);
        assert_eq!(token.compact(), compact);
        assert_eq!(token.payload().find_claim(&Claim::SUB), Some("user1"));
    }

    #[test]
    fn parse_requires_exactly_three_segments() {
        assert_eq!(Token::parse("abc.def"), Err(Error::BadToken));
        assert_eq!(Token::parse("a.b.c.d"), Err(Error::BadToken));
        assert_eq!(Token::parse(""), Err(Error::BadToken));
        assert_eq!(Token::parse("solo"), Err(Error::BadToken));
    }

    #[test]
    fn parse_collapses_sub_causes_into_bad_token() {
        let good = Token::sign(&hs256_key(), Payload::new().with_claim("k", "v")).unwrap();
        let compact = good.compact();
        let parts: Vec<&str> = compact.split('.').collect();

        // Padded base64 is not valid in compact form.
        let padded = format!("{}==.{}.{}", parts[0], parts[1], parts[2]);
        assert_eq!(Token::parse(&padded), Err(Error::BadToken));

        // Header segment that is not JSON.
        let not_json = URL_SAFE_NO_PAD.encode("hello");
        let broken = format!("{not_json}.{}.{}", parts[1], parts[2]);
        assert_eq!(Token::parse(&broken), Err(Error::BadToken));

        // Payload segment that is valid JSON but not an object.
        let array = URL_SAFE_NO_PAD.encode("[1,2,3]");
        let broken = format!("{}.{array}.{}", parts[0], parts[2]);
        assert_eq!(Token::parse(&broken), Err(Error::BadToken));

        // Header with an unrecognized algorithm also folds into BadToken
        // here; UnknownAlgorithm surfaces only from Header::from_json.
        let bad_alg = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let broken = format!("{bad_alg}.{}.{}", parts[1], parts[2]);
        assert_eq!(Token::parse(&broken), Err(Error::BadToken));
    }

    #[test]
    fn display_matches_compact() {
        let token = Token::sign(&hs256_key(), Payload::new().with_claim("k", "v")).unwrap();
        assert_eq!(token.to_string(), token.compact());
    }
}
