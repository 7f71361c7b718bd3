//! Error types for token construction, parsing, and verification.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building, parsing, or verifying a
/// token.
///
/// Parsing deliberately collapses its sub-causes: a compact string that
/// fails segment splitting, base64url decoding, or JSON decoding is always
/// reported as [`Error::BadToken`]. Verification failures stay specific so
/// callers can log why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Compact token is structurally malformed: wrong segment count,
    /// invalid base64url, or invalid JSON in the header or payload segment.
    #[error("invalid compact token")]
    BadToken,

    /// Payload JSON is not an object, or an `exp`/`iat` value cannot be
    /// represented as an integer.
    #[error("invalid payload")]
    BadPayload,

    /// Header JSON is malformed or carries no usable `alg` member.
    #[error("invalid header")]
    BadHeader,

    /// Algorithm name is not one of RS256, ES256, HS256, HS512.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The signing primitive rejected the operation.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Header `typ` is not exactly "JWT".
    #[error("token type is not JWT")]
    TypeMismatch,

    /// The `exp` claim is in the past, or is present but not an integer.
    #[error("token has expired")]
    Expired,

    /// The token's claimed algorithm does not match the verification key.
    #[error("token algorithm does not match verification key")]
    AlgorithmMismatch,

    /// The signature does not verify against the signing input.
    #[error("signature verification failed")]
    SignatureInvalid,
}
