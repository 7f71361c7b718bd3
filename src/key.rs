//! Key material for signing and verification.
//!
//! The caller supplies ready-made key material using the `rsa` and `p256`
//! key types directly; this crate never parses, generates, or stores keys.
//! The active variant of a key fixes the token algorithm, and dispatch to
//! the primitives is a pattern match, never runtime type inspection.

use std::fmt;

use p256::ecdsa::{SigningKey as EcdsaSigningKey, VerifyingKey as EcdsaVerifyingKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::Algorithm;
use crate::crypto;
use crate::error::Result;

/// Symmetric secret for the HMAC algorithms, wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricSecret(Vec<u8>);

impl SymmetricSecret {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SymmetricSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SymmetricSecret {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

// Redacted: secrets never appear in logs or error output.
impl fmt::Debug for SymmetricSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricSecret(..)")
    }
}

/// Private signing key. Exactly one variant is active and it determines the
/// algorithm written into default headers.
#[derive(Debug, Clone)]
pub enum PrivateKey {
    Rs256(RsaPrivateKey),
    Es256(EcdsaSigningKey),
    Hs256(SymmetricSecret),
    Hs512(SymmetricSecret),
}

impl PrivateKey {
    /// The algorithm implied by the active variant.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Rs256(_) => Algorithm::Rs256,
            Self::Es256(_) => Algorithm::Es256,
            Self::Hs256(_) => Algorithm::Hs256,
            Self::Hs512(_) => Algorithm::Hs512,
        }
    }

    /// Sign `message` with the primitive matching the active variant.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Rs256(key) => crypto::rsa::sign_rs256(key, message),
            Self::Es256(key) => crypto::ecdsa::sign_es256(key, message),
            Self::Hs256(secret) => crypto::hmac::sign_hs256(secret.as_bytes(), message),
            Self::Hs512(secret) => crypto::hmac::sign_hs512(secret.as_bytes(), message),
        }
    }
}

/// Public verification key.
///
/// Restricted to the asymmetric algorithms: HS256/HS512 have no public-key
/// form in this model, so HMAC tokens cannot be verified through this type.
#[derive(Debug, Clone)]
pub enum PublicKey {
    Rs256(RsaPublicKey),
    Es256(EcdsaVerifyingKey),
}

impl PublicKey {
    /// The algorithm implied by the active variant.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Rs256(_) => Algorithm::Rs256,
            Self::Es256(_) => Algorithm::Es256,
        }
    }

    /// Check `signature` over `message`.
    #[must_use]
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> bool {
        match self {
            Self::Rs256(key) => crypto::rsa::verify_rs256(key, signature, message),
            Self::Es256(key) => crypto::ecdsa::verify_es256(key, signature, message),
        }
    }
}
