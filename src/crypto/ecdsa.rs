//! ES256: ECDSA over P-256 with SHA-256.
//!
//! Signatures are the fixed-width 64-byte form, the two big-endian 32-byte
//! scalars `r || s`, never ASN.1 DER.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

use crate::error::{Error, Result};

pub(crate) fn sign_es256(key: &SigningKey, message: &[u8]) -> Result<Vec<u8>> {
    let signature: Signature = key
        .try_sign(message)
        .map_err(|e| Error::Signing(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

pub(crate) fn verify_es256(key: &VerifyingKey, signature: &[u8], message: &[u8]) -> bool {
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    key.verify(message, &signature).is_ok()
}
