//! RS256: RSA PKCS#1 v1.5 signatures over SHA-256.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};

pub(crate) fn sign_rs256(key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(key.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| Error::Signing(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// PKCS#1 v1.5 verification: the crate decodes the DigestInfo prefix for
/// SHA-256 and compares the embedded digest against the message digest.
pub(crate) fn verify_rs256(key: &RsaPublicKey, signature: &[u8], message: &[u8]) -> bool {
    let verifying_key = VerifyingKey::<Sha256>::new(key.clone());
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    verifying_key.verify(message, &signature).is_ok()
}
