//! HS256 / HS512: HMAC over the message bytes.
//!
//! HMAC hashes its input itself, so there is no separate pre-hash step.
//! There is no verify function here: the public-key model has no symmetric
//! variant, so HMAC tokens have no verification path (see [`crate::key`]).

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

pub(crate) fn sign_hs256(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

pub(crate) fn sign_hs512(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha512::new_from_slice(secret).map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
