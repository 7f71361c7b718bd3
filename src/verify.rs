//! Ordered verification of parsed tokens.

use crate::claims::Claim;
use crate::error::{Error, Result};
use crate::key::PublicKey;
use crate::token::Token;

/// Wall-clock source for the expiry check, injectable so expiry behavior
/// can be tested deterministically.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn now_unix(&self) -> i64;
}

/// Reads the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Verify `token` against `key` using the system clock.
pub fn verify(key: &PublicKey, token: &Token) -> Result<()> {
    verify_with_clock(key, token, &SystemClock)
}

/// Verify `token` against `key`.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. `typ` must be exactly "JWT" ([`Error::TypeMismatch`]).
/// 2. An `exp` claim, when present, must be an integer in the future
///    ([`Error::Expired`]; an unparsable value fails closed). Tokens
///    without `exp` never expire by this check.
/// 3. The token's claimed algorithm must match the key's
///    ([`Error::AlgorithmMismatch`]).
/// 4. The signature must verify over the original signing input
///    ([`Error::SignatureInvalid`]).
pub fn verify_with_clock(key: &PublicKey, token: &Token, clock: &impl Clock) -> Result<()> {
    if token.header().typ.as_deref() != Some("JWT") {
        return Err(Error::TypeMismatch);
    }

    if let Some(exp) = token.payload().find_claim(&Claim::EXP) {
        let exp: i64 = exp.parse().map_err(|_| Error::Expired)?;
        if exp <= clock.now_unix() {
            return Err(Error::Expired);
        }
    }

    // Checked before the signature so a swapped `alg` claim never selects
    // the wrong primitive.
    if key.algorithm() != token.header().alg {
        return Err(Error::AlgorithmMismatch);
    }

    if !key.verify(token.signature(), token.unsigned_token().as_bytes()) {
        tracing::debug!(alg = %token.header().alg, "signature verification failed");
        return Err(Error::SignatureInvalid);
    }

    Ok(())
}
