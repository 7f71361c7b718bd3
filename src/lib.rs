//! Compact JSON Web Token issuing and verification.
//!
//! Builds signed tokens from a header and an ordered claim set, and
//! verifies received tokens in a fixed order: structure, token type,
//! expiry, algorithm consistency, signature. Supported algorithms are
//! RS256, ES256 (P-256), HS256, and HS512.
//!
//! Key material is supplied by the caller using the `rsa` and `p256` key
//! types directly; this crate does not generate, parse, or store keys.
//! All operations are synchronous transformations over immutable values
//! and are safe to call from multiple threads.
//!
//! ```
//! use webtoken::{Claim, Payload, PrivateKey, SymmetricSecret, Token};
//!
//! # fn main() -> webtoken::Result<()> {
//! let key = PrivateKey::Hs256(SymmetricSecret::new(b"secret".to_vec()));
//! let payload = Payload::new()
//!     .with_claim(Claim::SUB, "user1")
//!     .with_claim("role", "admin");
//!
//! let token = Token::sign(&key, payload)?;
//! let parsed = Token::parse(&token.compact())?;
//! assert_eq!(parsed.payload().find_claim(&Claim::SUB), Some("user1"));
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod claims;
pub(crate) mod crypto;
mod error;
mod header;
mod key;
mod token;
mod verify;

pub use algorithm::Algorithm;
pub use claims::{Claim, Payload};
pub use error::{Error, Result};
pub use header::Header;
pub use key::{PrivateKey, PublicKey, SymmetricSecret};
pub use token::Token;
pub use verify::{verify, verify_with_clock, Clock, SystemClock};
