//! Signature primitives behind the algorithm dispatch in [`crate::key`].
//!
//! Each module exposes plain sign/verify functions over raw message bytes;
//! key-shape requirements are enforced by the key enums, not here.

pub(crate) mod ecdsa;
pub(crate) mod hmac;
pub(crate) mod rsa;
