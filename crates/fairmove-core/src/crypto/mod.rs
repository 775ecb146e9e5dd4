//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey: per-round 256-bit key material
//! - Commitment: keyed HMAC-SHA256 tag binding a key to a chosen move

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::SecretKey;
