//! FFX format-preserving encryption for integer domains.
//!
//! This crate implements the FFX mode of operation for format-preserving
//! encryption (FPE): a keyed, tweakable bijection on `{0, 1, ..., N-1}`
//! for any domain whose order needs 8 to 128 bits.
//!
//! # Overview
//!
//! Format-preserving encryption keeps ciphertexts in the same domain as
//! plaintexts, which suits applications like:
//! - Encrypting numeric identifiers in place (account or card numbers)
//! - Database columns with range constraints
//! - Tokenization where the token must look like the original value
//!
//! The construction is an alternating Feistel network over the binary
//! alphabet whose round function is an AES-CBC-MAC, combined with cycle
//! walking to confine outputs to domains that are not a power of two.
//!
//! # Quick Start
//!
//! ```rust
//! use ffx::{FfxIntegerCipher_128, IntegerMessageSpace};
//!
//! // Domain {0, ..., 1_000_000}
//! let space = IntegerMessageSpace::new(1_000_000).unwrap();
//! let cipher = FfxIntegerCipher_128::new(space).unwrap();
//!
//! let key = [0u8; 16];
//! let tweak = b"account-42";
//!
//! let ciphertext = cipher.encrypt(12345, &key, tweak).unwrap();
//! assert!(ciphertext <= 1_000_000);
//!
//! let plaintext = cipher.decrypt(ciphertext, &key, tweak).unwrap();
//! assert_eq!(plaintext, 12345);
//! ```
//!
//! Message spaces also work on their own for rank/unrank mappings:
//!
//! ```rust
//! use ffx::{IntegerRangeMessageSpace, MessageSpace};
//!
//! let space = IntegerRangeMessageSpace::new(1000, 9999).unwrap();
//! assert_eq!(space.order(), 9000);
//! assert_eq!(space.rank(1234).unwrap(), 234);
//! assert_eq!(space.unrank(234).unwrap(), 1234);
//! ```
//!
//! # Security Considerations
//!
//! - **Domain size**: FFX has no proven security bound below 8 bits of
//!   domain; such message spaces are rejected. Domains above 128 bits are
//!   out of range for this construction.
//! - **Tweaks are public but load-bearing**: a fixed (key, tweak) pair is
//!   one deterministic permutation. Diversify tweaks per field or record
//!   where equality leakage matters.
//! - **No authentication**: FPE is encryption-only; pair it with a MAC or
//!   AEAD where integrity protection is needed.
//!
//! # Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - When disabled, the crate is `no_std` compatible

#![cfg_attr(not(feature = "std"), no_std)]

pub mod common;
pub mod ffx;
pub mod message_space;

#[cfg(test)]
mod cross_check;

pub use common::Error;
pub use ffx::{
    AesCipher, FfxIntegerCipher, FfxIntegerCipher_128, FfxIntegerCipher_256, IntegerCipher,
};
pub use message_space::{IntegerMessageSpace, IntegerRangeMessageSpace, MessageSpace};
