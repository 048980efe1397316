#![allow(deprecated)]
//! Common utilities shared across the FFX cipher and message spaces.

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherEncrypt};

/// Unified error type for all FFX operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Value is not an element of the message space.
    OutsideMessageSpace,
    /// Range constructed with a minimum greater than its maximum.
    InvalidRange,
    /// Message space needs fewer than 8 bits; FFX has no security
    /// guarantee there.
    DomainTooSmall,
    /// Message space order does not fit in 128 bits.
    DomainTooLarge,
    /// Key material is shorter than the cipher consumes.
    KeyTooShort,
    /// Tweak is longer than the 255 bytes encodable in the parameter block.
    TweakTooLong,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutsideMessageSpace => write!(f, "value outside the message space"),
            Error::InvalidRange => write!(f, "range minimum exceeds maximum"),
            Error::DomainTooSmall => write!(f, "message space smaller than 8 bits"),
            Error::DomainTooLarge => write!(f, "message space larger than 128 bits"),
            Error::KeyTooShort => write!(f, "key material too short"),
            Error::TweakTooLong => write!(f, "tweak too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Direction of cipher operation.
#[derive(Clone, Copy)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// XOR two 16-byte blocks, storing result in the first argument.
#[inline]
pub fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8; BLOCK_LENGTH]) {
    for i in 0..BLOCK_LENGTH {
        dst[i] ^= src[i];
    }
}

/// AES-CBC-MAC over `msg` with an explicit chaining seed.
///
/// `msg` must be a positive multiple of 16 bytes; the MAC is the final
/// ciphertext block of AES in CBC mode with no padding. A zero seed gives
/// the classical zero-IV CBC-MAC; the FFX round function chains from the
/// encrypted parameter block instead. Only secure for fixed-length
/// messages, which FFX guarantees by encoding its lengths in the
/// parameter block.
pub fn cbc_mac<Aes: BlockCipherEncrypt>(
    ks: &Aes,
    seed: &[u8; BLOCK_LENGTH],
    msg: &[u8],
) -> [u8; BLOCK_LENGTH] {
    debug_assert!(!msg.is_empty() && msg.len() % BLOCK_LENGTH == 0);

    let mut chain = *seed;
    for block in msg.chunks_exact(BLOCK_LENGTH) {
        xor_block(&mut chain, block.try_into().unwrap());
        let mut c = Array::clone_from_slice(&chain);
        ks.encrypt_block(&mut c);
        chain.copy_from_slice(c.as_slice());
    }
    chain
}
