#![allow(deprecated)]
//! FFX integer cipher: format-preserving encryption on `0..=max` domains.
//!
//! Implements the FFX mode of operation for format-preserving encryption
//! over a binary alphabet: a tweakable alternating Feistel network whose
//! round function is an AES-CBC-MAC, wrapped in a cycle walk that confines
//! outputs to arbitrary (non-power-of-two) domains.
//!
//! FFX parameters used:
//! - radix = 2 (binary alphabet {0, 1})
//! - method = 2 (alternating Feistel)
//! - addition operator = 0 (characterwise addition, XOR)
//!
//! Security properties:
//! - Keyed bijection on the domain: ciphertexts land in the same range
//! - Tweaks diversify the permutation without being secret
//! - Domains below 8 bits are rejected (no proven security bound there)
//! - No authentication - pair with a MAC if integrity protection is needed

use core::marker::PhantomData;
use core::mem;

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};
use aes::{Aes128, Aes256};

use crate::common::{BLOCK_LENGTH, Direction, Error, cbc_mac};
use crate::message_space::{IntegerMessageSpace, MessageSpace};

/// Smallest domain bit length FFX is defined for.
const MIN_BIT_LENGTH: u32 = 8;
/// Largest domain bit length FFX is defined for.
const MAX_BIT_LENGTH: u32 = 128;
/// Version field of the parameter block.
const VERS: u8 = 1;
/// Feistel method: 2 = alternating.
const METHOD: u8 = 2;
/// Addition operator: 0 = characterwise addition (XOR).
const ADDITION: u8 = 0;
/// Alphabet size: {0, 1}.
const RADIX: u8 = 2;

/// Longest tweak encodable in the parameter block's length byte.
const MAX_TWEAK_LENGTH: usize = 255;

/// Largest per-round AES input: 8 half bytes plus a padded 255-byte tweak.
const MAX_Q_LENGTH: usize = 272;

/// Trait for AES block ciphers usable as the FFX round primitive.
///
/// FFX only ever encrypts blocks (the Feistel network inverts itself), so
/// no decryption side is required.
pub trait AesCipher: BlockCipherEncrypt + KeyInit {
    /// Key length in bytes consumed from the caller's key material.
    const KEY_LEN: usize;
}

impl AesCipher for Aes128 {
    const KEY_LEN: usize = 16;
}

impl AesCipher for Aes256 {
    const KEY_LEN: usize = 32;
}

/// Contract shared by integer FPE ciphers: a keyed, tweakable bijection on
/// a zero-based integer message space.
pub trait IntegerCipher {
    /// The domain this cipher permutes.
    fn message_space(&self) -> &IntegerMessageSpace;

    /// Encrypt `plaintext` into another element of the domain.
    fn encrypt(&self, plaintext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error>;

    /// Invert [`encrypt`](Self::encrypt) under the same key and tweak.
    fn decrypt(&self, ciphertext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error>;
}

/// Generic FFX integer cipher parameterized by the AES primitive.
///
/// The cipher itself is stateless and immutable: each call is a pure
/// function of `(value, key, tweak)`, and a fresh AES key schedule is set
/// up per call, so instances are freely shareable across threads.
pub struct FfxIntegerCipher<Aes: AesCipher> {
    space: IntegerMessageSpace,
    bit_length: u32,
    split: u32,
    rounds: u8,
    _aes: PhantomData<Aes>,
}

/// FFX with AES-128, the canonical interoperable instance.
#[allow(non_camel_case_types)]
pub type FfxIntegerCipher_128 = FfxIntegerCipher<Aes128>;

/// FFX with AES-256. Same wire layout as the 128-bit instance, 32-byte keys.
#[allow(non_camel_case_types)]
pub type FfxIntegerCipher_256 = FfxIntegerCipher<Aes256>;

/// Minimum number of bits needed to represent `value`.
#[inline]
fn bit_length(value: u128) -> u32 {
    u128::BITS - value.leading_zeros()
}

/// Low-bit mask of the given width. Any FFX half is at most 64 bits wide.
#[inline]
fn mask(width: u32) -> u128 {
    (1u128 << width) - 1
}

/// Number of Feistel rounds for a domain of `bit_length` bits.
///
/// Smaller domains get more rounds per the FFX round schedule; below 8
/// bits the construction has no security bound and is rejected.
fn round_count(bit_length: u32) -> Result<u8, Error> {
    match bit_length {
        32.. => Ok(12),
        20..=31 => Ok(18),
        14..=19 => Ok(24),
        10..=13 => Ok(30),
        MIN_BIT_LENGTH..=9 => Ok(36),
        _ => Err(Error::DomainTooSmall),
    }
}

impl<Aes: AesCipher> FfxIntegerCipher<Aes> {
    /// Key length in bytes consumed from the caller's key material.
    pub const KEY_LENGTH: usize = Aes::KEY_LEN;

    /// AES block length in bytes (always 16).
    pub const BLOCK_LENGTH: usize = BLOCK_LENGTH;

    /// Longest accepted tweak in bytes.
    pub const MAX_TWEAK_LENGTH: usize = MAX_TWEAK_LENGTH;

    /// Construct an FFX cipher over the given zero-based domain.
    ///
    /// # Errors
    /// `Error::DomainTooSmall` if the order of the message space needs
    /// fewer than 8 bits. Domains above 128 bits are unrepresentable in
    /// [`IntegerMessageSpace`] and already rejected at its construction.
    pub fn new(space: IntegerMessageSpace) -> Result<Self, Error> {
        let bit_length = bit_length(space.order());
        debug_assert!(bit_length <= MAX_BIT_LENGTH);
        let rounds = round_count(bit_length)?;
        Ok(Self {
            space,
            bit_length,
            split: (bit_length + 1) / 2,
            rounds,
            _aes: PhantomData,
        })
    }

    /// Encrypt `plaintext` into another element of the domain.
    ///
    /// The first [`KEY_LENGTH`](Self::KEY_LENGTH) bytes of `key` are used.
    /// The tweak may be empty and at most 255 bytes long; it must be
    /// presented unchanged on decryption.
    ///
    /// # Errors
    /// `Error::OutsideMessageSpace` if `plaintext` exceeds the domain
    /// maximum, `Error::KeyTooShort` or `Error::TweakTooLong` on bad
    /// arguments.
    pub fn encrypt(&self, plaintext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error> {
        self.cipher(plaintext, key, tweak, Direction::Encrypt)
    }

    /// Decrypt `ciphertext` back to the plaintext it came from.
    ///
    /// Same argument contract and errors as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, ciphertext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error> {
        self.cipher(ciphertext, key, tweak, Direction::Decrypt)
    }

    /// Validate arguments, then cycle-walk the Feistel permutation until
    /// the value lands back inside the message space.
    fn cipher(
        &self,
        input: u128,
        key: &[u8],
        tweak: &[u8],
        direction: Direction,
    ) -> Result<u128, Error> {
        let max_value = self.space.max_value();
        if input > max_value {
            return Err(Error::OutsideMessageSpace);
        }
        if key.len() < Aes::KEY_LEN {
            return Err(Error::KeyTooShort);
        }
        if tweak.len() > MAX_TWEAK_LENGTH {
            return Err(Error::TweakTooLong);
        }

        let ks = Aes::new(Array::from_slice(&key[..Aes::KEY_LEN]));

        // Cycle walking: while the permuted value is outside the message
        // space, permute again. Out-of-range points form closed cycles of
        // the same permutation, so both directions terminate and remain
        // inverses of each other. The domain fills at least half of the
        // n-bit range, putting the expected number of passes below two.
        let mut value = input;
        loop {
            value = self.feistel(&ks, value, tweak, direction);
            if value <= max_value {
                return Ok(value);
            }
        }
    }

    /// One full pass of the alternating Feistel network over the n-bit
    /// range enclosing the message space.
    fn feistel(&self, ks: &Aes, input: u128, tweak: &[u8], direction: Direction) -> u128 {
        let split = self.split;

        // Low `split` bits and high `n - split` bits of the input. With an
        // odd bit length the low half is the larger one.
        let mut b = input & mask(split);
        let mut a = input >> split;

        // Parameter block P, fixed across rounds, encrypted once into the
        // chaining seed for every round's CBC-MAC.
        let p = [
            0,
            VERS,
            METHOD,
            ADDITION,
            RADIX,
            self.bit_length as u8,
            split as u8,
            self.rounds,
            0,
            0,
            0,
            0,
            0,
            0,
            0,
            tweak.len() as u8,
        ];
        let mut p_block = Array::clone_from_slice(&p);
        ks.encrypt_block(&mut p_block);
        let seed: [u8; BLOCK_LENGTH] = p_block.as_slice().try_into().unwrap();

        match direction {
            Direction::Encrypt => {
                for round in 0..self.rounds {
                    a ^= self.round_function(ks, &seed, tweak, round, b);
                    mem::swap(&mut a, &mut b);
                }
            }
            // Reversed rounds with the swap before the XOR so that the
            // round function sees the same (round, b) pairs as encryption.
            Direction::Decrypt => {
                for round in (0..self.rounds).rev() {
                    mem::swap(&mut a, &mut b);
                    a ^= self.round_function(ks, &seed, tweak, round, b);
                }
            }
        }

        (a << split) | b
    }

    /// Round function: AES-CBC-MAC over the padded half and tweak, chained
    /// from the encrypted parameter block, truncated to the width of the
    /// half being XORed.
    fn round_function(
        &self,
        ks: &Aes,
        seed: &[u8; BLOCK_LENGTH],
        tweak: &[u8],
        round: u8,
        b: u128,
    ) -> u128 {
        // Q = paddedB || paddedTweak. The half fits 8 little-endian bytes
        // (no half exceeds 64 bits); the tweak is zero-padded so the total
        // is a multiple of 16, with the round number in the last byte.
        let pad = (BLOCK_LENGTH - (tweak.len() + 9) % BLOCK_LENGTH) % BLOCK_LENGTH;
        let q_len = 8 + 1 + tweak.len() + pad;
        debug_assert!(q_len % BLOCK_LENGTH == 0 && q_len <= MAX_Q_LENGTH);

        let mut q = [0u8; MAX_Q_LENGTH];
        q[..8].copy_from_slice(&(b as u64).to_le_bytes());
        q[8..8 + tweak.len()].copy_from_slice(tweak);
        q[q_len - 1] = round;

        let mac = cbc_mac(ks, seed, &q[..q_len]);

        // With an even bit length the halves are equal and every round
        // returns `split` bits. With an odd bit length the widths
        // alternate: even rounds XOR into the short half.
        let width = if self.bit_length % 2 == 0 || round % 2 != 0 {
            self.split
        } else {
            self.split - 1
        };

        // Top `width` bits of the MAC, read as a little-endian integer.
        u128::from_le_bytes(mac) >> (128 - width)
    }
}

impl<Aes: AesCipher> IntegerCipher for FfxIntegerCipher<Aes> {
    fn message_space(&self) -> &IntegerMessageSpace {
        &self.space
    }

    fn encrypt(&self, plaintext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error> {
        self.cipher(plaintext, key, tweak, Direction::Encrypt)
    }

    fn decrypt(&self, ciphertext: u128, key: &[u8], tweak: &[u8]) -> Result<u128, Error> {
        self.cipher(ciphertext, key, tweak, Direction::Decrypt)
    }
}
