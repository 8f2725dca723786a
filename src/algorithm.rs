// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The implementation details of the RC5-32/12/16 block cipher algorithm
//!
use crate::magic::MAGIC_TABLE;

/// Number of mixing rounds.
pub const ROUNDS: usize = 12;

/// Length of the expanded round-key schedule in words: `2 * (ROUNDS + 1)`.
pub const SCHEDULE_WORDS: usize = 2 * (ROUNDS + 1);

/// Secret key length in bytes.
pub const KEY_SIZE: usize = 16;

/// Cipher block length in bytes: two little-endian 32-bit words.
pub const BLOCK_SIZE: usize = 8;

const KEY_WORDS: usize = KEY_SIZE / 4;
const MIX_ITERATIONS: usize = 3 * SCHEDULE_WORDS;
const WORD_BITS: u32 = 32;

/// The `Rc5InitError` enum represents the possible errors that can occur during the
/// [Rc5] initialization
#[derive(thiserror::Error, Debug)]
pub enum Rc5InitError {
    #[error("invalid key size: `{0}`; the key must be exactly 16 bytes")]
    InvalidKeySize(usize),
}

/// The `Rc5BlockError` enum represents the possible errors that can occur when
/// encrypting or decrypting byte slices with [Rc5::encrypt] and [Rc5::decrypt].
#[derive(thiserror::Error, Debug)]
pub enum Rc5BlockError {
    #[error("invalid block size: `{0}`; blocks must be exactly 8 bytes")]
    InvalidBlockSize(usize),
}

/// The Rc5 struct represents an instance of the RC5-32/12/16 block cipher.
///
/// An instance owns the 26-word round-key schedule expanded from its key at
/// construction time. The schedule is never mutated afterwards, so a shared
/// reference may be used concurrently from any number of threads.
pub struct Rc5 {
    schedule: [u32; SCHEDULE_WORDS],
}

impl Rc5 {
    /// Creates a new Rc5 instance from a 16-byte secret key.
    ///
    /// The key bytes are consumed only during schedule expansion and are not
    /// retained. Any key length other than 16 fails with
    /// [Rc5InitError::InvalidKeySize] carrying the offending length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::{Rc5, Rc5InitError};
    ///
    /// let key = [0u8; 16];
    /// assert!(Rc5::new(&key).is_ok());
    ///
    /// let res = Rc5::new(&key[..9]);
    /// assert!(matches!(res, Err(Rc5InitError::InvalidKeySize(9))));
    /// ```
    pub fn new(key: &[u8]) -> Result<Rc5, Rc5InitError> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| Rc5InitError::InvalidKeySize(key.len()))?;

        Ok(Rc5 {
            schedule: expand_key(key),
        })
    }

    /// Encrypts the two-word block represented by the references `a` and `b`.
    ///
    /// The encrypted values are written back to the same references.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::{Rc5, Rc5InitError};
    ///
    /// # fn main() -> Result<(), Rc5InitError> {
    /// let key = [
    ///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
    ///     0x0E, 0x0F,
    /// ];
    /// let rc5 = Rc5::new(&key)?;
    ///
    /// let mut a = 0x12345678;
    /// let mut b = 0x9ABCDEF0;
    ///
    /// rc5.encrypt_words(&mut a, &mut b);
    ///
    /// assert_eq!(a, 0x74AEDE70);
    /// assert_eq!(b, 0x32D8ABA8);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, a: &mut u32, b: &mut u32) {
        *a = a.wrapping_add(self.schedule[0]);
        *b = b.wrapping_add(self.schedule[1]);

        for keys in self.schedule[2..].chunks_exact(2) {
            // A = ((A ^ B) <<< B) + S[2*i]
            *a = (*a ^ *b).rotate_left(*b % WORD_BITS).wrapping_add(keys[0]);
            // B = ((B ^ A) <<< A) + S[2*i + 1]
            *b = (*b ^ *a).rotate_left(*a % WORD_BITS).wrapping_add(keys[1]);
        }
    }

    /// Decrypts the two-word block represented by the references `a` and `b`.
    ///
    /// The decrypted values are written back to the same references.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::{Rc5, Rc5InitError};
    ///
    /// # fn main() -> Result<(), Rc5InitError> {
    /// let key = [
    ///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
    ///     0x0E, 0x0F,
    /// ];
    /// let rc5 = Rc5::new(&key)?;
    ///
    /// let mut a = 0x74AEDE70;
    /// let mut b = 0x32D8ABA8;
    ///
    /// rc5.decrypt_words(&mut a, &mut b);
    ///
    /// assert_eq!(a, 0x12345678);
    /// assert_eq!(b, 0x9ABCDEF0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_words(&self, a: &mut u32, b: &mut u32) {
        for keys in self.schedule[2..].rchunks_exact(2) {
            // B = ((B - S[2*i+1]) >>> A) ^ A
            *b = b.wrapping_sub(keys[1]).rotate_right(*a % WORD_BITS) ^ *a;
            // A = ((A - S[2*i]) >>> B) ^ B
            *a = a.wrapping_sub(keys[0]).rotate_right(*b % WORD_BITS) ^ *b;
        }

        *b = b.wrapping_sub(self.schedule[1]);
        *a = a.wrapping_sub(self.schedule[0]);
    }

    /// Encrypts one 8-byte block in place.
    ///
    /// The block is interpreted as two little-endian 32-bit words. Both words
    /// are read before any output byte is written, so operating in place is
    /// always sound.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::{Rc5, Rc5InitError};
    ///
    /// # fn main() -> Result<(), Rc5InitError> {
    /// let key = [
    ///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
    ///     0x0E, 0x0F,
    /// ];
    /// let rc5 = Rc5::new(&key)?;
    ///
    /// let mut block = [0x78, 0x56, 0x34, 0x12, 0xF0, 0xDE, 0xBC, 0x9A];
    /// rc5.encrypt_block(&mut block);
    ///
    /// assert_eq!(block, [0x70, 0xDE, 0xAE, 0x74, 0xA8, 0xAB, 0xD8, 0x32]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let (mut a, mut b) = unpack_words(block);

        self.encrypt_words(&mut a, &mut b);

        pack_words(block, a, b);
    }

    /// Decrypts one 8-byte block in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::{Rc5, Rc5InitError};
    ///
    /// # fn main() -> Result<(), Rc5InitError> {
    /// let key = [
    ///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
    ///     0x0E, 0x0F,
    /// ];
    /// let rc5 = Rc5::new(&key)?;
    ///
    /// let mut block = [0x70, 0xDE, 0xAE, 0x74, 0xA8, 0xAB, 0xD8, 0x32];
    /// rc5.decrypt_block(&mut block);
    ///
    /// assert_eq!(block, [0x78, 0x56, 0x34, 0x12, 0xF0, 0xDE, 0xBC, 0x9A]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let (mut a, mut b) = unpack_words(block);

        self.decrypt_words(&mut a, &mut b);

        pack_words(block, a, b);
    }

    /// Encrypts the given slice of bytes in place.
    ///
    /// Returns a reference to the encrypted bytes on success, or
    /// [Rc5BlockError::InvalidBlockSize] if the slice is not exactly
    /// [BLOCK_SIZE] bytes long.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_32::Rc5;
    ///
    /// let rc5 = Rc5::new(&[0u8; 16]).unwrap();
    /// let original = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    /// let mut block = original;
    ///
    /// let ct = rc5.encrypt(&mut block).unwrap();
    /// assert_ne!(original[..], ct[..]);
    ///
    /// let pt = rc5.decrypt(&mut block).unwrap();
    /// assert_eq!(original[..], pt[..]);
    /// ```
    pub fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], Rc5BlockError> {
        self.encrypt_block(try_into_block(bytes)?);
        Ok(bytes)
    }

    /// Decrypts the given slice of bytes in place.
    ///
    /// Returns a reference to the decrypted bytes on success, or
    /// [Rc5BlockError::InvalidBlockSize] if the slice is not exactly
    /// [BLOCK_SIZE] bytes long.
    pub fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], Rc5BlockError> {
        self.decrypt_block(try_into_block(bytes)?);
        Ok(bytes)
    }
}

/// Expands a 16-byte key into the 26-word round-key schedule.
///
/// The key bytes are packed into 4 little-endian words, the magic table is
/// copied, and both arrays are mixed over `3 * 26` iterations. Only the low 5
/// bits of `A + B` select the data-dependent rotation amount.
fn expand_key(key: &[u8; KEY_SIZE]) -> [u32; SCHEDULE_WORDS] {
    let mut l = [0u32; KEY_WORDS];
    for (word, bytes) in l.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_le_bytes(bytes.try_into().expect("chunk length is four"));
    }

    let mut s = MAGIC_TABLE;

    let mut a: u32 = 0;
    let mut b: u32 = 0;
    let mut i = 0;
    let mut j = 0;

    for _ in 0..MIX_ITERATIONS {
        // A = S[i] = (S[i] + A + B) <<< 3
        s[i] = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
        a = s[i];
        // B = L[j] = (L[j] + A + B) <<< (A + B)
        let ab = a.wrapping_add(b);
        l[j] = l[j].wrapping_add(ab).rotate_left(ab % WORD_BITS);
        b = l[j];

        i = (i + 1) % SCHEDULE_WORDS;
        j = (j + 1) % KEY_WORDS;
    }

    s
}

fn unpack_words(block: &[u8; BLOCK_SIZE]) -> (u32, u32) {
    let (a_bytes, b_bytes) = block.split_at(BLOCK_SIZE / 2);
    (
        u32::from_le_bytes(a_bytes.try_into().expect("half block is four bytes")),
        u32::from_le_bytes(b_bytes.try_into().expect("half block is four bytes")),
    )
}

fn pack_words(block: &mut [u8; BLOCK_SIZE], a: u32, b: u32) {
    let (a_bytes, b_bytes) = block.split_at_mut(BLOCK_SIZE / 2);
    a_bytes.copy_from_slice(&a.to_le_bytes());
    b_bytes.copy_from_slice(&b.to_le_bytes());
}

fn try_into_block(bytes: &mut [u8]) -> Result<&mut [u8; BLOCK_SIZE], Rc5BlockError> {
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| Rc5BlockError::InvalidBlockSize(len))
}
