// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides an implementation of the RC5-32/12/16 block cipher
//!
//! The RC5 block cipher is a symmetric-key block cipher designed by Ron Rivest in 1994.
//! This crate implements the single fixed instantiation RC5-32/12/16: a 32-bit word
//! size, 12 rounds, and a 16-byte secret key, operating on 8-byte blocks.
//!
//! Construction expands the key once into an immutable 26-word round-key schedule;
//! after that the cipher is a pair of pure, stateless block transforms that may be
//! invoked repeatedly and concurrently against the same instance.
//!
//! ```
//! use rc5_32::Rc5;
//!
//! # fn main() -> Result<(), rc5_32::Rc5InitError> {
//! let key = [
//!     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
//!     0x0E, 0x0F,
//! ];
//! let rc5 = Rc5::new(&key)?;
//!
//! let mut block = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
//! rc5.encrypt_block(&mut block);
//! assert_eq!(block, [0x2D, 0xDC, 0x14, 0x9B, 0xCF, 0x08, 0x8B, 0x9E]);
//!
//! rc5.decrypt_block(&mut block);
//! assert_eq!(block, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77]);
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod magic;

pub use crate::algorithm::*;
pub use crate::magic::{P, Q};
