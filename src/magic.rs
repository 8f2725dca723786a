// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The fixed magic constant table used to seed the round-key schedule.
//!
//! The table is derived from the binary expansions of e and the golden ratio
//! and is independent of any key material.

use crate::algorithm::SCHEDULE_WORDS;

/// `Odd((e - 2) * 2^32)` for the 32-bit word size.
pub const P: u32 = 0xb7e15163;

/// `Odd((phi - 1) * 2^32)` for the 32-bit word size.
pub const Q: u32 = 0x9e3779b9;

/// The 26-word seed table: `S[0] = P`, `S[i] = S[i - 1] + Q` with wraparound.
pub(crate) const MAGIC_TABLE: [u32; SCHEDULE_WORDS] = build_magic_table();

const fn build_magic_table() -> [u32; SCHEDULE_WORDS] {
    let mut table = [0u32; SCHEDULE_WORDS];
    table[0] = P;
    let mut i = 1;
    while i < SCHEDULE_WORDS {
        table[i] = table[i - 1].wrapping_add(Q);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_recurrence() {
        assert_eq!(MAGIC_TABLE[0], P);
        for i in 1..SCHEDULE_WORDS {
            assert_eq!(MAGIC_TABLE[i], MAGIC_TABLE[i - 1].wrapping_add(Q));
        }
    }

    #[test]
    fn table_matches_reference_values() {
        assert_eq!(MAGIC_TABLE[1], 0x5618cb1c);
        assert_eq!(MAGIC_TABLE[2], 0xf45044d5);
        assert_eq!(MAGIC_TABLE[4], 0x30bf3847);
        assert_eq!(MAGIC_TABLE[SCHEDULE_WORDS - 1], 0x2b4c3474);
    }
}
