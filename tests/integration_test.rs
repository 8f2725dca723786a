// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use rc5_32::{Rc5, BLOCK_SIZE, KEY_SIZE};

#[test]
fn round_trip_random_keys_and_blocks() {
    let mut rng = StdRng::seed_from_u64(0x5c5_32_12_16);

    for _ in 0..100 {
        let mut key = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key);
        let rc5 = Rc5::new(&key).unwrap();

        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);
        let original = block;

        rc5.encrypt_block(&mut block);
        rc5.decrypt_block(&mut block);
        assert_eq!(original, block);
    }
}

#[test]
fn random_encryptions_are_not_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut identity_count = 0;

    for _ in 0..100 {
        let mut key = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key);
        let rc5 = Rc5::new(&key).unwrap();

        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);
        let original = block;

        rc5.encrypt_block(&mut block);
        if block == original {
            identity_count += 1;
        }
    }

    assert_eq!(identity_count, 0);
}

#[test]
fn same_key_produces_same_ciphertext() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut key = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key);

    let first = Rc5::new(&key).unwrap();
    let second = Rc5::new(&key).unwrap();

    let mut block_a = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
    let mut block_b = block_a;
    first.encrypt_block(&mut block_a);
    second.encrypt_block(&mut block_b);
    assert_eq!(block_a, block_b);
}

#[test]
fn key_bit_flip_avalanches_into_ciphertext() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut key = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key);
    let plaintext = [0u8; BLOCK_SIZE];

    let base = Rc5::new(&key).unwrap();
    let mut base_ct = plaintext;
    base.encrypt_block(&mut base_ct);

    for _ in 0..20 {
        let bit = rng.gen_range(0..KEY_SIZE * 8);
        let mut flipped_key = key;
        flipped_key[bit / 8] ^= 1 << (bit % 8);

        let flipped = Rc5::new(&flipped_key).unwrap();
        let mut flipped_ct = plaintext;
        flipped.encrypt_block(&mut flipped_ct);

        let differing_bits: u32 = base_ct
            .iter()
            .zip(flipped_ct.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum();
        // ~32 of 64 bits expected for a well-mixed cipher
        assert!(
            differing_bits > 10,
            "only {differing_bits} ciphertext bits changed"
        );
    }
}

#[test]
fn encrypt_decrypt_full_message() {
    let key = *b"yellow submarine";
    let rc5 = Rc5::new(&key).unwrap();

    let mut message = b"hello there !!!!".to_vec();
    assert_eq!(message.len() % BLOCK_SIZE, 0);
    let original = message.clone();

    for block in message.chunks_exact_mut(BLOCK_SIZE) {
        rc5.encrypt(block).unwrap();
    }
    assert_ne!(original, message);

    for block in message.chunks_exact_mut(BLOCK_SIZE) {
        rc5.decrypt(block).unwrap();
    }
    assert_eq!(original, message);
}

#[test]
fn shared_instance_across_threads() {
    let rc5 = Rc5::new(&[0xA5; KEY_SIZE]).unwrap();

    let mut expected = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    rc5.encrypt_block(&mut expected);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut block = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
                rc5.encrypt_block(&mut block);
                assert_eq!(block, expected);
            });
        }
    });
}
