// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use uuid::Uuid;

/// Ring modulus of the generator; all outputs fall in `[0, MODULUS)`.
const MODULUS: i32 = i32::MAX;
/// Mixing constant folded into the lag table during seeding.
const SEED_CONSTANT: i32 = 161_803_398;

/// Additive-lagged subtractive generator whose entire output stream is a
/// pure function of one 32-bit seed.
///
/// Independent nodes replay the same actions and must derive bit-identical
/// side effects, so the algorithm below is pinned: the lag-55 table layout,
/// the four warm-up shuffles, the saturating treatment of `i32::MIN`, and
/// the one-step-per-byte consumption of [`fill_bytes`](Self::fill_bytes)
/// are all load-bearing. Any change breaks replay of every block ever
/// produced with it.
///
/// A generator is owned by exactly one execution context and is not
/// shareable across threads without external locking.
#[derive(Clone, Debug)]
pub struct SubtractiveRng {
    seed_array: [i32; 56],
    inext: usize,
    inextp: usize,
}

impl SubtractiveRng {
    /// Builds the generator state for `seed`. Total for every seed; the
    /// magnitude of `i32::MIN` saturates to `i32::MAX`.
    pub fn new(seed: i32) -> Self {
        let subtraction = if seed == i32::MIN { i32::MAX } else { seed.abs() };

        let mut seed_array = [0i32; 56];
        let mut mj = SEED_CONSTANT - subtraction;
        seed_array[55] = mj;
        let mut mk = 1i32;
        for i in 1..55 {
            // The multiplier 21 visits every slot of the lag table once.
            let ii = 21 * i % 55;
            seed_array[ii] = mk;
            mk = mj - mk;
            if mk < 0 {
                mk += MODULUS;
            }
            mj = seed_array[ii];
        }
        for _ in 1..5 {
            for i in 1..56 {
                seed_array[i] -= seed_array[1 + (i + 30) % 55];
                if seed_array[i] < 0 {
                    seed_array[i] += MODULUS;
                }
            }
        }

        SubtractiveRng {
            seed_array,
            inext: 0,
            inextp: 21,
        }
    }

    /// Next value in `[0, 2^31 - 1)`.
    pub fn next_i32(&mut self) -> i32 {
        let mut inext = self.inext + 1;
        if inext >= 56 {
            inext = 1;
        }
        let mut inextp = self.inextp + 1;
        if inextp >= 56 {
            inextp = 1;
        }

        let mut ret = self.seed_array[inext] - self.seed_array[inextp];
        if ret == MODULUS {
            ret -= 1;
        }
        if ret < 0 {
            ret += MODULUS;
        }
        self.seed_array[inext] = ret;

        self.inext = inext;
        self.inextp = inextp;
        ret
    }

    /// Fills `dest` with the low byte of one generator step per element.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest {
            *b = (self.next_i32() % 0x100) as u8;
        }
    }

    /// Returns `n` freshly drawn bytes.
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill_bytes(&mut out);
        out
    }

    /// Derives a 128-bit identifier from the next 16 generator steps.
    ///
    /// The version nibble is forced to `0100` and the top variant bits to
    /// `10`, so the canonical hyphenated form always reads as a version-4,
    /// RFC 4122 variant-1 identifier; every other bit comes from the
    /// stream. The first three hyphenated groups take their bytes in
    /// little-endian order, the tail in stream order.
    pub fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.fill_bytes(&mut bytes);

        bytes[7] = (bytes[7] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let d1 = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let d2 = u16::from_le_bytes([bytes[4], bytes[5]]);
        let d3 = u16::from_le_bytes([bytes[6], bytes[7]]);
        let d4: &[u8; 8] = bytes[8..].try_into().expect("sixteen-byte buffer");
        Uuid::from_fields(d1, d2, d3, d4)
    }
}
