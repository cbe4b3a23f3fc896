// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use blake2b_simd::Params;

/// Returns `blake2b` hash with a digest size of 32 bytes.
pub fn blake2b_256(ingest: &[u8]) -> [u8; 32] {
    let digest = Params::new()
        .hash_length(32)
        .to_state()
        .update(ingest)
        .finalize();

    let mut ret = [0u8; 32];
    ret.clone_from_slice(digest.as_bytes());
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_digest_size() {
        // Output must be stable for an empty and a non-empty input.
        assert_ne!(blake2b_256(b""), blake2b_256(b"arbor"));
        assert_eq!(blake2b_256(b"arbor"), blake2b_256(b"arbor"));
    }
}
