//! Benchmark input generation for the chunkmem primitives.
//!
//! Provides seeded random buffers sized to land in each width class,
//! so benchmark runs are reproducible and comparable across machines.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Buffer sizes that exercise each chunk width around the same byte
/// count: 4096 → 8B, 4100 → 4B, 4098 → 2B, 4097 → 1B.
pub const WIDTH_CLASS_SIZES: [(usize, &str); 4] = [
    (4096, "w8"),
    (4100, "w4"),
    (4098, "w2"),
    (4097, "w1"),
];

/// Fill a fresh buffer of `len` bytes from a ChaCha8 stream seeded with
/// `seed`, so every run sees identical data.
pub fn seeded_buffer(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}
