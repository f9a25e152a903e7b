//! Chunk-granularity prefix comparison.

use crate::width::ChunkWidth;

/// Compare `$a` and `$b` chunk-by-chunk as `$ty` words, returning the
/// signed difference of the first mismatching pair.
macro_rules! compare_as {
    ($ty:ty, $a:expr, $b:expr) => {{
        const N: usize = std::mem::size_of::<$ty>();
        for (ca, cb) in $a.chunks_exact(N).zip($b.chunks_exact(N)) {
            let mut word = [0u8; N];
            word.copy_from_slice(ca);
            let x = <$ty>::from_ne_bytes(word);
            word.copy_from_slice(cb);
            let y = <$ty>::from_ne_bytes(word);
            if x != y {
                return clamp_to_i64(x as i128 - y as i128);
            }
        }
        0
    }};
}

/// Clamp a word difference into the return type. Exact for widths up to
/// 4 bytes; for 8-byte chunks the magnitude saturates but the sign is
/// always preserved.
fn clamp_to_i64(diff: i128) -> i64 {
    diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Compare the overlapping prefix of `a` and `b`.
///
/// The usable length is `min(a.len(), b.len())`; the prefix is walked
/// chunk-by-chunk at the widest width dividing it. Returns 0 when every
/// chunk matches, otherwise the signed difference of the first
/// differing pair of native-endian chunk values.
///
/// Two properties of this contract deserve emphasis:
///
/// - **Prefix semantics.** When one buffer is a strict prefix of the
///   other the result is 0, like `strncmp` at the shorter length — this
///   is not full-length equality.
/// - **Chunk granularity.** The tie-break happens at the selected chunk
///   width, not at the first differing byte. For multi-byte chunks the
///   returned difference is a native-endian *word* difference, whose
///   sign can disagree with lexicographic byte order. Treat the result
///   as zero / positive / negative, never as a byte-precise distance.
///
/// Infallible: no allocation, no mutation, and empty prefixes compare
/// equal.
pub fn compare(a: &[u8], b: &[u8]) -> i64 {
    let usable = a.len().min(b.len());
    let a = &a[..usable];
    let b = &b[..usable];
    match ChunkWidth::select(usable) {
        ChunkWidth::W8 => compare_as!(u64, a, b),
        ChunkWidth::W4 => compare_as!(u32, a, b),
        ChunkWidth::W2 => compare_as!(u16, a, b),
        ChunkWidth::W1 => compare_as!(u8, a, b),
    }
}
