//! In-place exchange of two byte regions.

use crate::error::MemOpError;
use crate::width::ChunkWidth;

/// XOR-swap two equal-length slices chunk-by-chunk as `$ty` words.
///
/// Three XORs per chunk pair, no temporary buffer. The word round-trip
/// through `from_ne_bytes`/`to_ne_bytes` is the safe rendition of
/// reinterpreting the regions at the chosen width.
macro_rules! xor_swap_as {
    ($ty:ty, $a:expr, $b:expr) => {{
        const N: usize = std::mem::size_of::<$ty>();
        for (ca, cb) in $a.chunks_exact_mut(N).zip($b.chunks_exact_mut(N)) {
            let mut word = [0u8; N];
            word.copy_from_slice(ca);
            let mut x = <$ty>::from_ne_bytes(word);
            word.copy_from_slice(cb);
            let mut y = <$ty>::from_ne_bytes(word);
            x ^= y;
            y ^= x;
            x ^= y;
            ca.copy_from_slice(&x.to_ne_bytes());
            cb.copy_from_slice(&y.to_ne_bytes());
        }
    }};
}

/// Exchange the first `size` bytes of `a` and `b` in place.
///
/// Runs chunk-by-chunk at the widest width dividing `size` (see
/// [`ChunkWidth::select`]), swapping each chunk pair with the XOR trick
/// so no auxiliary buffer is used. The regions cannot overlap: two
/// distinct `&mut [u8]` are disjoint by construction, so the classic
/// overlapping-XOR hazard (a region XOR-swapped with itself zeroes out)
/// is unrepresentable.
///
/// # Errors
///
/// Returns [`MemOpError::InvalidRange`] when `size` is zero or exceeds
/// either slice's length. Zero is rejected rather than treated as a
/// no-op: a zero-byte exchange is a caller bug, not a degenerate
/// success.
pub fn swap(a: &mut [u8], b: &mut [u8], size: usize) -> Result<(), MemOpError> {
    let available = a.len().min(b.len());
    if size == 0 || size > available {
        return Err(MemOpError::InvalidRange { size, available });
    }
    let a = &mut a[..size];
    let b = &mut b[..size];
    match ChunkWidth::select(size) {
        ChunkWidth::W8 => xor_swap_as!(u64, a, b),
        ChunkWidth::W4 => xor_swap_as!(u32, a, b),
        ChunkWidth::W2 => xor_swap_as!(u16, a, b),
        ChunkWidth::W1 => xor_swap_as!(u8, a, b),
    }
    Ok(())
}
