//! Budget-checked duplication of a byte region.

use crate::budget::AllocBudget;
#[cfg(not(unix))]
use crate::budget::Unbounded;
#[cfg(unix)]
use crate::budget::PhysicalMemoryBudget;
use crate::error::MemOpError;
use crate::width::ChunkWidth;

/// Append `$src` to `$dst` chunk-by-chunk as `$ty` words.
///
/// Each chunk is lifted into a word and re-serialised, moving N bytes
/// per step at the chosen width.
macro_rules! copy_as {
    ($ty:ty, $dst:expr, $src:expr) => {{
        const N: usize = std::mem::size_of::<$ty>();
        for chunk in $src.chunks_exact(N) {
            let mut word = [0u8; N];
            word.copy_from_slice(chunk);
            let value = <$ty>::from_ne_bytes(word);
            $dst.extend_from_slice(&value.to_ne_bytes());
        }
    }};
}

/// Duplicate the first `size` bytes of `src` into a new owned buffer.
///
/// Consults [`PhysicalMemoryBudget`] before allocating (on non-unix
/// targets, where total memory cannot be queried portably, the budget
/// is unbounded and the allocator is the only gate). The returned
/// `Vec<u8>` is exclusively owned by the caller and released by its
/// destructor.
///
/// # Errors
///
/// - [`MemOpError::InvalidRange`] when `size` is zero or exceeds
///   `src.len()`.
/// - [`MemOpError::OutOfMemory`] when the budget estimates the request
///   exceeds physical memory. Nothing is allocated on this path.
/// - [`MemOpError::AllocationFailed`] when the allocation itself fails.
///   No partial buffer is ever returned.
pub fn copy(src: &[u8], size: usize) -> Result<Vec<u8>, MemOpError> {
    #[cfg(unix)]
    let budget = PhysicalMemoryBudget;
    #[cfg(not(unix))]
    let budget = Unbounded;
    copy_with(src, size, &budget)
}

/// Duplicate the first `size` bytes of `src`, gated by an injected
/// allocation budget.
///
/// Identical to [`copy`] except the pre-allocation policy is supplied
/// by the caller, which makes the guardrail testable without reference
/// to the host's actual memory size.
///
/// # Errors
///
/// Same as [`copy`], with [`MemOpError::OutOfMemory`] produced by the
/// supplied `budget`.
pub fn copy_with(
    src: &[u8],
    size: usize,
    budget: &dyn AllocBudget,
) -> Result<Vec<u8>, MemOpError> {
    if size == 0 || size > src.len() {
        return Err(MemOpError::InvalidRange {
            size,
            available: src.len(),
        });
    }
    budget.check(size)?;

    let mut out = Vec::new();
    out.try_reserve_exact(size)
        .map_err(|_| MemOpError::AllocationFailed { requested: size })?;

    let src = &src[..size];
    match ChunkWidth::select(size) {
        ChunkWidth::W8 => copy_as!(u64, out, src),
        ChunkWidth::W4 => copy_as!(u32, out, src),
        ChunkWidth::W2 => copy_as!(u16, out, src),
        ChunkWidth::W1 => copy_as!(u8, out, src),
    }
    Ok(out)
}
