//! Chunk width selection shared by all three operations.
//!
//! Every operation walks its buffers in fixed-size chunks. The width is
//! the widest of 8/4/2/1 bytes that evenly divides the usable length,
//! so the chunk loop can never read or write past the end of the region.

use std::fmt;

/// Byte granularity at which an operation's loop processes data.
///
/// Selection is a pure function of the usable length; the actual address
/// alignment of the buffers is never inspected. This is a deliberate
/// precision gap: an 8-byte-divisible length on a misaligned address
/// still selects [`ChunkWidth::W8`], which remains safe because chunks
/// are assembled with `from_ne_bytes` rather than reinterpreted in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkWidth {
    /// 8-byte chunks.
    W8,
    /// 4-byte chunks.
    W4,
    /// 2-byte chunks.
    W2,
    /// Single bytes.
    W1,
}

impl ChunkWidth {
    /// Select the widest chunk that evenly divides `len`.
    ///
    /// Falls through to [`ChunkWidth::W1`] when `len` is not a multiple
    /// of any wider chunk — every length is divisible by 1, so selection
    /// always succeeds. Zero lengths also land on `W1`; the resulting
    /// chunk loop simply runs zero iterations.
    pub fn select(len: usize) -> Self {
        if len >= 8 && len % 8 == 0 {
            Self::W8
        } else if len >= 4 && len % 4 == 0 {
            Self::W4
        } else if len >= 2 && len % 2 == 0 {
            Self::W2
        } else {
            Self::W1
        }
    }

    /// Chunk stride in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::W8 => 8,
            Self::W4 => 4,
            Self::W2 => 2,
            Self::W1 => 1,
        }
    }
}

impl fmt::Display for ChunkWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_eight_select_w8() {
        assert_eq!(ChunkWidth::select(8), ChunkWidth::W8);
        assert_eq!(ChunkWidth::select(64), ChunkWidth::W8);
        assert_eq!(ChunkWidth::select(4096), ChunkWidth::W8);
    }

    #[test]
    fn multiples_of_four_select_w4() {
        assert_eq!(ChunkWidth::select(4), ChunkWidth::W4);
        assert_eq!(ChunkWidth::select(12), ChunkWidth::W4);
        assert_eq!(ChunkWidth::select(100), ChunkWidth::W4);
    }

    #[test]
    fn multiples_of_two_select_w2() {
        assert_eq!(ChunkWidth::select(2), ChunkWidth::W2);
        assert_eq!(ChunkWidth::select(6), ChunkWidth::W2);
        assert_eq!(ChunkWidth::select(4098), ChunkWidth::W2);
    }

    #[test]
    fn odd_lengths_select_w1() {
        assert_eq!(ChunkWidth::select(1), ChunkWidth::W1);
        assert_eq!(ChunkWidth::select(3), ChunkWidth::W1);
        assert_eq!(ChunkWidth::select(4097), ChunkWidth::W1);
    }

    #[test]
    fn short_even_lengths_never_overshoot() {
        // Lengths below a stride must not select it even when divisible
        // (0 is divisible by everything).
        assert_eq!(ChunkWidth::select(0), ChunkWidth::W1);
        assert_eq!(ChunkWidth::select(4), ChunkWidth::W4);
        assert_eq!(ChunkWidth::select(2), ChunkWidth::W2);
    }

    #[test]
    fn display_shows_stride() {
        assert_eq!(ChunkWidth::W8.to_string(), "8B");
        assert_eq!(ChunkWidth::W1.to_string(), "1B");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selected_stride_divides_length(len in 1usize..1_000_000) {
                let w = ChunkWidth::select(len).bytes();
                prop_assert_eq!(len % w, 0);
                prop_assert!(len >= w);
            }

            #[test]
            fn selection_is_maximal(len in 1usize..1_000_000) {
                let w = ChunkWidth::select(len).bytes();
                for wider in [8usize, 4, 2] {
                    if wider > w {
                        // Any wider stride must fail the divisibility or
                        // minimum-length requirement.
                        prop_assert!(len < wider || len % wider != 0);
                    }
                }
            }
        }
    }
}
