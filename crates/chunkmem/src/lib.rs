//! Width-dispatched bulk memory primitives: swap, copy, and compare.
//!
//! Each operation walks its byte buffers in chunks of the widest width
//! in {8, 4, 2, 1} bytes that evenly divides the usable length (see
//! [`ChunkWidth::select`]). The width policy looks only at the length,
//! never at pointer alignment, and guarantees the chunk loop stays
//! inside the region. All three operations are stateless, synchronous,
//! and complete in time proportional to the byte count.
//!
//! # Quick start
//!
//! ```rust
//! use chunkmem::{compare, copy, swap};
//!
//! let mut a = [1u8, 2, 3, 4];
//! let mut b = [5u8, 6, 7, 8];
//!
//! // In-place XOR exchange at 4-byte width.
//! swap(&mut a, &mut b, 4)?;
//! assert_eq!(a, [5, 6, 7, 8]);
//!
//! // Owned duplicate, budget-checked before allocation.
//! let dup = copy(&a, 4)?;
//! assert_eq!(compare(&a, &dup), 0);
//! # Ok::<(), chunkmem::MemOpError>(())
//! ```
//!
//! # Contracts worth reading twice
//!
//! - [`compare`] examines only the overlapping prefix and tie-breaks at
//!   chunk granularity, not byte granularity — see its docs before
//!   treating the result as anything finer than a sign.
//! - [`copy`] consults an allocation budget ([`AllocBudget`]) before
//!   touching the allocator; [`copy_with`] lets callers inject their
//!   own policy.
//! - Timing instrumentation is opt-in via [`probe::observed`] and never
//!   changes results.
//!
//! # Safety
//!
//! `unsafe` is denied crate-wide with a single exception: the two
//! `sysconf` calls inside [`budget::PhysicalMemoryBudget`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod budget;
pub mod compare;
pub mod copy;
pub mod error;
pub mod probe;
pub mod swap;
pub mod width;

#[cfg(unix)]
pub use budget::PhysicalMemoryBudget;
pub use budget::{AllocBudget, FixedBudget, Unbounded};
pub use compare::compare;
pub use copy::{copy, copy_with};
pub use error::MemOpError;
pub use probe::{OpKind, OpMetrics, OpProbe};
pub use swap::swap;
pub use width::ChunkWidth;
