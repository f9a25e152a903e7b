//! Injected timing instrumentation for the bulk operations.
//!
//! The wrappers in [`observed`] time each call with wall-clock
//! [`Instant`]s and report the selected chunk width and byte count to a
//! caller-supplied [`OpProbe`]. They return exactly what the plain
//! operations return — the probe is observability only and never
//! affects results. Failed operations record nothing, since their chunk
//! loop never ran.

use std::time::Instant;

use crate::width::ChunkWidth;

/// Which operation a metrics sample describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// An in-place exchange ([`crate::swap`]).
    Swap,
    /// A duplication ([`crate::copy`]).
    Copy,
    /// A prefix comparison ([`crate::compare`]).
    Compare,
}

/// One timed operation: the width its loop ran at, the bytes it walked,
/// and how long it took.
#[derive(Clone, Debug)]
pub struct OpMetrics {
    /// The operation that produced this sample.
    pub op: OpKind,
    /// Chunk width the operation selected.
    pub width: ChunkWidth,
    /// Usable byte count the operation processed.
    pub bytes: usize,
    /// Wall-clock time for the operation, in microseconds.
    pub elapsed_us: u64,
}

/// Sink for operation metrics.
pub trait OpProbe {
    /// Record one completed operation.
    fn record(&mut self, metrics: &OpMetrics);
}

/// Instrumented wrappers around the plain operations.
pub mod observed {
    use super::{Instant, OpKind, OpMetrics, OpProbe};
    use crate::error::MemOpError;
    use crate::width::ChunkWidth;

    /// [`crate::swap`] with timing reported to `probe`.
    ///
    /// # Errors
    ///
    /// Same as [`crate::swap`]; nothing is recorded on error.
    pub fn swap(
        a: &mut [u8],
        b: &mut [u8],
        size: usize,
        probe: &mut dyn OpProbe,
    ) -> Result<(), MemOpError> {
        let start = Instant::now();
        crate::swap(a, b, size)?;
        probe.record(&OpMetrics {
            op: OpKind::Swap,
            width: ChunkWidth::select(size),
            bytes: size,
            elapsed_us: start.elapsed().as_micros() as u64,
        });
        Ok(())
    }

    /// [`crate::copy`] with timing reported to `probe`.
    ///
    /// # Errors
    ///
    /// Same as [`crate::copy`]; nothing is recorded on error.
    pub fn copy(
        src: &[u8],
        size: usize,
        probe: &mut dyn OpProbe,
    ) -> Result<Vec<u8>, MemOpError> {
        let start = Instant::now();
        let out = crate::copy(src, size)?;
        probe.record(&OpMetrics {
            op: OpKind::Copy,
            width: ChunkWidth::select(size),
            bytes: size,
            elapsed_us: start.elapsed().as_micros() as u64,
        });
        Ok(out)
    }

    /// [`crate::compare`] with timing reported to `probe`.
    pub fn compare(a: &[u8], b: &[u8], probe: &mut dyn OpProbe) -> i64 {
        let start = Instant::now();
        let result = crate::compare(a, b);
        let usable = a.len().min(b.len());
        probe.record(&OpMetrics {
            op: OpKind::Compare,
            width: ChunkWidth::select(usable),
            bytes: usable,
            elapsed_us: start.elapsed().as_micros() as u64,
        });
        result
    }
}
