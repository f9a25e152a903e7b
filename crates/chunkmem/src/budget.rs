//! Pluggable pre-allocation budget policies.
//!
//! [`crate::copy`] consults a budget before touching the allocator so a
//! request that cannot plausibly succeed fails fast instead of driving
//! the system toward exhaustion. The policy is a trait so callers can
//! inject their own limit (and so the guardrail is testable without
//! depending on the host's installed memory).

use crate::error::MemOpError;

/// Decides whether an allocation of a given size may proceed.
pub trait AllocBudget {
    /// Check a request for `size` bytes.
    ///
    /// Implementations must not allocate.
    ///
    /// # Errors
    ///
    /// Returns [`MemOpError::OutOfMemory`] when the request exceeds the
    /// policy's limit.
    fn check(&self, size: usize) -> Result<(), MemOpError>;
}

/// Budget backed by the host's total physical memory.
///
/// Uses the page heuristic: the request is denied when its page count
/// (`size / page_size`) exceeds the machine's physical page count. This
/// is an estimate of a doomed allocation, not a reservation — memory
/// already in use by other processes is not consulted.
#[cfg(unix)]
#[derive(Clone, Copy, Debug, Default)]
pub struct PhysicalMemoryBudget;

#[cfg(unix)]
impl AllocBudget for PhysicalMemoryBudget {
    fn check(&self, size: usize) -> Result<(), MemOpError> {
        // sysconf reports -1 when a name is unsupported; treat that as
        // "unknown" and let the allocator be the judge.
        #[allow(unsafe_code)]
        let (page_size, phys_pages) =
            unsafe { (libc::sysconf(libc::_SC_PAGESIZE), libc::sysconf(libc::_SC_PHYS_PAGES)) };
        if page_size <= 0 || phys_pages < 0 {
            return Ok(());
        }
        let page_size = page_size as usize;
        let phys_pages = phys_pages as usize;
        if size / page_size > phys_pages {
            return Err(MemOpError::OutOfMemory {
                requested: size,
                budget: phys_pages.checked_mul(page_size),
            });
        }
        Ok(())
    }
}

/// Budget with a fixed byte limit (inclusive).
///
/// The workhorse for tests and for embedding callers that cap their own
/// allocations.
#[derive(Clone, Copy, Debug)]
pub struct FixedBudget {
    /// Largest request allowed through, in bytes.
    pub limit: usize,
}

impl AllocBudget for FixedBudget {
    fn check(&self, size: usize) -> Result<(), MemOpError> {
        if size > self.limit {
            return Err(MemOpError::OutOfMemory {
                requested: size,
                budget: Some(self.limit),
            });
        }
        Ok(())
    }
}

/// Budget that never denies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbounded;

impl AllocBudget for Unbounded {
    fn check(&self, _size: usize) -> Result<(), MemOpError> {
        Ok(())
    }
}
