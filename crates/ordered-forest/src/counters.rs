//! Operation counters shared by all tree engines.
//!
//! Each tree handle owns one [`OpCounters`] value instead of bumping
//! process-wide statics, so two trees never contaminate each other's
//! measurements. Harness code resets the counters immediately before the
//! operation it wants to measure and reads them immediately after.

/// Comparison / pointer-write counters for a single tree handle.
///
/// Counting discipline:
/// - one count per 3-way key comparison, and
/// - one count per write to a structural link (left / right / parent or
///   the root slot).
///
/// Color flips and plain link reads are free. Both counters are monotonic
/// between resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounters {
    comparisons: u64,
    pointer_ops: u64,
}

impl OpCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key comparisons since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Structural link writes since the last reset.
    pub fn pointer_ops(&self) -> u64 {
        self.pointer_ops
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub(crate) fn record_cmp(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub(crate) fn record_ptr(&mut self) {
        self.pointer_ops += 1;
    }
}
