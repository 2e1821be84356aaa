//! Advisory, monotonically non-decreasing performance counters.
//!
//! These never gate correctness — they exist for the (out-of-scope)
//! benchmark harness to read. Updated with relaxed fetch-add, the weakest
//! ordering sufficient for a counter nothing synchronizes on.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    simd_ops: AtomicU64,
}

impl Counters {
    #[inline(always)]
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn record_simd_op(&self) {
        self.simd_ops.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> GraphStats {
        GraphStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            simd_ops: self.simd_ops.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time read of a [`Graph`](crate::Graph)'s counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub hits: u64,
    pub misses: u64,
    pub simd_ops: u64,
}
