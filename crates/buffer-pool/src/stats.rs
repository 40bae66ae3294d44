// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cumulative pool usage counters.
//!
//! [`PoolStats`] tracks how the pool is being used: reuse rates, peak live
//! bytes, and OOM events. Hosts read these to tune the budget.

/// Cumulative statistics about pool usage.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct PoolStats {
    /// Total number of acquire requests.
    pub total_acquires: u64,
    /// Acquires served from the free list.
    pub reuse_hits: u64,
    /// Acquires that required fresh memory.
    pub reuse_misses: u64,
    /// Acquires rejected because the budget was exhausted.
    pub oom_count: u64,
    /// High-water mark of live (not yet returned) bytes.
    pub peak_in_use_bytes: usize,
    /// Total number of buffers returned (lease drops).
    pub total_returns: u64,
}

impl PoolStats {
    /// Returns the free-list reuse ratio as a fraction in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if nothing has been acquired yet.
    pub fn reuse_ratio(&self) -> f64 {
        let total = self.reuse_hits + self.reuse_misses;
        if total == 0 {
            return 0.0;
        }
        self.reuse_hits as f64 / total as f64
    }

    pub(crate) fn record_hit(&mut self) {
        self.total_acquires += 1;
        self.reuse_hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.total_acquires += 1;
        self.reuse_misses += 1;
    }

    pub(crate) fn record_oom(&mut self) {
        self.total_acquires += 1;
        self.oom_count += 1;
    }

    pub(crate) fn record_return(&mut self) {
        self.total_returns += 1;
    }

    pub(crate) fn update_peak(&mut self, current_bytes: usize) {
        if current_bytes > self.peak_in_use_bytes {
            self.peak_in_use_bytes = current_bytes;
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} acquires ({} reused, {} fresh, {:.0}% reuse), {} OOMs, \
             peak {} B live, {} returns",
            self.total_acquires,
            self.reuse_hits,
            self.reuse_misses,
            self.reuse_ratio() * 100.0,
            self.oom_count,
            self.peak_in_use_bytes,
            self.total_returns,
        )
    }
}
