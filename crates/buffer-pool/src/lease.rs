// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RAII lease over a pool-allocated buffer.
//!
//! [`BufferLease`] is the mechanism through which Rust's ownership model
//! enforces the release-exactly-once contract. When a lease is dropped, its
//! buffer goes back to the free list of the pool that allocated it and the
//! live-bytes counter is decremented. The borrow checker prevents
//! use-after-free at compile time.

use crate::pool::PoolShared;
use std::fmt;
use std::sync::Arc;

/// An RAII lease over an acquired buffer.
///
/// When a `BufferLease` is dropped, its memory is automatically returned to
/// the [`BufferPool`](crate::BufferPool) that handed it out.
///
/// # Example
/// ```ignore
/// let lease = pool.acquire(1024, 0.0f32)?;
/// lease.as_slice();          // use the buffer
/// drop(lease);               // memory returned to pool
/// // lease.as_slice();       // compile error — moved value
/// ```
pub struct BufferLease<T> {
    /// The buffer. Wrapped in `Option` so `drop()` can `take()` it.
    data: Option<Vec<T>>,
    /// Handle back to the pool for the return path.
    shared: Arc<PoolShared<T>>,
    /// Live bytes this lease accounts for.
    bytes: usize,
    /// Free-list bin this buffer returns to.
    class: usize,
}

impl<T> BufferLease<T> {
    pub(crate) fn new(data: Vec<T>, shared: Arc<PoolShared<T>>, bytes: usize, class: usize) -> Self {
        Self {
            data: Some(data),
            shared,
            bytes,
            class,
        }
    }

    /// Returns an immutable view of the buffer.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_ref().expect("buffer already consumed")
    }

    /// Returns a mutable view of the buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut().expect("buffer already consumed")
    }

    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the live bytes this lease accounts for against the budget.
    pub fn size_bytes(&self) -> usize {
        self.bytes
    }
}

impl<T> Drop for BufferLease<T> {
    fn drop(&mut self) {
        if let Some(buffer) = self.data.take() {
            // Zero-length leases never touched the budget or the free list.
            if self.bytes > 0 {
                self.shared.restore(buffer, self.bytes, self.class);
            }
        }
    }
}

impl<T> fmt::Debug for BufferLease<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferLease")
            .field("len", &self.data.as_ref().map_or(0, Vec::len))
            .field("size_bytes", &self.bytes)
            .finish()
    }
}
