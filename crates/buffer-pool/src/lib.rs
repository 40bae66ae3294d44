// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # buffer-pool
//!
//! A budget-enforced buffer pool for array storage.
//!
//! # Key Components
//!
//! - [`PoolBudget`] — a hard memory ceiling with human-readable parsing
//!   (`"512M"`, `"1G"`, etc.).
//! - [`BufferPool`] — the allocator: enforces the budget, maintains a free
//!   list binned by capacity class, and tracks statistics.
//! - [`BufferLease`] — an RAII wrapper around acquired buffers. When a lease
//!   is dropped, the buffer goes back to the pool that handed it out. The
//!   borrow checker prevents use-after-free at compile time.
//! - [`PoolStats`] — cumulative allocator metrics (peak usage, reuse ratio,
//!   OOM count).
//!
//! # Ownership Model
//!
//! ```text
//! BufferPool::acquire(len, fill)
//!       │
//!       ▼
//!   BufferLease<T>  ◄─── owns Vec<T>, holds Arc<PoolShared<T>>
//!       │
//!       │  drop()
//!       ▼
//!   PoolShared::restore()  ──► free list
//! ```
//!
//! The pool hands out `BufferLease`s; each lease holds an `Arc` back to the
//! pool's shared state, so the buffer always returns to the allocator it came
//! from — exactly once, enforced by ownership rather than convention.
//!
//! # Example
//! ```
//! use buffer_pool::{BufferPool, PoolBudget};
//!
//! let pool = BufferPool::new(PoolBudget::from_mb(4));
//!
//! // 1024 f32 elements = 4096 bytes.
//! let lease = pool.acquire(1024, 0.0f32).unwrap();
//! assert_eq!(pool.in_use_bytes(), 4096);
//!
//! // Returning buffers is automatic.
//! drop(lease);
//! assert_eq!(pool.in_use_bytes(), 0);
//! ```

mod budget;
mod error;
mod lease;
pub mod pool;
mod stats;

pub use budget::PoolBudget;
pub use error::PoolError;
pub use lease::BufferLease;
pub use pool::BufferPool;
pub use stats::PoolStats;
