// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # array-core
//!
//! Fixed-rank, contiguous n-dimensional arrays with element-wise transforms.
//!
//! This crate provides:
//! - [`Array`] — a rank-generic container over a single element type, stored
//!   row-major in one flat buffer.
//! - [`Shape`] — const-generic shape descriptor with row-major stride math.
//! - [`Storage`] — the two buffer ownership modes: owned (pool-leased) and
//!   borrowed (externally owned).
//! - The element-wise apply protocol ([`Array::zip_map`] and friends) and
//!   the [`Arith`] operator bundle for numeric element types.
//!
//! Owned buffers come from a [`buffer_pool::BufferPool`], which enforces a
//! hard memory budget and recycles returned buffers; borrowed buffers wrap
//! an external `&mut [T]` and are never released here.
//!
//! # Design Goals
//! - Rank and element type fixed at compile time; no broadcasting, no
//!   views or strides beyond the row-major contiguous layout, no numeric
//!   promotion.
//! - Shape compatibility checked before any allocation or mutation, so a
//!   failing operation never leaves a partial result.
//! - Clean error types via `thiserror`.
//!
//! # Example
//! ```
//! use array_core::{Array, Shape};
//! use buffer_pool::{BufferPool, PoolBudget};
//!
//! let pool = BufferPool::new(PoolBudget::from_mb(1));
//!
//! let a = Array::from_slice(Shape::matrix(2, 2), &[1.0f32, 2.0, 3.0, 4.0], &pool).unwrap();
//! let b = Array::full(Shape::matrix(2, 2), 10.0, &pool).unwrap();
//!
//! let sum = a.add(&b, &pool).unwrap();
//! assert_eq!(sum.as_slice(), &[11.0, 12.0, 13.0, 14.0]);
//! ```

mod apply;
mod array;
mod error;
mod numeric;
mod shape;
mod storage;

pub use array::{Array, ArrayBuf};
pub use error::ArrayError;
pub use numeric::{Arith, NumericElement};
pub use shape::Shape;
pub use storage::Storage;
