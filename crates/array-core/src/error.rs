// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for array construction and element-wise operations.

use buffer_pool::PoolError;

/// Errors that can occur while building or combining arrays.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError {
    /// The pool could not satisfy a buffer request.
    #[error("allocation failed: {0}")]
    Allocation(#[from] PoolError),

    /// A flat sequence's length does not match the requested shape.
    #[error("buffer size mismatch: shape holds {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Two arrays have incompatible shapes for the requested operation.
    /// Raised before any allocation or mutation takes place.
    #[error("incompatible shapes for {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// An index component is outside its axis extent.
    #[error("index {index:?} out of range for shape {shape:?}")]
    IndexOutOfRange {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// The named axis does not exist for this rank.
    ///
    /// No current operation produces this; it is reserved for per-axis
    /// application.
    #[error("axis {axis} out of range for rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// Two arrays disagree on one axis extent.
    ///
    /// No current operation produces this; it is reserved for per-axis
    /// application.
    #[error("axis {axis} extent mismatch: {lhs} vs {rhs}")]
    AxisSizeMismatch {
        axis: usize,
        lhs: usize,
        rhs: usize,
    },
}
