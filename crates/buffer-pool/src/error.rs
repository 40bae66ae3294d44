// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the buffer pool.

/// Errors that can occur while configuring or using the pool.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The requested allocation would exceed the pool budget.
    #[error("out of memory: requested {requested_bytes} bytes, but only {available_bytes} available (budget: {budget_bytes})")]
    OutOfMemory {
        requested_bytes: usize,
        available_bytes: usize,
        budget_bytes: usize,
    },

    /// A budget string could not be parsed.
    #[error("invalid budget: {0}")]
    InvalidBudget(String),
}
