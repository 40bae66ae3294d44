// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise application of caller-supplied functions.
//!
//! Four operation shapes: binary or scalar right-hand side, allocating or
//! in-place. Binary forms require identical shapes and check them before
//! any allocation or mutation, so a failed call leaves both operands
//! exactly as they were.

use crate::{Array, ArrayBuf, ArrayError, Storage};
use buffer_pool::BufferPool;

impl<T, const N: usize> Array<'_, T, N>
where
    T: Copy,
{
    /// Combines two arrays into a new one: `out[k] = f(self[k], other[k])`
    /// for every linear position `k`. Neither input is modified.
    ///
    /// # Errors
    /// Returns [`ArrayError::ShapeMismatch`] when the shapes differ on any
    /// axis, or [`ArrayError::Allocation`] when the pool cannot supply the
    /// output buffer.
    pub fn zip_map<F>(
        &self,
        other: &Array<'_, T, N>,
        pool: &BufferPool<T>,
        mut f: F,
    ) -> Result<ArrayBuf<T, N>, ArrayError>
    where
        F: FnMut(T, T) -> T,
        T: 'static,
    {
        self.ensure_same_shape("zip_map", other)?;
        let mut lease = pool.acquire_copy(self.as_slice())?;
        for (dst, &rhs) in lease.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *dst = f(*dst, rhs);
        }
        Ok(Array::from_parts(self.shape, Storage::Owned(lease)))
    }

    /// Folds another array into this one: `self[k] = f(&mut self[k],
    /// other[k])`. The shape check runs before any element is touched, so a
    /// mismatch leaves `self` unmodified.
    ///
    /// # Errors
    /// Returns [`ArrayError::ShapeMismatch`] when the shapes differ on any
    /// axis.
    pub fn zip_map_inplace<F>(
        &mut self,
        other: &Array<'_, T, N>,
        mut f: F,
    ) -> Result<(), ArrayError>
    where
        F: FnMut(&mut T, T),
    {
        self.ensure_same_shape("zip_map_inplace", other)?;
        for (lhs, &rhs) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            f(lhs, rhs);
        }
        Ok(())
    }

    /// Combines every element with a scalar into a new array:
    /// `out[k] = f(self[k], scalar)`.
    ///
    /// # Errors
    /// Returns [`ArrayError::Allocation`] when the pool cannot supply the
    /// output buffer.
    pub fn map_scalar<F>(
        &self,
        scalar: T,
        pool: &BufferPool<T>,
        mut f: F,
    ) -> Result<ArrayBuf<T, N>, ArrayError>
    where
        F: FnMut(T, T) -> T,
        T: 'static,
    {
        let mut lease = pool.acquire_copy(self.as_slice())?;
        for dst in lease.as_mut_slice() {
            *dst = f(*dst, scalar);
        }
        Ok(Array::from_parts(self.shape, Storage::Owned(lease)))
    }

    /// Folds a scalar into every element: `self[k] = f(&mut self[k], scalar)`.
    pub fn map_scalar_inplace<F>(&mut self, scalar: T, mut f: F)
    where
        F: FnMut(&mut T, T),
    {
        for lhs in self.as_mut_slice() {
            f(lhs, scalar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;
    use buffer_pool::PoolBudget;

    fn pool<T>() -> BufferPool<T> {
        BufferPool::new(PoolBudget::from_mb(1))
    }

    #[test]
    fn test_zip_map() {
        let pool = pool::<i32>();
        let a = Array::from_slice(Shape::matrix(2, 2), &[1, 2, 3, 4], &pool).unwrap();
        let b = Array::from_slice(Shape::matrix(2, 2), &[10, 20, 30, 40], &pool).unwrap();

        let out = a.zip_map(&b, &pool, |x, y| x + y).unwrap();
        assert_eq!(out.as_slice(), &[11, 22, 33, 44]);

        // Inputs untouched.
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let pool = pool::<i32>();
        let a = Array::from_slice(Shape::matrix(2, 2), &[1, 2, 3, 4], &pool).unwrap();
        let b = Array::from_slice(Shape::matrix(2, 3), &[0; 6], &pool).unwrap();

        let result = a.zip_map(&b, &pool, |x, y| x + y);
        assert!(matches!(result, Err(ArrayError::ShapeMismatch { .. })));
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[0; 6]);
    }

    #[test]
    fn test_zip_map_inplace() {
        let pool = pool::<f32>();
        let mut a = Array::from_slice(Shape::vector(3), &[1.0, 2.0, 3.0], &pool).unwrap();
        let b = Array::from_slice(Shape::vector(3), &[0.5, 0.5, 0.5], &pool).unwrap();

        a.zip_map_inplace(&b, |x, y| *x *= y).unwrap();
        assert_eq!(a.as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!(b.as_slice(), &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_zip_map_inplace_mismatch_leaves_operands() {
        let pool = pool::<f32>();
        let mut a = Array::from_slice(Shape::vector(3), &[1.0, 2.0, 3.0], &pool).unwrap();
        let b = Array::from_slice(Shape::vector(4), &[9.0; 4], &pool).unwrap();

        let result = a.zip_map_inplace(&b, |x, y| *x += y);
        assert!(matches!(result, Err(ArrayError::ShapeMismatch { .. })));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_map_scalar() {
        let pool = pool::<i32>();
        let a = Array::from_slice(Shape::matrix(2, 2), &[1, 2, 3, 4], &pool).unwrap();

        let out = a.map_scalar(10, &pool, |x, s| x * s).unwrap();
        assert_eq!(out.as_slice(), &[10, 20, 30, 40]);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_map_scalar_inplace() {
        let pool = pool::<i32>();
        let mut a = Array::from_slice(Shape::matrix(2, 2), &[1, 2, 3, 4], &pool).unwrap();

        a.map_scalar_inplace(3, |x, s| *x += s);
        assert_eq!(a.as_slice(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_apply_with_borrowed_operand() {
        let pool = pool::<i32>();
        let mut external = vec![5, 6, 7, 8];
        let borrowed = Array::from_mut_slice(Shape::matrix(2, 2), &mut external).unwrap();
        let owned = Array::from_slice(Shape::matrix(2, 2), &[1, 1, 1, 1], &pool).unwrap();

        let out = owned.zip_map(&borrowed, &pool, |x, y| x + y).unwrap();
        assert_eq!(out.as_slice(), &[6, 7, 8, 9]);
    }

    #[test]
    fn test_apply_on_empty_arrays() {
        let pool = pool::<f32>();
        let a = Array::zeros(Shape::new([0, 3]), &pool).unwrap();
        let b = Array::zeros(Shape::new([0, 3]), &pool).unwrap();

        let out = a.zip_map(&b, &pool, |x, y| x + y).unwrap();
        assert!(out.is_empty());
    }
}
