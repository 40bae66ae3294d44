// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The fixed-rank array container.

use crate::{ArrayError, Shape, Storage};
use buffer_pool::BufferPool;
use num_traits::Zero;
use std::fmt;

/// A contiguous, row-major array of rank `N` over a single element type.
///
/// The buffer is either owned — leased from a [`BufferPool`] and returned on
/// drop — or borrowed from an external `&mut [T]` whose owner keeps release
/// responsibility. In both modes the invariant
/// `buffer length == shape.num_elements()` holds after construction.
///
/// # Examples
/// ```
/// use array_core::{Array, Shape};
/// use buffer_pool::{BufferPool, PoolBudget};
///
/// let pool = BufferPool::new(PoolBudget::from_mb(1));
/// let mut a = Array::zeros(Shape::matrix(2, 3), &pool).unwrap();
/// a.set([1, 2], 9.0f32).unwrap();
/// assert_eq!(a.get([1, 2]).unwrap(), 9.0);
/// assert_eq!(a.get([0, 0]).unwrap(), 0.0);
/// ```
pub struct Array<'a, T, const N: usize> {
    pub(crate) shape: Shape<N>,
    pub(crate) storage: Storage<'a, T>,
}

/// An array that owns its buffer.
pub type ArrayBuf<T, const N: usize> = Array<'static, T, N>;

impl<T, const N: usize> Array<'static, T, N>
where
    T: Copy + 'static,
{
    /// Creates an array with every element set to zero.
    ///
    /// # Errors
    /// Returns [`ArrayError::Allocation`] if the pool cannot satisfy the
    /// request.
    pub fn zeros(shape: Shape<N>, pool: &BufferPool<T>) -> Result<Self, ArrayError>
    where
        T: Zero,
    {
        Self::full(shape, T::zero(), pool)
    }

    /// Creates an array with every element set to `value`.
    ///
    /// # Errors
    /// Returns [`ArrayError::Allocation`] if the pool cannot satisfy the
    /// request.
    pub fn full(shape: Shape<N>, value: T, pool: &BufferPool<T>) -> Result<Self, ArrayError> {
        let lease = pool.acquire(shape.num_elements(), value)?;
        Ok(Self {
            shape,
            storage: Storage::Owned(lease),
        })
    }

    /// Creates an array by copying an existing flat slice.
    ///
    /// The copy is independent: later writes through `values`' owner do not
    /// affect the array.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if
    /// `values.len() != shape.num_elements()`, or [`ArrayError::Allocation`]
    /// if the pool cannot satisfy the request.
    pub fn from_slice(
        shape: Shape<N>,
        values: &[T],
        pool: &BufferPool<T>,
    ) -> Result<Self, ArrayError> {
        let expected = shape.num_elements();
        if values.len() != expected {
            return Err(ArrayError::BufferSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        let lease = pool.acquire_copy(values)?;
        Ok(Self {
            shape,
            storage: Storage::Owned(lease),
        })
    }
}

impl<'a, T, const N: usize> Array<'a, T, N> {
    /// Wraps an external buffer without copying.
    ///
    /// The array never releases this memory; the external owner keeps sole
    /// responsibility for it, and the borrow checker keeps the array from
    /// outliving it.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if
    /// `buf.len() != shape.num_elements()`.
    pub fn from_mut_slice(shape: Shape<N>, buf: &'a mut [T]) -> Result<Self, ArrayError> {
        let expected = shape.num_elements();
        if buf.len() != expected {
            return Err(ArrayError::BufferSizeMismatch {
                expected,
                actual: buf.len(),
            });
        }
        Ok(Self {
            shape,
            storage: Storage::Borrowed(buf),
        })
    }

    /// Returns the array's shape.
    pub fn shape(&self) -> &Shape<N> {
        &self.shape
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.shape.num_elements()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the buffer is externally owned.
    pub fn is_borrowed(&self) -> bool {
        self.storage.is_borrowed()
    }

    /// Returns the flat buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the flat buffer mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Iterates over elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` iff both arrays agree on every axis extent.
    pub fn same_shape(&self, other: &Array<'_, T, N>) -> bool {
        self.shape == other.shape
    }

    pub(crate) fn from_parts(shape: Shape<N>, storage: Storage<'a, T>) -> Self {
        Self { shape, storage }
    }

    pub(crate) fn ensure_same_shape(
        &self,
        op: &'static str,
        other: &Array<'_, T, N>,
    ) -> Result<(), ArrayError> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(ArrayError::ShapeMismatch {
                op,
                lhs: self.shape.dims().to_vec(),
                rhs: other.shape.dims().to_vec(),
            })
        }
    }
}

impl<T: Copy, const N: usize> Array<'_, T, N> {
    /// Reads the element at an N-component index.
    ///
    /// # Errors
    /// Returns [`ArrayError::IndexOutOfRange`] when any component is outside
    /// its axis extent.
    pub fn get(&self, index: [usize; N]) -> Result<T, ArrayError> {
        let offset = self.offset_of(&index)?;
        Ok(self.storage.as_slice()[offset])
    }

    /// Overwrites the element at an N-component index.
    ///
    /// # Errors
    /// Returns [`ArrayError::IndexOutOfRange`] when any component is outside
    /// its axis extent.
    pub fn set(&mut self, index: [usize; N], value: T) -> Result<(), ArrayError> {
        let offset = self.offset_of(&index)?;
        self.storage.as_mut_slice()[offset] = value;
        Ok(())
    }

    /// Copies this array (owned or borrowed) into a fresh pool-backed one.
    pub fn to_owned_in(&self, pool: &BufferPool<T>) -> Result<ArrayBuf<T, N>, ArrayError>
    where
        T: 'static,
    {
        let lease = pool.acquire_copy(self.as_slice())?;
        Ok(Array::from_parts(self.shape, Storage::Owned(lease)))
    }

    fn offset_of(&self, index: &[usize; N]) -> Result<usize, ArrayError> {
        self.shape
            .linear_offset(index)
            .ok_or_else(|| ArrayError::IndexOutOfRange {
                index: index.to_vec(),
                shape: self.shape.dims().to_vec(),
            })
    }
}

impl<T, const N: usize> fmt::Debug for Array<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape)
            .field("len", &self.len())
            .field("borrowed", &self.is_borrowed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buffer_pool::PoolBudget;

    fn pool<T>() -> BufferPool<T> {
        BufferPool::new(PoolBudget::from_mb(1))
    }

    #[test]
    fn test_zeros() {
        let pool = pool::<f32>();
        let a = Array::zeros(Shape::matrix(2, 3), &pool).unwrap();
        assert_eq!(a.len(), 6);
        assert_eq!(a.shape(), &Shape::matrix(2, 3));
        assert!(a.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_full() {
        let pool = pool::<i64>();
        let a = Array::full(Shape::new([2, 2, 2]), -3i64, &pool).unwrap();
        assert_eq!(a.len(), 8);
        assert!(a.iter().all(|&x| x == -3));
    }

    #[test]
    fn test_zero_extent_shape() {
        let pool = pool::<f32>();
        let a = Array::zeros(Shape::new([2, 0, 3]), &pool).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.as_slice().len(), 0);
    }

    #[test]
    fn test_from_slice() {
        let pool = pool::<f32>();
        let a = Array::from_slice(Shape::matrix(2, 3), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &pool)
            .unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_slice_size_mismatch() {
        let pool = pool::<f32>();
        let result = Array::from_slice(Shape::matrix(2, 3), &[1.0, 2.0], &pool);
        assert!(matches!(
            result,
            Err(ArrayError::BufferSizeMismatch {
                expected: 6,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_copy_independence() {
        let pool = pool::<i32>();
        let mut source = vec![1, 2, 3, 4];
        let a = Array::from_slice(Shape::matrix(2, 2), &source, &pool).unwrap();

        source[0] = 99;
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let pool = pool::<f64>();
        let mut a = Array::zeros(Shape::matrix(2, 3), &pool).unwrap();

        a.set([1, 2], 7.5).unwrap();
        assert_eq!(a.get([1, 2]).unwrap(), 7.5);

        // Every other element is untouched.
        for r in 0..2 {
            for c in 0..3 {
                if (r, c) != (1, 2) {
                    assert_eq!(a.get([r, c]).unwrap(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let pool = pool::<f32>();
        let a = Array::zeros(Shape::matrix(2, 3), &pool).unwrap();
        assert!(matches!(
            a.get([2, 0]),
            Err(ArrayError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            a.get([0, 3]),
            Err(ArrayError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_set_out_of_range_leaves_buffer_untouched() {
        let pool = pool::<i32>();
        let mut a = Array::full(Shape::vector(3), 1, &pool).unwrap();
        assert!(a.set([3], 9).is_err());
        assert_eq!(a.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_borrowed_roundtrip() {
        let mut buf = vec![0.0f32; 6];
        let mut a = Array::from_mut_slice(Shape::matrix(2, 3), &mut buf).unwrap();
        assert!(a.is_borrowed());

        a.set([0, 1], 5.0).unwrap();
        drop(a);

        // The external buffer saw the write and is still owned by us.
        assert_eq!(buf[1], 5.0);
    }

    #[test]
    fn test_borrowed_size_mismatch() {
        let mut buf = vec![0.0f32; 5];
        let result = Array::from_mut_slice(Shape::matrix(2, 3), &mut buf);
        assert!(matches!(
            result,
            Err(ArrayError::BufferSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_owned_in_from_borrowed() {
        let pool = pool::<i32>();
        let mut buf = vec![1, 2, 3, 4];
        let a = Array::from_mut_slice(Shape::matrix(2, 2), &mut buf).unwrap();

        let owned = a.to_owned_in(&pool).unwrap();
        assert!(!owned.is_borrowed());
        assert_eq!(owned.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_format() {
        let pool = pool::<f32>();
        let a = Array::zeros(Shape::vector(4), &pool).unwrap();
        let debug = format!("{a:?}");
        assert!(debug.contains("Array"));
        assert!(debug.contains("shape"));
    }
}
