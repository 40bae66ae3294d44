// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Arithmetic helpers for numeric element types.
//!
//! [`Arith`] bundles the four arithmetic operations, each in a pure and a
//! mutating form, shaped to slot directly into the element-wise apply
//! protocol. The bundle instantiates only for primitive integer and float
//! types — [`NumericElement`] is deliberately not a blanket impl.

use crate::{Array, ArrayBuf, ArrayError};
use buffer_pool::BufferPool;
use std::marker::PhantomData;

/// Element types the arithmetic bundle accepts.
///
/// Implemented for the primitive integers and floats only; anything else is
/// rejected where the bundle is instantiated, not at call time.
pub trait NumericElement: Copy + num_traits::Num {}

macro_rules! impl_numeric_element {
    ($($ty:ty),* $(,)?) => {
        $(impl NumericElement for $ty {})*
    };
}

impl_numeric_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// The four arithmetic operations over a numeric element type.
///
/// Division treats a zero divisor as a fatal precondition violation and
/// panics — it never falls through to wrapping, infinity, or NaN semantics.
///
/// # Examples
/// ```
/// use array_core::Arith;
///
/// assert_eq!(Arith::<i32>::add(4, 2), 6);
///
/// let mut x = 4;
/// Arith::<i32>::add_assign(&mut x, 2);
/// assert_eq!(x, 6);
/// ```
pub struct Arith<T>(PhantomData<T>);

impl<T: NumericElement> Arith<T> {
    pub fn add(lhs: T, rhs: T) -> T {
        lhs + rhs
    }

    pub fn add_assign(lhs: &mut T, rhs: T) {
        *lhs = *lhs + rhs;
    }

    pub fn sub(lhs: T, rhs: T) -> T {
        lhs - rhs
    }

    pub fn sub_assign(lhs: &mut T, rhs: T) {
        *lhs = *lhs - rhs;
    }

    pub fn mul(lhs: T, rhs: T) -> T {
        lhs * rhs
    }

    pub fn mul_assign(lhs: &mut T, rhs: T) {
        *lhs = *lhs * rhs;
    }

    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div(lhs: T, rhs: T) -> T {
        assert!(rhs != T::zero(), "division by zero");
        lhs / rhs
    }

    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_assign(lhs: &mut T, rhs: T) {
        *lhs = Self::div(*lhs, rhs);
    }
}

impl<T, const N: usize> Array<'_, T, N>
where
    T: NumericElement + 'static,
{
    /// Element-wise sum into a new array.
    pub fn add(
        &self,
        other: &Array<'_, T, N>,
        pool: &BufferPool<T>,
    ) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.zip_map(other, pool, Arith::<T>::add)
    }

    /// Element-wise difference into a new array.
    pub fn sub(
        &self,
        other: &Array<'_, T, N>,
        pool: &BufferPool<T>,
    ) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.zip_map(other, pool, Arith::<T>::sub)
    }

    /// Element-wise product into a new array.
    pub fn mul(
        &self,
        other: &Array<'_, T, N>,
        pool: &BufferPool<T>,
    ) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.zip_map(other, pool, Arith::<T>::mul)
    }

    /// Element-wise quotient into a new array.
    ///
    /// # Panics
    /// Panics if any element of `other` is zero.
    pub fn div(
        &self,
        other: &Array<'_, T, N>,
        pool: &BufferPool<T>,
    ) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.zip_map(other, pool, Arith::<T>::div)
    }

    /// Adds `other` into `self` element-wise.
    pub fn add_assign(&mut self, other: &Array<'_, T, N>) -> Result<(), ArrayError> {
        self.zip_map_inplace(other, Arith::<T>::add_assign)
    }

    /// Subtracts `other` from `self` element-wise.
    pub fn sub_assign(&mut self, other: &Array<'_, T, N>) -> Result<(), ArrayError> {
        self.zip_map_inplace(other, Arith::<T>::sub_assign)
    }

    /// Multiplies `self` by `other` element-wise.
    pub fn mul_assign(&mut self, other: &Array<'_, T, N>) -> Result<(), ArrayError> {
        self.zip_map_inplace(other, Arith::<T>::mul_assign)
    }

    /// Divides `self` by `other` element-wise.
    ///
    /// # Panics
    /// Panics if any element of `other` is zero.
    pub fn div_assign(&mut self, other: &Array<'_, T, N>) -> Result<(), ArrayError> {
        self.zip_map_inplace(other, Arith::<T>::div_assign)
    }

    /// Adds a scalar to every element, into a new array.
    pub fn add_scalar(&self, rhs: T, pool: &BufferPool<T>) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.map_scalar(rhs, pool, Arith::<T>::add)
    }

    /// Subtracts a scalar from every element, into a new array.
    pub fn sub_scalar(&self, rhs: T, pool: &BufferPool<T>) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.map_scalar(rhs, pool, Arith::<T>::sub)
    }

    /// Multiplies every element by a scalar, into a new array.
    pub fn mul_scalar(&self, rhs: T, pool: &BufferPool<T>) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.map_scalar(rhs, pool, Arith::<T>::mul)
    }

    /// Divides every element by a scalar, into a new array.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_scalar(&self, rhs: T, pool: &BufferPool<T>) -> Result<ArrayBuf<T, N>, ArrayError> {
        self.map_scalar(rhs, pool, Arith::<T>::div)
    }

    /// Adds a scalar into every element in place.
    pub fn add_scalar_assign(&mut self, rhs: T) {
        self.map_scalar_inplace(rhs, Arith::<T>::add_assign)
    }

    /// Subtracts a scalar from every element in place.
    pub fn sub_scalar_assign(&mut self, rhs: T) {
        self.map_scalar_inplace(rhs, Arith::<T>::sub_assign)
    }

    /// Multiplies every element by a scalar in place.
    pub fn mul_scalar_assign(&mut self, rhs: T) {
        self.map_scalar_inplace(rhs, Arith::<T>::mul_assign)
    }

    /// Divides every element by a scalar in place.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_scalar_assign(&mut self, rhs: T) {
        self.map_scalar_inplace(rhs, Arith::<T>::div_assign)
    }
}
