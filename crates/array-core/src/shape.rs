// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shape descriptors and row-major index math.

use std::fmt;

/// The extents of a [`crate::Array`], with rank fixed at the type level.
///
/// Shapes are immutable once created and provide the stride and offset
/// arithmetic for the row-major (C-order) layout: the last axis varies
/// fastest.
///
/// # Examples
/// ```
/// use array_core::Shape;
///
/// let s = Shape::new([2, 3, 4]);
/// assert_eq!(s.rank(), 3);
/// assert_eq!(s.num_elements(), 24);
/// assert_eq!(s.strides(), [12, 4, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape<const N: usize> {
    dims: [usize; N],
}

impl<const N: usize> Shape<N> {
    /// Creates a new shape from per-axis extents.
    pub fn new(dims: [usize; N]) -> Self {
        Self { dims }
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        N
    }

    /// Returns the extents as an array.
    pub fn dims(&self) -> &[usize; N] {
        &self.dims
    }

    /// Returns the total number of elements.
    ///
    /// A zero extent on any axis yields 0.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Computes row-major strides for this shape.
    ///
    /// The stride for axis `i` is the number of elements to skip in the
    /// flat buffer to advance one step along that axis.
    pub fn strides(&self) -> [usize; N] {
        let mut strides = [1usize; N];
        for axis in (0..N.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// Converts a multi-axis index to a flat buffer offset.
    ///
    /// Returns `None` when any component is outside its axis extent.
    pub fn linear_offset(&self, index: &[usize; N]) -> Option<usize> {
        let mut offset = 0;
        let mut stride = 1;
        for axis in (0..N).rev() {
            if index[axis] >= self.dims[axis] {
                return None;
            }
            offset += index[axis] * stride;
            stride *= self.dims[axis];
        }
        Some(offset)
    }
}

impl Shape<1> {
    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: [len] }
    }
}

impl Shape<2> {
    /// Creates a 2-D shape.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self { dims: [rows, cols] }
    }
}

impl<const N: usize> fmt::Display for Shape<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::from([2, 3])`.
impl<const N: usize> From<[usize; N]> for Shape<N> {
    fn from(dims: [usize; N]) -> Self {
        Self::new(dims)
    }
}

// Hand-written serde impls: serde has no `Deserialize` for `[usize; N]`
// with a generic N. A shape serializes as a plain sequence of extents, and
// deserialization rejects sequences whose length is not exactly N.

impl<const N: usize> serde::Serialize for Shape<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tup = serializer.serialize_tuple(N)?;
        for d in &self.dims {
            tup.serialize_element(d)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for Shape<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ExtentsVisitor<const N: usize>;

        impl<'de, const N: usize> serde::de::Visitor<'de> for ExtentsVisitor<N> {
            type Value = Shape<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} axis extents")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Shape<N>, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut dims = [0usize; N];
                for (i, slot) in dims.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<usize>()?.is_some() {
                    return Err(serde::de::Error::invalid_length(N + 1, &self));
                }
                Ok(Shape::new(dims))
            }
        }

        deserializer.deserialize_tuple(N, ExtentsVisitor::<N>)
    }
}
