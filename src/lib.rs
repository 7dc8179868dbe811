/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A library for small fixed-capacity integer matrices.
//!
//! A [`FixedMatrix`] owns a `MAX_DIM`x`MAX_DIM` grid of integers of which only
//! a `height`x`width` logical region is meaningful. There is no heap
//! allocation at all: matrices are plain values that can be copied, scaled
//! into a new copy, or scaled in place. Rendering is decoupled from any
//! output: [`FixedMatrix::render`] yields the rows of the logical region and
//! callers decide what to do with them.

/// The kind of integer stored in the
/// matrix... the `"wide"` feature means it becomes `i64`
/// and `i32` is used otherwise.
#[cfg(feature = "wide")]
pub type Int = i64;

/// The kind of integer stored in the
/// matrix... the `"wide"` feature means it becomes `i64`
/// and `i32` is used otherwise.
#[cfg(not(feature = "wide"))]
pub type Int = i32;

/// The fixed row and column capacity of every [`FixedMatrix`].
pub const MAX_DIM: usize = 100;

mod error;
pub use error::MatrixError;

mod fixed_matrix;
pub use fixed_matrix::{FixedMatrix, Rows};
