use crate::{Int, MatrixError, MAX_DIM};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The main Structure in this library
///
/// A fixed-capacity grid of [`Int`] of which only the
/// `[0, height) x [0, width)` logical region holds meaningful values. The
/// shape is set at construction and never changes afterwards; only cell
/// values can be mutated. The whole matrix lives inline (no heap), so
/// copying one is a plain `memcpy` and the result is fully independent of
/// the original.
///
/// Cells outside the logical region are zeroed at construction but carry no
/// meaning; do not rely on them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct FixedMatrix {
    height: usize,
    width: usize,

    // Row-major; indexed as cells[row][col]. Capacity is decoupled
    // from the logical height/width.
    cells: [[Int; MAX_DIM]; MAX_DIM],
}

/// The flat shape `FixedMatrix` takes on the wire: the logical region only,
/// row-major.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    height: usize,
    width: usize,
    cells: Vec<Int>,
}

impl From<FixedMatrix> for MatrixRepr {
    fn from(m: FixedMatrix) -> Self {
        let cells = m.render().flat_map(|row| row.iter().copied()).collect();
        MatrixRepr {
            height: m.height,
            width: m.width,
            cells,
        }
    }
}

impl TryFrom<MatrixRepr> for FixedMatrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        FixedMatrix::from_data(repr.height, repr.width, repr.cells)
    }
}

impl std::fmt::Display for FixedMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.render() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for FixedMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl FixedMatrix {
    fn check_size(height: usize, width: usize) -> Result<(), MatrixError> {
        if height > MAX_DIM || width > MAX_DIM {
            return Err(MatrixError::Dimension { height, width });
        }
        Ok(())
    }

    /// Creates a `FixedMatrix` whose cell at `(i, j)` is `gen(i, j)`, for
    /// every `(i, j)` in the `height x width` logical region.
    ///
    /// Returns an error if either dimension exceeds [`MAX_DIM`].
    pub fn from_fn<F>(height: usize, width: usize, gen: F) -> Result<Self, MatrixError>
    where
        F: Fn(usize, usize) -> Int,
    {
        Self::check_size(height, width)?;
        let mut cells = [[0; MAX_DIM]; MAX_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(height) {
            for (j, v) in row.iter_mut().enumerate().take(width) {
                *v = gen(i, j);
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Creates a `FixedMatrix` from a vector containing the elements of the
    /// logical region, row-major.
    ///
    /// Returns an error if either dimension exceeds [`MAX_DIM`] or if
    /// `data.len() != height * width`.
    pub fn from_data(height: usize, width: usize, data: Vec<Int>) -> Result<Self, MatrixError> {
        Self::check_size(height, width)?;
        if data.len() != height * width {
            return Err(MatrixError::DataLength {
                height,
                width,
                len: data.len(),
            });
        }
        Self::from_fn(height, width, |i, j| data[i * width + j])
    }

    /// Creates a `FixedMatrix` of `height` rows and `width` columns full of
    /// values `v`
    pub fn new(v: Int, height: usize, width: usize) -> Result<Self, MatrixError> {
        Self::from_fn(height, width, |_, _| v)
    }

    /// Creates an empty matrix (i.e., size 0x0)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            height: 0,
            width: 0,
            cells: [[0; MAX_DIM]; MAX_DIM],
        }
    }

    /// Checks whether a matrix has Zero columns and Zero rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height == 0 && self.width == 0
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Gets an element from the matrix
    pub fn get(&self, row: usize, col: usize) -> Result<Int, MatrixError> {
        if row < self.height && col < self.width {
            Ok(self.cells[row][col])
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Sets an element into the matrix
    pub fn set(&mut self, row: usize, col: usize, v: Int) -> Result<Int, MatrixError> {
        if row < self.height && col < self.width {
            self.cells[row][col] = v;
            Ok(v)
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Returns an iterator over the rows of the logical region, each row a
    /// `&[Int]` of the `width` values in column order.
    ///
    /// The traversal is read-only and lazy; calling `render()` again starts
    /// a fresh pass. Formatting the rows (e.g., for printing) is the
    /// caller's business, although the [`Display`](std::fmt::Display) impl
    /// covers the common space-separated case.
    pub fn render(&self) -> Rows<'_> {
        Rows {
            matrix: self,
            row: 0,
        }
    }

    /// Returns a new matrix of the same size where every cell of the logical
    /// region is `self`'s cell multiplied by `s`. `self` is not modified.
    ///
    /// Multiplication wraps on overflow, same as [`scale_this`](Self::scale_this).
    #[must_use]
    pub fn from_scale(&self, s: Int) -> Self {
        let mut ret = *self;
        ret.scale_this(s);
        ret
    }

    /// Multiplies every cell of the logical region by `s`, in place. The
    /// size does not change.
    ///
    /// Multiplication wraps on overflow, same as [`from_scale`](Self::from_scale).
    pub fn scale_this(&mut self, s: Int) {
        let (height, width) = self.size();

        #[cfg(not(feature = "parallel"))]
        self.cells[..height]
            .iter_mut()
            .for_each(|row| row[..width].iter_mut().for_each(|v| *v = v.wrapping_mul(s)));

        #[cfg(feature = "parallel")]
        self.cells[..height]
            .par_iter_mut()
            .for_each(|row| row[..width].iter_mut().for_each(|v| *v = v.wrapping_mul(s)));
    }

    /// Checks if two matrices have the same size and exactly the same values
    /// in their logical regions.
    pub fn compare(&self, other: &FixedMatrix) -> bool {
        if self.height != other.height || self.width != other.width {
            return false;
        }
        std::iter::zip(self.render(), other.render()).all(|(a, b)| a == b)
    }
}

impl std::ops::Mul<Int> for &FixedMatrix {
    type Output = FixedMatrix;

    fn mul(self, s: Int) -> Self::Output {
        self.from_scale(s)
    }
}

impl std::ops::MulAssign<Int> for FixedMatrix {
    fn mul_assign(&mut self, s: Int) {
        self.scale_this(s);
    }
}

/// Iterator over the rows of the logical region of a [`FixedMatrix`],
/// returned by [`FixedMatrix::render`].
pub struct Rows<'a> {
    matrix: &'a FixedMatrix,
    row: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [Int];

    fn next(&mut self) -> Option<Self::Item> {
        if self.row < self.matrix.height {
            let row = &self.matrix.cells[self.row][..self.matrix.width];
            self.row += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.matrix.height - self.row;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}
