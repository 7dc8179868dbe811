use crate::MAX_DIM;
use thiserror::Error;

/// Error type for this crate.
///
/// Dimension misuse is always reported to the caller; it is never clamped or
/// truncated silently. Numeric overflow during scaling is NOT an error (see
/// [`FixedMatrix::from_scale`](crate::FixedMatrix::from_scale)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A requested size exceeds the fixed capacity.
    #[error("requested size {height}x{width} exceeds the fixed capacity {max}x{max}", max = MAX_DIM)]
    Dimension {
        /// The requested number of rows.
        height: usize,
        /// The requested number of columns.
        width: usize,
    },

    /// An element access fell outside the logical region of the matrix.
    #[error("position ({row}, {col}) is out of bounds for a {height}x{width} matrix")]
    OutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// The height of the matrix being accessed.
        height: usize,
        /// The width of the matrix being accessed.
        width: usize,
    },

    /// Flat data whose length does not match the requested size.
    #[error("data of length {len} does not fill a {height}x{width} matrix")]
    DataLength {
        /// The requested number of rows.
        height: usize,
        /// The requested number of columns.
        width: usize,
        /// The length of the data provided.
        len: usize,
    },
}
