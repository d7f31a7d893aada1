// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Validated 2-D grid dimensions and the coordinate mapping used by shelves.
//!
//! A shelf stores its slots in a single linear buffer, laid out row-major
//! with the *top* physical row first. The physical coordinate system exposed
//! to callers has its origin at the bottom-left: row `f = 1` is the bottom
//! row, column `c = 1` is the leftmost column. `GridDims` owns the mapping
//! between the two views so the shelf engine and its callers never disagree
//! on it:
//!
//! ```text
//! linear = (rows - f) * columns + (c - 1)
//! ```
//!
//! Placement scans the buffer from index 0 upward, so new stock lands in the
//! top physical row first; rendering walks the buffer in storage order and
//! therefore prints the shelf the way it stands, top row first.

/// The dimensions of a shelf grid: `rows × columns` slots.
///
/// Both dimensions are strictly positive. `GridDims` is a plain value type;
/// resizing a shelf replaces its `GridDims` wholesale.
///
/// # Examples
///
/// ```rust
/// use gantry_core::math::grid::GridDims;
///
/// let dims = GridDims::new(2, 3);
/// assert_eq!(dims.capacity(), 6);
/// // Bottom-left physical corner is the start of the last stored row.
/// assert_eq!(dims.flatten(1, 1), 3);
/// // Top-left physical corner is the start of the buffer.
/// assert_eq!(dims.flatten(2, 1), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridDims {
    rows: usize,
    columns: usize,
}

impl GridDims {
    /// Creates grid dimensions of `rows × columns`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[inline]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "called `GridDims::new` with a zero dimension: rows = {}, columns = {}",
            rows,
            columns
        );

        Self { rows, columns }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the total number of slots, `rows * columns`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Checks whether the 1-based physical coordinate `(f, c)` lies inside
    /// the grid.
    #[inline]
    pub const fn contains(&self, f: usize, c: usize) -> bool {
        f >= 1 && f <= self.rows && c >= 1 && c <= self.columns
    }

    /// Maps the 1-based physical coordinate `(f, c)` (row `f` counted from
    /// the bottom, column `c` from the left) to its linear storage index.
    ///
    /// # Panics
    ///
    /// Panics if `(f, c)` is outside the grid.
    #[inline]
    pub fn flatten(&self, f: usize, c: usize) -> usize {
        assert!(
            self.contains(f, c),
            "called `GridDims::flatten` with coordinates out of range: ({}, {}) on a {} grid",
            f,
            c,
            self
        );

        (self.rows - f) * self.columns + (c - 1)
    }

    /// Checked variant of [`GridDims::flatten`]; returns `None` when `(f, c)`
    /// is outside the grid.
    #[inline]
    pub fn try_flatten(&self, f: usize, c: usize) -> Option<usize> {
        if self.contains(f, c) {
            Some((self.rows - f) * self.columns + (c - 1))
        } else {
            None
        }
    }

    /// Inverse of [`GridDims::flatten`]: maps a linear storage index back to
    /// its 1-based physical coordinate `(f, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()` (debug builds only).
    #[inline]
    pub fn unflatten(&self, index: usize) -> (usize, usize) {
        debug_assert!(
            index < self.capacity(),
            "called `GridDims::unflatten` with index out of bounds: the capacity is {} but the index is {}",
            self.capacity(),
            index
        );

        let f = self.rows - index / self.columns;
        let c = index % self.columns + 1;
        (f, c)
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
