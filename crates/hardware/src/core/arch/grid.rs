//! Grid I/O.
//!
//! This module implements the square word matrices the machine reads from and writes
//! to. It provides:
//! 1. **Storage:** An `N`x`N` row-major matrix of words, zero at construction.
//! 2. **Coordinate Access:** `read(x, y)` and `write(x, y, value)`, addressing `grid[y][x]`.
//! 3. **Bounds Enforcement:** Coordinates outside `0..N` fail with `GridOutOfBounds`.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{MAX_IO_SIZE, Word};
use crate::common::error::VmError;

/// Square matrix of machine words.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Word>,
}

impl Grid {
    /// Creates a `size`x`size` grid of zeros.
    ///
    /// `size` is clamped to [`MAX_IO_SIZE`]; callers building from configuration
    /// reject larger sizes in [`Config::validate`](crate::config::Config::validate).
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_IO_SIZE);
        let cells = size
            .checked_mul(size)
            .map_or_else(Vec::new, |len| vec![0; len]);
        Self { size, cells }
    }

    /// Builds a `size`x`size` grid from rows of values.
    ///
    /// Short rows and missing rows are zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::GridOutOfBounds`] for the first value that does not fit.
    pub fn from_rows<R, I>(size: usize, rows: R) -> Result<Self, VmError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Word>,
    {
        let mut grid = Self::new(size);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, val) in row.into_iter().enumerate() {
                grid.write(x, y, val)?;
            }
        }
        Ok(grid)
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reads `grid[y][x]`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::GridOutOfBounds`] if either coordinate is `>= size()`.
    pub fn read(&self, x: usize, y: usize) -> Result<Word, VmError> {
        let idx = self.index(x, y)?;
        self.cells
            .get(idx)
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Writes `grid[y][x]`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::GridOutOfBounds`] if either coordinate is `>= size()`.
    pub fn write(&mut self, x: usize, y: usize, val: Word) -> Result<(), VmError> {
        let idx = self.index(x, y)?;
        let err = self.out_of_bounds(x, y);
        *self.cells.get_mut(idx).ok_or(err)? = val;
        Ok(())
    }

    /// Checks that `(x, y)` addresses a cell, returning its row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::GridOutOfBounds`] if either coordinate is `>= size()`.
    pub fn index(&self, x: usize, y: usize) -> Result<usize, VmError> {
        if x < self.size && y < self.size {
            Ok(y * self.size + x)
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    const fn out_of_bounds(&self, x: usize, y: usize) -> VmError {
        VmError::GridOutOfBounds {
            x,
            y,
            size: self.size,
        }
    }

    /// Iterates over the rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Word]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    /// Formats one row per line with tab-separated cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, val) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{val}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
