//! 2-D character grid backing the view, status, and inventory fields.
//!
//! A `CharGrid` is a row-major flat byte buffer with a fixed column width,
//! the Rust-side shape of the simulator's rectangular `uint8` arrays
//! (rendered screen, tty buffer, per-slot inventory descriptions). Shape is
//! validated once at construction; everything downstream assumes a
//! well-formed rectangle.

use serde::{Deserialize, Serialize};

use crate::errors::{ScribeError, ScribeResult};

/// Rectangular grid of single-byte character codes, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl CharGrid {
    /// Build from a list of equal-width byte rows.
    ///
    /// A zero-row grid is valid (and renders to nothing); ragged rows are
    /// rejected with [`ScribeError::MalformedGrid`].
    pub fn from_rows(rows: Vec<Vec<u8>>) -> ScribeResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ScribeError::MalformedGrid {
                    message: format!("row {} has width {}, expected {}", i, row.len(), cols),
                });
            }
        }
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            data.extend_from_slice(&row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Build from a flat row-major buffer with an explicit shape.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<u8>) -> ScribeResult<Self> {
        if data.len() != rows * cols {
            return Err(ScribeError::MalformedGrid {
                message: format!(
                    "flat buffer holds {} bytes, shape {}x{} needs {}",
                    data.len(),
                    rows,
                    cols,
                    rows * cols
                ),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (0 for a zero-row grid).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `r` as a byte slice. Panics if `r >= rows`.
    #[inline]
    pub fn row(&self, r: usize) -> &[u8] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_rectangle() {
        let g = CharGrid::from_rows(vec![vec![b'a', b'b'], vec![b'c', b'd']]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 2);
        assert_eq!(g.row(1), b"cd");
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = CharGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(
            matches!(err, ScribeError::MalformedGrid { .. }),
            "ragged rows must be a shape error, got {err:?}"
        );
    }

    #[test]
    fn from_rows_empty_is_valid() {
        let g = CharGrid::from_rows(vec![]).unwrap();
        assert_eq!(g.rows(), 0);
        assert_eq!(g.cols(), 0);
        assert_eq!(g.iter_rows().count(), 0);
    }

    #[test]
    fn from_flat_checks_shape() {
        assert!(CharGrid::from_flat(2, 3, vec![0; 6]).is_ok());
        assert!(CharGrid::from_flat(2, 3, vec![0; 5]).is_err());
    }

    #[test]
    fn iter_rows_matches_row() {
        let g = CharGrid::from_flat(3, 2, b"abcdef".to_vec()).unwrap();
        let collected: Vec<&[u8]> = g.iter_rows().collect();
        assert_eq!(collected, vec![&b"ab"[..], &b"cd"[..], &b"ef"[..]]);
    }
}
