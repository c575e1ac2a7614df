//! The wall map: an immutable occupancy table over a rectangular cell space.
//!
//! A [`Grid`] is built once and never mutated afterwards. Each cell is
//! either open or a wall; there are no partial costs.

use thiserror::Error;

use crate::geom::{Dims, Pos};

/// Wire value for an open cell.
pub const OPEN: u8 = 0;
/// Wire value for a wall cell.
pub const WALL: u8 = 1;

/// Reasons a wall table cannot become a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDims { rows: i64, cols: i64 },

    #[error("wall table has {actual} cells, expected {expected} ({rows}x{cols})")]
    LengthMismatch {
        rows: i32,
        cols: i32,
        expected: usize,
        actual: usize,
    },

    #[error("wall table value {value} at index {index} is neither 0 nor 1")]
    InvalidCell { index: usize, value: u8 },

    #[error("ascii map rows have uneven widths (row {row} has {found}, expected {expected})")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Immutable obstacle map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    walls: Vec<bool>,
}

impl Grid {
    /// Build a grid from a row-major wall table of length `rows * cols`.
    pub fn new(rows: i32, cols: i32, walls: Vec<bool>) -> Result<Self, GridError> {
        let dims = checked_dims(rows.into(), cols.into())?;
        if walls.len() != dims.len() {
            return Err(GridError::LengthMismatch {
                rows,
                cols,
                expected: dims.len(),
                actual: walls.len(),
            });
        }
        Ok(Self { dims, walls })
    }

    /// Build a grid with no walls.
    pub fn open(rows: i32, cols: i32) -> Result<Self, GridError> {
        let dims = checked_dims(rows.into(), cols.into())?;
        Ok(Self {
            dims,
            walls: vec![false; dims.len()],
        })
    }

    /// Build a grid from the wire encoding: one byte per cell, `0` open,
    /// `1` wall. Dimensions arrive as wide integers and are range-checked.
    pub fn from_cells(rows: i64, cols: i64, cells: &[u8]) -> Result<Self, GridError> {
        let dims = checked_dims(rows, cols)?;
        if cells.len() != dims.len() {
            return Err(GridError::LengthMismatch {
                rows: dims.rows,
                cols: dims.cols,
                expected: dims.len(),
                actual: cells.len(),
            });
        }
        let walls = cells
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                OPEN => Ok(false),
                WALL => Ok(true),
                _ => Err(GridError::InvalidCell { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dims, walls })
    }

    /// Parse an ASCII map: `#` is a wall, any other character is open.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut walls = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row,
                    found,
                    expected: width,
                });
            }
            walls.extend(line.chars().map(|ch| ch == '#'));
        }
        let dims = dims_from_counts(lines.len(), width)?;
        Self::new(dims.rows, dims.cols, walls)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Always false: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.dims.contains(Pos::new(row, col))
    }

    /// Whether `(row, col)` is a wall. Cells outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        self.is_blocked_at(Pos::new(row, col))
    }

    /// [`Grid::is_blocked`] for a [`Pos`].
    #[inline]
    pub fn is_blocked_at(&self, p: Pos) -> bool {
        match self.dims.index(p) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        !self.is_blocked_at(p)
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.dims.index(p)
    }

    /// Position of a flat index.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        self.dims.pos(idx)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Wire encoding of the wall table (`0` open, `1` wall).
    pub fn to_cells(&self) -> Vec<u8> {
        self.walls
            .iter()
            .map(|&w| if w { WALL } else { OPEN })
            .collect()
    }
}

fn dims_from_counts(rows: usize, cols: usize) -> Result<Dims, GridError> {
    let wide = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
    checked_dims(wide(rows), wide(cols))
}

fn checked_dims(rows: i64, cols: i64) -> Result<Dims, GridError> {
    let valid = |v: i64| v > 0 && v <= i64::from(i32::MAX);
    if !valid(rows) || !valid(cols) {
        return Err(GridError::InvalidDims { rows, cols });
    }
    Ok(Dims::new(rows as i32, cols as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_length() {
        assert!(Grid::new(2, 3, vec![false; 6]).is_ok());
        assert_eq!(
            Grid::new(2, 3, vec![false; 5]),
            Err(GridError::LengthMismatch {
                rows: 2,
                cols: 3,
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn new_rejects_non_positive_dims() {
        assert!(matches!(
            Grid::new(0, 3, Vec::new()),
            Err(GridError::InvalidDims { .. })
        ));
        assert!(matches!(
            Grid::open(4, -1),
            Err(GridError::InvalidDims { .. })
        ));
        assert!(matches!(
            Grid::from_cells(1 << 40, 1, &[]),
            Err(GridError::InvalidDims { .. })
        ));
    }

    #[test]
    fn from_cells_rejects_unknown_values() {
        assert_eq!(
            Grid::from_cells(1, 3, &[0, 2, 1]),
            Err(GridError::InvalidCell { index: 1, value: 2 })
        );
        let g = Grid::from_cells(1, 3, &[0, 1, 0]).unwrap();
        assert!(g.is_blocked(0, 1));
        assert!(!g.is_blocked(0, 2));
        assert_eq!(g.to_cells(), vec![0, 1, 0]);
    }

    #[test]
    fn queries() {
        let g = Grid::parse(
            "
            ..#
            #..
            ",
        )
        .unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert!(g.in_bounds(1, 2));
        assert!(!g.in_bounds(2, 0));
        assert!(!g.in_bounds(0, -1));
        assert!(g.is_blocked(0, 2));
        assert!(g.is_blocked(1, 0));
        assert!(!g.is_blocked(1, 1));
        assert!(g.is_blocked(5, 5));
        assert_eq!(g.wall_count(), 2);
        assert_eq!(g.index(Pos::new(1, 1)), Some(4));
        assert_eq!(g.pos(4), Pos::new(1, 1));
    }

    #[test]
    fn oversized_ascii_counts_are_rejected() {
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            dims_from_counts(1, too_wide),
            Err(GridError::InvalidDims {
                rows: 1,
                cols: i64::from(i32::MAX) + 1
            })
        );
        assert!(matches!(
            dims_from_counts(usize::MAX, 3),
            Err(GridError::InvalidDims { .. })
        ));
        assert_eq!(dims_from_counts(2, 3), Ok(Dims::new(2, 3)));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("...\n..\n"),
            Err(GridError::Ragged {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert!(matches!(
            Grid::parse(""),
            Err(GridError::InvalidDims { .. })
        ));
    }
}
