//! Geometry primitives: [`Pos`] and [`Dims`].
//!
//! Coordinates are zero-based `(row, col)` pairs with `(0, 0)` at the
//! top-left cell. Rows grow downwards, columns grow to the right.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on the grid.
///
/// Serialized as `{"r": row, "c": col}`, the shape used on the wire.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    pub row: i32,
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in expansion order: right, left, down, up.
    pub const CARDINALS: [Pos; 4] = [
        Pos::new(0, 1),
        Pos::new(0, -1),
        Pos::new(1, 0),
        Pos::new(-1, 0),
    ];

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four axis-aligned neighbours, in [`Pos::CARDINALS`] order.
    ///
    /// Neighbours are not bounds-checked.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is exactly one axis-aligned unit step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. A cell `(row, col)` is inside when
/// `0 <= row < rows` and `0 <= col < cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells, or 0 when either side is non-positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows as usize * self.cols as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside these dimensions.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Inverse of [`Dims::index`]. `idx` must be less than [`Dims::len`].
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let cols = self.cols.max(1) as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Iterate over all positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Pos> {
        (0..self.len()).map(move |i| self.pos(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_expansion_order() {
        let p = Pos::new(2, 2);
        assert_eq!(
            p.neighbors_4(),
            [
                Pos::new(2, 3),
                Pos::new(2, 1),
                Pos::new(3, 2),
                Pos::new(1, 2)
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Pos::new(0, 0).manhattan(Pos::new(4, 4)), 8);
        assert_eq!(Pos::new(3, 1).manhattan(Pos::new(1, 2)), 3);
        assert!(Pos::new(1, 1).is_adjacent(Pos::new(1, 2)));
        assert!(!Pos::new(1, 1).is_adjacent(Pos::new(2, 2)));
    }

    #[test]
    fn index_round_trip() {
        let d = Dims::new(3, 4);
        assert_eq!(d.len(), 12);
        assert_eq!(d.index(Pos::new(2, 1)), Some(9));
        assert_eq!(d.pos(9), Pos::new(2, 1));
        assert_eq!(d.index(Pos::new(3, 0)), None);
        assert_eq!(d.index(Pos::new(0, -1)), None);
    }

    #[test]
    fn empty_dims() {
        assert!(Dims::new(0, 5).is_empty());
        assert!(Dims::new(4, -1).is_empty());
        assert_eq!(Dims::new(-2, -3).len(), 0);
        assert!(!Dims::new(-2, -3).contains(Pos::ZERO));
    }

    #[test]
    fn iter_is_row_major() {
        let d = Dims::new(2, 2);
        let all: Vec<_> = d.iter().collect();
        assert_eq!(
            all,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1)
            ]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_uses_wire_field_names() {
        let json = serde_json::to_string(&Pos::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"r":3,"c":7}"#);
        let back: Pos = serde_json::from_str(r#"{"r":1,"c":2}"#).unwrap();
        assert_eq!(back, Pos::new(1, 2));
    }
}
