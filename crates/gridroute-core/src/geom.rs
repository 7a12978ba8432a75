//! Geometry primitives: [`Coord`] and the 8-connected move offsets.
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! rightward, matching how an occupancy grid literal is written.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell coordinate `(row, col)`.
///
/// Equality, hashing and ordering are by value (row-major order), so a
/// `Coord` can be used directly as a map or set key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// The eight single-step moves, orthogonal first, then diagonal:
    /// right, left, down, up, down-right, down-left, up-right, up-left.
    pub const OFFSETS_8: [Coord; 8] = [
        Coord::new(0, 1),
        Coord::new(0, -1),
        Coord::new(1, 0),
        Coord::new(-1, 0),
        Coord::new(1, 1),
        Coord::new(1, -1),
        Coord::new(-1, 1),
        Coord::new(-1, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    ///
    /// Overflows like plain `i32` addition; see [`checked_add`](Self::checked_add).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Component-wise addition, or `None` if either component overflows.
    #[inline]
    pub const fn checked_add(self, d: Coord) -> Option<Coord> {
        match (self.row.checked_add(d.row), self.col.checked_add(d.col)) {
            (Some(row), Some(col)) => Some(Coord::new(row, col)),
            _ => None,
        }
    }

    /// The neighbours in [`OFFSETS_8`](Self::OFFSETS_8) order. Moves that
    /// would leave the `i32` range are skipped.
    #[inline]
    pub fn neighbors_8(self) -> impl Iterator<Item = Coord> {
        Self::OFFSETS_8
            .into_iter()
            .filter_map(move |d| self.checked_add(d))
    }

    /// Whether `other` is exactly one 8-connected step away.
    #[inline]
    pub fn is_adjacent_8(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

// --- trait impls for Coord ---

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
