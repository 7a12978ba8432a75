use std::fmt;

use gridroute_core::{Coord, OccupancyGrid};

use crate::heuristic::euclidean;

/// Total cost of a sequence of cells: the sum of Euclidean step lengths.
pub fn path_cost(cells: &[Coord]) -> f64 {
    cells.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}

/// A route from a start cell to an end cell, both included.
///
/// Consecutive cells are one 8-connected step apart. A route whose start
/// equals its end holds a single cell and costs nothing.
///
/// Deserializing reads only the cells: an empty list is rejected and the
/// cost is recomputed from the steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathCells"))]
pub struct Path {
    cells: Vec<Coord>,
    cost: f64,
}

impl Path {
    /// Wrap a cell sequence produced by a search. Must be non-empty.
    pub(crate) fn from_cells(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        let cost = path_cost(&cells);
        Self { cells, cost }
    }

    /// Sum of step costs (1 per orthogonal step, √2 per diagonal step).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path has at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell.
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell.
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// The cells from start to end.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Iterate over the cells from start to end.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Whether `c` lies on the path.
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Consume the path and return its cells.
    pub fn into_vec(self) -> Vec<Coord> {
        self.cells
    }

    /// Check the path against `grid`: every cell in bounds and passable,
    /// every step one of the eight unit moves.
    pub fn is_valid_on(&self, grid: &OccupancyGrid) -> bool {
        self.cells.iter().all(|&c| grid.is_passable(c))
            && self.cells.windows(2).all(|w| w[0].is_adjacent_8(w[1]))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathCells {
    cells: Vec<Coord>,
}

#[cfg(feature = "serde")]
impl TryFrom<PathCells> for Path {
    type Error = &'static str;

    fn try_from(raw: PathCells) -> Result<Self, Self::Error> {
        if raw.cells.is_empty() {
            return Err("a path needs at least one cell");
        }
        Ok(Self::from_cells(raw.cells))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn cost_sums_steps() {
        let p = Path::from_cells(vec![c(0, 0), c(1, 1), c(1, 2)]);
        assert!((p.cost() - (SQRT_2 + 1.0)).abs() < 1e-12);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), c(0, 0));
        assert_eq!(p.end(), c(1, 2));
    }

    #[test]
    fn single_cell_costs_nothing() {
        let p = Path::from_cells(vec![c(4, 4)]);
        assert_eq!(p.cost(), 0.0);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), p.end());
    }

    #[test]
    fn validity() {
        let g = OccupancyGrid::parse("..\n#.").unwrap();
        assert!(Path::from_cells(vec![c(0, 0), c(1, 1)]).is_valid_on(&g));
        // Blocked cell.
        assert!(!Path::from_cells(vec![c(0, 0), c(1, 0)]).is_valid_on(&g));
        // Jump of two.
        assert!(!Path::from_cells(vec![c(0, 0), c(0, 2)]).is_valid_on(&g));
        // Repeated cell is not a move.
        assert!(!Path::from_cells(vec![c(0, 0), c(0, 0)]).is_valid_on(&g));
    }

    #[test]
    fn display_lists_cells() {
        let p = Path::from_cells(vec![c(0, 1), c(1, 1)]);
        assert_eq!(p.to_string(), "(0, 1) -> (1, 1)");
    }
}
