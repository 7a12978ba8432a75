use gridroute_core::{Coord, OccupancyGrid};

/// Cached neighbour computation helper.
///
/// Enumerates the 8-connected neighbours of a cell that can be entered on a
/// given grid, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-directional neighbours of `c` that are inside `grid` and
    /// passable, in [`Coord::OFFSETS_8`] order.
    pub fn passable(&mut self, grid: &OccupancyGrid, c: Coord) -> &[Coord] {
        self.all(c, |n| grid.is_passable(n))
    }

    /// Return 8-directional neighbours of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three() {
        let g = OccupancyGrid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        let n = nb.passable(&g, Coord::new(0, 0));
        assert_eq!(n, &[Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn obstacles_are_filtered() {
        let g = OccupancyGrid::parse("...\n###\n...").unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(nb.passable(&g, Coord::new(0, 1)).len(), 2);
        assert_eq!(nb.passable(&g, Coord::new(1, 1)).len(), 6);
    }

    #[test]
    fn far_outside_the_grid_has_none() {
        let g = OccupancyGrid::new(2, 2).unwrap();
        let mut nb = Neighbors::new();
        assert!(nb.passable(&g, Coord::new(i32::MAX, 0)).is_empty());
        assert!(nb.passable(&g, Coord::new(i32::MIN, i32::MAX)).is_empty());
        assert_eq!(nb.all(Coord::new(i32::MAX, i32::MAX), |_| true).len(), 3);
    }

    #[test]
    fn custom_predicate() {
        let mut nb = Neighbors::default();
        let n = nb.all(Coord::new(0, 0), |c| c.row == 0);
        assert_eq!(n, &[Coord::new(0, 1), Coord::new(0, -1)]);
    }
}
