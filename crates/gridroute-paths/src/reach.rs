//! Reachability by flood fill.

use gridroute_core::{Coord, OccupancyGrid};

use crate::neighbors::Neighbors;

/// Flood-fill from `from` and return every cell reachable with 8-connected
/// moves through passable cells, `from` included.
///
/// Returns an empty list if `from` is outside the grid. Like the search,
/// an obstacle at `from` itself is still used as the seed.
pub fn reachable(grid: &OccupancyGrid, from: Coord) -> Vec<Coord> {
    let mut result = Vec::new();
    let Some(si) = grid.index(from) else {
        return result;
    };

    let mut seen = vec![false; grid.len()];
    let mut stack = vec![si];
    let mut nbuf = Neighbors::new();
    seen[si] = true;
    result.push(from);

    while let Some(ci) = stack.pop() {
        let cp = grid.coord(ci);
        for &np in nbuf.passable(grid, cp) {
            if let Some(ni) = grid.index(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(np);
                }
            }
        }
    }

    result
}

/// Whether a route exists from `a` to `b`.
///
/// Agrees with [`find_path`](crate::find_path) returning `Some` for
/// in-bounds endpoints.
pub fn connected(grid: &OccupancyGrid, a: Coord, b: Coord) -> bool {
    if a == b {
        return grid.contains(a);
    }
    if !grid.is_passable(b) {
        return false;
    }
    reachable(grid, a).contains(&b)
}
