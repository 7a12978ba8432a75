use std::collections::BinaryHeap;

use gridroute_core::{Coord, OccupancyGrid};

use crate::config::{PathFinderConfig, TieBreak};
use crate::error::{Endpoint, PathError};
use crate::heuristic::euclidean;
use crate::neighbors::Neighbors;
use crate::node::{Node, OpenEntry};
use crate::path::Path;

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded (including the goal).
    pub expanded: usize,
    /// Entries pushed onto the frontier (including the start).
    pub pushed: usize,
    /// Outdated frontier entries skipped on pop.
    pub stale_skipped: usize,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// The best route, or `None` if the goal cannot be reached.
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// A* shortest-path search over an [`OccupancyGrid`] with 8-directional
/// movement and Euclidean step costs.
///
/// A `PathFinder` only holds configuration; every call builds and discards
/// its own search state, so one finder (and one grid) can serve many
/// searches, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: PathFinderConfig,
}

impl PathFinder {
    /// Create a finder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with the given configuration.
    pub fn with_config(config: PathFinderConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PathFinderConfig {
        &self.config
    }

    /// Compute the cheapest route from `start` to `end`.
    ///
    /// Returns the full path (including both endpoints) or `Ok(None)` if no
    /// path exists. Fails if an endpoint is outside the grid or the
    /// expansion limit is hit.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: Coord,
        end: Coord,
    ) -> Result<Option<Path>, PathError> {
        self.search(grid, start, end).map(|s| s.path)
    }

    /// Like [`find_path`](Self::find_path), also reporting [`SearchStats`].
    ///
    /// An obstacle at `start` is not rejected: the search is seeded from it
    /// anyway. An obstacle at `end` is never entered, so the result is
    /// `None` unless `start == end`.
    pub fn search(
        &self,
        grid: &OccupancyGrid,
        start: Coord,
        end: Coord,
    ) -> Result<Search, PathError> {
        let start_idx = endpoint_index(grid, start, Endpoint::Start)?;
        let goal_idx = endpoint_index(grid, end, Endpoint::End)?;

        let mut nodes = vec![Node::default(); grid.len()];
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut nbuf = Neighbors::new();
        let mut stats = SearchStats::default();
        let mut seq: u64 = 0;

        let mut push = |open: &mut BinaryHeap<OpenEntry>, idx: usize, c: Coord, g: f64| {
            let h = euclidean(c, end);
            let tie = match self.config.tie_break {
                TieBreak::LowerHeuristic => h,
                TieBreak::Insertion => 0.0,
            };
            open.push(OpenEntry {
                idx,
                f: g + h,
                g,
                tie,
                seq,
            });
            seq += 1;
        };

        nodes[start_idx].g = 0.0;
        push(&mut open, start_idx, start, 0.0);
        stats.pushed += 1;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if current.g > nodes[ci].g || nodes[ci].closed {
                stats.stale_skipped += 1;
                log::trace!("skipping stale entry for {}", grid.coord(ci));
                continue;
            }

            if ci == goal_idx {
                stats.expanded += 1;
                break 'search true;
            }

            if let Some(limit) = self.config.max_expansions {
                if stats.expanded >= limit {
                    log::debug!(
                        "search {start} -> {end} hit the expansion limit ({limit})"
                    );
                    return Err(PathError::ExpansionLimit { limit });
                }
            }
            stats.expanded += 1;

            nodes[ci].closed = true;
            let current_g = nodes[ci].g;
            let current_point = grid.coord(ci);

            for &np in nbuf.passable(grid, current_point) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative_g = current_g + euclidean(current_point, np);

                let n = &mut nodes[ni];
                if tentative_g >= n.g {
                    // Covers closed cells too: they only reopen on a
                    // strictly cheaper route.
                    continue;
                }

                n.g = tentative_g;
                n.parent = Some(ci);
                n.closed = false;

                push(&mut open, ni, np, tentative_g);
                stats.pushed += 1;
            }
        };

        let path = found.then(|| reconstruct(grid, &nodes, goal_idx));
        match &path {
            Some(p) => log::debug!(
                "route {start} -> {end}: {} cells, cost {:.3} ({stats:?})",
                p.len(),
                p.cost()
            ),
            None => log::debug!("no route {start} -> {end} ({stats:?})"),
        }

        Ok(Search { path, stats })
    }
}

/// Compute the cheapest route from `start` to `end` with the default
/// configuration.
///
/// See [`PathFinder::find_path`].
pub fn find_path(
    grid: &OccupancyGrid,
    start: Coord,
    end: Coord,
) -> Result<Option<Path>, PathError> {
    PathFinder::new().find_path(grid, start, end)
}

fn endpoint_index(grid: &OccupancyGrid, c: Coord, endpoint: Endpoint) -> Result<usize, PathError> {
    grid.index(c).ok_or(PathError::OutOfBounds {
        endpoint,
        coord: c,
        height: grid.height(),
        width: grid.width(),
    })
}

/// Walk predecessors back from the goal, then reverse into start..=goal.
fn reconstruct(grid: &OccupancyGrid, nodes: &[Node], goal_idx: usize) -> Path {
    let mut cells = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        cells.push(grid.coord(i));
        ci = nodes[i].parent;
    }
    cells.reverse();
    Path::from_cells(cells)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::reach::connected;
    use proptest::prelude::*;

    /// Exhaustive reference: relax every move until nothing changes.
    fn brute_force_cost(grid: &OccupancyGrid, start: Coord, end: Coord) -> Option<f64> {
        let mut dist = vec![f64::INFINITY; grid.len()];
        dist[grid.index(start)?] = 0.0;
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..grid.len() {
                if dist[i].is_infinite() {
                    continue;
                }
                let u = grid.coord(i);
                for v in u.neighbors_8() {
                    if !grid.is_passable(v) {
                        continue;
                    }
                    let Some(j) = grid.index(v) else {
                        continue;
                    };
                    let d = dist[i] + euclidean(u, v);
                    if d < dist[j] - 1e-12 {
                        dist[j] = d;
                        changed = true;
                    }
                }
            }
        }
        let d = dist[grid.index(end)?];
        d.is_finite().then_some(d)
    }

    fn arb_case() -> impl Strategy<Value = (OccupancyGrid, Coord, Coord)> {
        (1usize..=6, 1usize..=6).prop_flat_map(|(h, w)| {
            (
                prop::collection::vec(prop::bool::weighted(0.3), h * w),
                0..h * w,
                0..h * w,
            )
                .prop_map(move |(blocked, s, e)| {
                    let rows: Vec<Vec<u8>> = blocked
                        .chunks(w)
                        .map(|r| r.iter().map(|&b| u8::from(b)).collect())
                        .collect();
                    let grid = OccupancyGrid::from_rows(rows).unwrap();
                    let (start, end) = (grid.coord(s), grid.coord(e));
                    (grid, start, end)
                })
        })
    }

    proptest! {
        #[test]
        fn cost_matches_exhaustive_search((grid, start, end) in arb_case()) {
            let found = find_path(&grid, start, end).unwrap();
            match brute_force_cost(&grid, start, end) {
                Some(best) => {
                    let p = found.expect("reachable goal must yield a path");
                    prop_assert!((p.cost() - best).abs() < 1e-9, "{} vs {}", p.cost(), best);
                }
                None => prop_assert!(found.is_none()),
            }
        }

        #[test]
        fn paths_are_valid((grid, start, end) in arb_case()) {
            if let Some(p) = find_path(&grid, start, end).unwrap() {
                prop_assert_eq!(p.start(), start);
                prop_assert_eq!(p.end(), end);
                for w in p.cells().windows(2) {
                    prop_assert!(w[0].is_adjacent_8(w[1]));
                }
                // Every cell after the seed is passable and in bounds.
                for &c in &p.cells()[1..] {
                    prop_assert!(grid.is_passable(c));
                }
            }
        }

        #[test]
        fn not_found_iff_disconnected((grid, start, end) in arb_case()) {
            let found = find_path(&grid, start, end).unwrap();
            prop_assert_eq!(found.is_some(), connected(&grid, start, end));
        }

        #[test]
        fn repeated_searches_agree((grid, start, end) in arb_case()) {
            for tb in [TieBreak::LowerHeuristic, TieBreak::Insertion] {
                let finder = PathFinder::with_config(PathFinderConfig::default().with_tie_break(tb));
                let a = finder.find_path(&grid, start, end).unwrap();
                let b = finder.find_path(&grid, start, end).unwrap();
                prop_assert_eq!(&a, &b);
                let reference = find_path(&grid, start, end).unwrap();
                match (a, reference) {
                    (Some(p), Some(r)) => {
                        prop_assert!((p.cost() - r.cost()).abs() < 1e-9, "{} vs {}", p.cost(), r.cost());
                    }
                    (a, r) => prop_assert_eq!(a.is_some(), r.is_some()),
                }
            }
        }
    }
}
