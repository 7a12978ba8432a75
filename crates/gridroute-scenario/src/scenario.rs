//! Start/end selection for route searches.
//!
//! Scenarios are threaded explicitly through a [`ScenarioProvider`] instead
//! of living in shared state, so every search is a pure function of the
//! grid and the pair it is handed.

use gridroute_core::{Coord, OccupancyGrid};
use rand::{Rng, RngExt};

use crate::error::ScenarioError;

/// A start and end cell for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub start: Coord,
    pub end: Coord,
}

impl Scenario {
    /// Create a new scenario.
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}

/// Supplies the endpoints of the next search on a grid.
pub trait ScenarioProvider {
    /// Choose a scenario for `grid`.
    fn next_scenario(&mut self, grid: &OccupancyGrid) -> Result<Scenario, ScenarioError>;
}

/// A provider that always returns the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScenario {
    scenario: Scenario,
}

impl FixedScenario {
    /// Create a provider for the given endpoints.
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self {
            scenario: Scenario::new(start, end),
        }
    }

    /// The pair this provider returns.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }
}

impl ScenarioProvider for FixedScenario {
    fn next_scenario(&mut self, grid: &OccupancyGrid) -> Result<Scenario, ScenarioError> {
        for coord in [self.scenario.start, self.scenario.end] {
            if !grid.contains(coord) {
                return Err(ScenarioError::OutOfBounds { coord });
            }
        }
        Ok(self.scenario)
    }
}

/// Settings for [`RandomScenario`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomScenarioConfig {
    /// How many pairs to draw before giving up.
    pub max_attempts: usize,
    /// Also reject pairs whose endpoints are not connected.
    pub require_connected: bool,
}

impl Default for RandomScenarioConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            require_connected: false,
        }
    }
}

/// A provider that draws uniformly random endpoints, rejecting any pair
/// where either cell is an obstacle.
///
/// Start and end are drawn together and independently over all in-bounds
/// cells, so the accepted pair is uniform over passable cells and may have
/// `start == end`.
pub struct RandomScenario<R: Rng> {
    pub rng: R,
    config: RandomScenarioConfig,
}

impl<R: Rng> RandomScenario<R> {
    /// Create a provider with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, RandomScenarioConfig::default())
    }

    /// Create a provider with the given configuration.
    pub fn with_config(rng: R, config: RandomScenarioConfig) -> Self {
        Self { rng, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RandomScenarioConfig {
        &self.config
    }

    fn random_cell(&mut self, grid: &OccupancyGrid) -> Coord {
        Coord::new(
            self.rng.random_range(0..grid.height()) as i32,
            self.rng.random_range(0..grid.width()) as i32,
        )
    }
}

impl<R: Rng> ScenarioProvider for RandomScenario<R> {
    fn next_scenario(&mut self, grid: &OccupancyGrid) -> Result<Scenario, ScenarioError> {
        if grid.passable_count() == 0 {
            return Err(ScenarioError::NoPassableCells);
        }

        for attempt in 1..=self.config.max_attempts {
            let start = self.random_cell(grid);
            let end = self.random_cell(grid);

            if !grid.is_passable(start) || !grid.is_passable(end) {
                log::trace!("rejected {start} -> {end}: obstacle");
                continue;
            }
            if self.config.require_connected && !gridroute_paths::connected(grid, start, end) {
                log::trace!("rejected {start} -> {end}: not connected");
                continue;
            }

            log::debug!("picked {start} -> {end} after {attempt} attempt(s)");
            return Ok(Scenario::new(start, end));
        }

        Err(ScenarioError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::delivery_grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_returns_its_pair() {
        let g = delivery_grid().unwrap();
        let mut p = FixedScenario::new(Coord::new(0, 1), Coord::new(8, 6));
        let s = p.next_scenario(&g).unwrap();
        assert_eq!(s, Scenario::new(Coord::new(0, 1), Coord::new(8, 6)));
        assert_eq!(p.next_scenario(&g).unwrap(), s);
    }

    #[test]
    fn fixed_rejects_out_of_bounds() {
        let g = OccupancyGrid::new(3, 3).unwrap();
        let mut p = FixedScenario::new(Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(
            p.next_scenario(&g),
            Err(ScenarioError::OutOfBounds {
                coord: Coord::new(3, 0)
            })
        );
    }

    #[test]
    fn random_endpoints_are_passable() {
        let g = delivery_grid().unwrap();
        let mut p = RandomScenario::new(StdRng::seed_from_u64(42));
        for _ in 0..200 {
            let s = p.next_scenario(&g).unwrap();
            assert!(g.is_passable(s.start));
            assert!(g.is_passable(s.end));
        }
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let g = delivery_grid().unwrap();
        let mut a = RandomScenario::new(StdRng::seed_from_u64(7));
        let mut b = RandomScenario::new(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            assert_eq!(a.next_scenario(&g).unwrap(), b.next_scenario(&g).unwrap());
        }
    }

    #[test]
    fn random_covers_every_passable_cell() {
        let g = OccupancyGrid::parse("#..\n.#.").unwrap();
        let mut p = RandomScenario::new(StdRng::seed_from_u64(1));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let s = p.next_scenario(&g).unwrap();
            seen.insert(s.start);
            seen.insert(s.end);
        }
        assert_eq!(seen.len(), g.passable_count());
    }

    #[test]
    fn random_on_fully_blocked_grid() {
        let g = OccupancyGrid::parse("##\n##").unwrap();
        let mut p = RandomScenario::new(rand::rng());
        assert_eq!(p.next_scenario(&g), Err(ScenarioError::NoPassableCells));
    }

    #[test]
    fn require_connected() {
        let g = OccupancyGrid::parse("..#..\n..#..").unwrap();
        let config = RandomScenarioConfig {
            require_connected: true,
            ..RandomScenarioConfig::default()
        };
        let mut p = RandomScenario::with_config(StdRng::seed_from_u64(3), config);
        for _ in 0..100 {
            let s = p.next_scenario(&g).unwrap();
            assert_eq!(s.start.col < 2, s.end.col < 2);
        }
    }

    #[test]
    fn attempts_exhausted() {
        // One passable cell out of 400: a pair is accepted with probability
        // 1/160000, so 3 attempts essentially always fail.
        let mut rows = vec![vec![1u8; 20]; 20];
        rows[10][10] = 0;
        let g = OccupancyGrid::from_rows(rows).unwrap();
        let config = RandomScenarioConfig {
            max_attempts: 3,
            ..RandomScenarioConfig::default()
        };
        let mut p = RandomScenario::with_config(StdRng::seed_from_u64(9), config);
        assert_eq!(
            p.next_scenario(&g),
            Err(ScenarioError::AttemptsExhausted { attempts: 3 })
        );
    }
}
