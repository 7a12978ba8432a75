//! Delivery-route demo shared by the terminal binary and its tests.
//!
//! Demonstrates: fixed and random scenarios, A* routing on the delivery
//! map, and a text rendering of the grid with the route drawn over it.

pub mod terminal;

use std::fmt;

use crossterm::event::KeyCode;
use gridroute_core::{Coord, GridError, OccupancyGrid};
use gridroute_paths::{Path, PathError, PathFinder};
use gridroute_scenario::{FixedScenario, RandomScenario, Scenario, ScenarioError, ScenarioProvider};
use rand::Rng;

pub const HELP_TEXT: &str = "s: static route   r: random route   q: quit";

/// Glyphs used by [`render`].
pub const GLYPH_FREE: char = '.';
pub const GLYPH_WALL: char = '#';
pub const GLYPH_PATH: char = '*';
pub const GLYPH_START: char = 'S';
pub const GLYPH_END: char = 'E';

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replay the fixed delivery route.
    Static,
    /// Route between two random passable cells.
    Random,
    Quit,
}

impl Action {
    /// Map a key press to an action.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Self::Static),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Self::Random),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the demo.
#[derive(Debug)]
pub enum DemoError {
    Grid(GridError),
    Scenario(ScenarioError),
    Path(PathError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::Scenario(e) => write!(f, "{e}"),
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Scenario(e) => Some(e),
            Self::Path(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ScenarioError> for DemoError {
    fn from(e: ScenarioError) -> Self {
        Self::Scenario(e)
    }
}

impl From<PathError> for DemoError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

// ---------------------------------------------------------------------------
// Frame / rendering
// ---------------------------------------------------------------------------

/// One search result, ready to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub scenario: Scenario,
    /// `None` when the end cannot be reached from the start.
    pub path: Option<Path>,
}

impl Frame {
    /// One-line description of the result.
    pub fn summary(&self) -> String {
        let Scenario { start, end } = self.scenario;
        match &self.path {
            Some(p) => format!(
                "route {start} -> {end}: {} steps, cost {:.3}",
                p.steps(),
                p.cost()
            ),
            None => format!("no route {start} -> {end}"),
        }
    }
}

/// The glyph shown at `c`.
pub fn glyph_at(grid: &OccupancyGrid, frame: &Frame, c: Coord) -> char {
    if c == frame.scenario.start {
        GLYPH_START
    } else if c == frame.scenario.end {
        GLYPH_END
    } else if frame.path.as_ref().is_some_and(|p| p.contains(c)) {
        GLYPH_PATH
    } else if grid.is_passable(c) {
        GLYPH_FREE
    } else {
        GLYPH_WALL
    }
}

/// Render the grid with the route drawn over it, one line per row, followed
/// by the [`summary`](Frame::summary) line.
pub fn render(grid: &OccupancyGrid, frame: &Frame) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height() + 64);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(glyph_at(grid, frame, Coord::new(row as i32, col as i32)));
        }
        out.push('\n');
    }
    out.push_str(&frame.summary());
    out
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Demo state: one grid, a fixed and a random scenario source, and a finder.
pub struct Session<R: Rng> {
    grid: OccupancyGrid,
    fixed: FixedScenario,
    random: RandomScenario<R>,
    finder: PathFinder,
}

impl<R: Rng> Session<R> {
    /// Create a session.
    pub fn new(grid: OccupancyGrid, fixed: FixedScenario, random: RandomScenario<R>) -> Self {
        Self {
            grid,
            fixed,
            random,
            finder: PathFinder::new(),
        }
    }

    /// Use a custom finder.
    pub fn with_finder(mut self, finder: PathFinder) -> Self {
        self.finder = finder;
        self
    }

    /// The grid being routed on.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Run the search `action` asks for. Returns `None` on [`Action::Quit`].
    pub fn handle(&mut self, action: Action) -> Result<Option<Frame>, DemoError> {
        let scenario = match action {
            Action::Static => self.fixed.next_scenario(&self.grid)?,
            Action::Random => self.random.next_scenario(&self.grid)?,
            Action::Quit => return Ok(None),
        };
        let path = self.finder.find_path(&self.grid, scenario.start, scenario.end)?;
        let frame = Frame { scenario, path };
        log::debug!("{}", frame.summary());
        Ok(Some(frame))
    }
}
