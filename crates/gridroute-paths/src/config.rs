/// How the open frontier orders entries with equal `f` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Prefer the entry closer to the goal (lower `h`), then the one pushed
    /// first. Tends to expand fewer cells on open maps.
    #[default]
    LowerHeuristic,
    /// Prefer the entry pushed first.
    Insertion,
}

/// Tuning knobs for a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathFinderConfig {
    /// Give up with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit)
    /// after expanding this many cells. `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Ordering among frontier entries with equal `f`.
    pub tie_break: TieBreak,
}

impl Default for PathFinderConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            tie_break: TieBreak::LowerHeuristic,
        }
    }
}

impl PathFinderConfig {
    /// Bound the number of expanded cells.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
