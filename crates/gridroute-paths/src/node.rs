// ---------------------------------------------------------------------------
// Internal per-cell node for A* searches
// ---------------------------------------------------------------------------

/// Best known cost of a cell that has not been reached yet.
pub(crate) const UNREACHED: f64 = f64::INFINITY;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    /// Best known cost from the start, [`UNREACHED`] if none.
    pub(crate) g: f64,
    /// Cell this one was most recently reached from. The start has none.
    pub(crate) parent: Option<usize>,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            parent: None,
            closed: false,
        }
    }
}

/// Open-frontier entry, ordered for use in a max-`BinaryHeap` so that the
/// smallest `f` pops first.
///
/// Ties on `f` fall back to `tie` (smaller first), then to `seq`
/// (earlier push first). `seq` is unique per search, so no two entries
/// compare equal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    /// `g` at push time; a pop whose `g` exceeds the node's current `g` is
    /// stale.
    pub(crate) g: f64,
    pub(crate) tie: f64,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.tie.total_cmp(&self.tie))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for OpenEntry {}
