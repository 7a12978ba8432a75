use gridroute_core::Coord;

/// Euclidean (L2) distance between two coordinates.
///
/// Used both as the cost of a single move (1 orthogonal, √2 diagonal) and as
/// the goal estimate. Since moves are priced with the same metric, the
/// estimate never overestimates and is consistent.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(b.row - a.row);
    let dc = f64::from(b.col - a.col);
    (dr * dr + dc * dc).sqrt()
}
