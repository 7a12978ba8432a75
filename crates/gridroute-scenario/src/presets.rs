//! The built-in delivery map.

use gridroute_core::{Coord, GridError, OccupancyGrid};

const DELIVERY_ROWS: [[u8; 12]; 12] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Start of the fixed delivery route.
pub const DELIVERY_START: Coord = Coord::new(0, 1);
/// End of the fixed delivery route.
pub const DELIVERY_END: Coord = Coord::new(8, 6);

/// The 12×12 delivery map.
pub fn delivery_grid() -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::from_rows(DELIVERY_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_paths::find_path;

    #[test]
    fn delivery_map_shape() {
        let g = delivery_grid().unwrap();
        assert_eq!((g.height(), g.width()), (12, 12));
        assert_eq!(g.len() - g.passable_count(), 24);
        assert!(g.is_passable(DELIVERY_START));
        assert!(g.is_passable(DELIVERY_END));
    }

    #[test]
    fn delivery_route_exists() {
        let g = delivery_grid().unwrap();
        let p = find_path(&g, DELIVERY_START, DELIVERY_END).unwrap().unwrap();
        assert_eq!(p.start(), DELIVERY_START);
        assert_eq!(p.end(), DELIVERY_END);
        assert!(p.is_valid_on(&g));
    }
}
