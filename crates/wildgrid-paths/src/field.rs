//! Per-profile distance fields over a finished tile.

use wildgrid_core::{Grid, Point, Result, Terrain};

use crate::PathRange;
use crate::cost::Profile;
use crate::pathers::TravelPather;
use crate::pathrange::UNREACHABLE;

/// Minimum accumulated cost from one source to every cell of a tile, for a
/// single traveler profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    profile: Profile,
    source: Point,
    costs: Grid<i32>,
}

impl DistanceField {
    /// Compute the field of `profile` travelers starting at `source`.
    ///
    /// `pr` must cover the same rectangle as `terrain`; it is reset before
    /// the search.
    pub fn compute(
        pr: &mut PathRange,
        terrain: &Grid<Terrain>,
        profile: Profile,
        source: Point,
    ) -> Result<Self> {
        if pr.range() != terrain.bounds() {
            pr.set_range(terrain.bounds());
        }
        let pather = TravelPather::new(terrain, profile);
        let costs = pr.distance_map(&pather, source)?;
        Ok(Self {
            profile,
            source,
            costs,
        })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn source(&self) -> Point {
        self.source
    }

    /// Cost to reach `p`, or `None` if it is unreachable or off the grid.
    pub fn at(&self, p: Point) -> Option<i32> {
        self.costs.at(p).filter(|&c| c != UNREACHABLE)
    }

    /// Whether `p` can be reached from the source.
    pub fn reachable(&self, p: Point) -> bool {
        self.at(p).is_some()
    }

    /// The raw cost grid, with [`UNREACHABLE`] for cells that cannot be
    /// reached.
    pub fn costs(&self) -> &Grid<i32> {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildgrid_core::Range;

    fn boxed_in() -> Grid<Terrain> {
        let mut t = Grid::new(9, 7, Terrain::Clearing);
        let center = Point::new(4, 3);
        for n in center.neighbors_8() {
            t.set(n, Terrain::Boulder);
        }
        t
    }

    #[test]
    fn all_empty_cells_cost_nothing() {
        let terrain = Grid::new(6, 4, Terrain::Empty);
        let mut pr = PathRange::new(terrain.bounds());
        let f = DistanceField::compute(&mut pr, &terrain, Profile::Hiker, Point::new(2, 2)).unwrap();
        for p in terrain.bounds() {
            assert_eq!(f.at(p), Some(0), "at {p}");
        }
    }

    #[test]
    fn single_cell_grid() {
        let terrain = Grid::new(1, 1, Terrain::Empty);
        let mut pr = PathRange::new(terrain.bounds());
        let f = DistanceField::compute(&mut pr, &terrain, Profile::Hiker, Point::ZERO).unwrap();
        assert_eq!(f.at(Point::ZERO), Some(0));
    }

    #[test]
    fn boxed_cell_is_unreachable_for_both_profiles() {
        let terrain = boxed_in();
        let mut pr = PathRange::new(terrain.bounds());
        for profile in Profile::TRAVELERS {
            for src in [Point::new(0, 0), Point::new(8, 6), Point::new(8, 0)] {
                let f = DistanceField::compute(&mut pr, &terrain, profile, src).unwrap();
                assert!(!f.reachable(Point::new(4, 3)), "{profile} from {src}");
                assert!(f.reachable(Point::new(0, 6)));
            }
        }
    }

    #[test]
    fn diagonal_steps_cost_one_weight() {
        let terrain = Grid::new(5, 5, Terrain::Path);
        let mut pr = PathRange::new(terrain.bounds());
        let f = DistanceField::compute(&mut pr, &terrain, Profile::Rival, Point::new(0, 0)).unwrap();
        assert_eq!(f.at(Point::new(4, 4)), Some(40));
        assert_eq!(f.at(Point::new(4, 1)), Some(40));
        assert_eq!(f.source(), Point::new(0, 0));
        assert_eq!(f.profile(), Profile::Rival);
    }

    #[test]
    fn impassable_cells_never_get_a_cost() {
        let mut terrain = Grid::new(8, 3, Terrain::OpenLand);
        terrain.set(Point::new(3, 0), Terrain::Forest);
        terrain.set(Point::new(3, 1), Terrain::Mountain);
        terrain.set(Point::new(3, 2), Terrain::Tree);
        let mut pr = PathRange::new(terrain.bounds());

        let rival = DistanceField::compute(&mut pr, &terrain, Profile::Rival, Point::new(0, 1)).unwrap();
        for (p, t) in terrain.iter() {
            if !Profile::Rival.passable(t) {
                assert!(!rival.reachable(p), "{t} at {p}");
            }
        }
        // The column is a wall for rivals, so the far side is cut off.
        assert!(!rival.reachable(Point::new(7, 1)));

        let hiker = DistanceField::compute(&mut pr, &terrain, Profile::Hiker, Point::new(0, 1)).unwrap();
        assert_eq!(hiker.at(Point::new(3, 1)), Some(45));
        assert!(!hiker.reachable(Point::new(3, 2)));
        assert!(hiker.reachable(Point::new(7, 1)));
    }

    #[test]
    fn impassable_source_still_costs_zero() {
        let mut terrain = Grid::new(3, 3, Terrain::Clearing);
        terrain.set(Point::new(1, 1), Terrain::Player);
        let mut pr = PathRange::new(terrain.bounds());
        let f = DistanceField::compute(&mut pr, &terrain, Profile::Hiker, Point::new(1, 1)).unwrap();
        assert_eq!(f.at(Point::new(1, 1)), Some(0));
        assert_eq!(f.at(Point::new(0, 0)), Some(10));
    }

    #[test]
    fn mismatched_range_is_resized() {
        let terrain = Grid::new(4, 4, Terrain::Clearing);
        let mut pr = PathRange::new(Range::new(0, 0, 2, 2));
        let f = DistanceField::compute(&mut pr, &terrain, Profile::Hiker, Point::new(3, 3)).unwrap();
        assert_eq!(f.at(Point::new(0, 0)), Some(30));
    }

    #[test]
    fn source_off_the_grid_is_an_error() {
        let terrain = Grid::new(4, 4, Terrain::Clearing);
        let mut pr = PathRange::new(terrain.bounds());
        assert!(DistanceField::compute(&mut pr, &terrain, Profile::Rival, Point::new(4, 0)).is_err());
    }
}
