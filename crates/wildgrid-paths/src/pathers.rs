//! The two pathers used on tiles: path carving over elevation, and traveler
//! movement over terrain.

use wildgrid_core::{Grid, Point, Terrain};

use crate::UNREACHABLE;
use crate::cost::Profile;
use crate::traits::{Pather, WeightedPather};

/// Carves gate-to-gate routes over an elevation grid.
///
/// Routes move in the four cardinal directions and stay off the outer ring.
/// Entering a cell costs `(g + elevation(from)) * edge_penalty(to)`, which
/// favours low ground and keeps routes from hugging the border.
pub struct CarvePather<'a> {
    elevation: &'a Grid<u8>,
}

impl<'a> CarvePather<'a> {
    pub fn new(elevation: &'a Grid<u8>) -> Self {
        Self { elevation }
    }

    /// 2 on the ring just inside the border, 1 elsewhere.
    pub fn edge_penalty(&self, p: Point) -> i32 {
        if self.elevation.bounds().inset(1).on_edge(p) {
            2
        } else {
            1
        }
    }
}

impl Pather for CarvePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.elevation.contains(n)));
    }

    fn admits(&self, p: Point) -> bool {
        self.elevation.bounds().inset(1).contains(p)
    }
}

impl WeightedPather for CarvePather<'_> {
    fn cost(&self, from: Point, _to: Point) -> i32 {
        self.elevation.at(from).map_or(0, i32::from)
    }

    fn accumulate(&self, g: i32, from: Point, to: Point) -> i32 {
        g.saturating_add(self.cost(from, to))
            .saturating_mul(self.edge_penalty(to))
    }
}

/// Moves a traveler across terrain in all eight directions, charging the
/// profile's weight of the entered cell.
pub struct TravelPather<'a> {
    terrain: &'a Grid<Terrain>,
    profile: Profile,
}

impl<'a> TravelPather<'a> {
    pub fn new(terrain: &'a Grid<Terrain>, profile: Profile) -> Self {
        Self { terrain, profile }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }
}

impl Pather for TravelPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&n| self.terrain.contains(n)));
    }

    fn admits(&self, p: Point) -> bool {
        self.terrain
            .at(p)
            .is_some_and(|t| self.profile.passable(t))
    }
}

impl WeightedPather for TravelPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.terrain
            .at(to)
            .and_then(|t| self.profile.weight(t))
            .unwrap_or(UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_penalty_marks_inner_ring() {
        let elev = Grid::new(80, 21, 0u8);
        let cp = CarvePather::new(&elev);
        assert_eq!(cp.edge_penalty(Point::new(1, 5)), 2);
        assert_eq!(cp.edge_penalty(Point::new(40, 1)), 2);
        assert_eq!(cp.edge_penalty(Point::new(78, 5)), 2);
        assert_eq!(cp.edge_penalty(Point::new(40, 19)), 2);
        assert_eq!(cp.edge_penalty(Point::new(2, 2)), 1);
        assert_eq!(cp.edge_penalty(Point::new(77, 18)), 1);
    }

    #[test]
    fn carve_cost_scales_predecessor_elevation() {
        let mut elev = Grid::new(10, 10, 0u8);
        elev.set(Point::new(3, 3), 50);
        let cp = CarvePather::new(&elev);
        assert_eq!(cp.accumulate(7, Point::new(3, 3), Point::new(4, 3)), 57);
        assert_eq!(cp.accumulate(7, Point::new(3, 3), Point::new(3, 2)), 57);
        // (7 + 0) * 2 entering the inner ring.
        assert_eq!(cp.accumulate(7, Point::new(2, 2), Point::new(1, 2)), 14);
        assert!(!cp.admits(Point::new(0, 4)));
        assert!(cp.admits(Point::new(1, 4)));
    }

    #[test]
    fn carve_saturates_instead_of_wrapping() {
        let elev = Grid::new(10, 10, 255u8);
        let cp = CarvePather::new(&elev);
        assert_eq!(
            cp.accumulate(i32::MAX - 10, Point::new(2, 1), Point::new(1, 1)),
            i32::MAX
        );
    }

    #[test]
    fn travel_neighbors_clip_to_grid() {
        let terrain = Grid::new(5, 5, Terrain::Clearing);
        let tp = TravelPather::new(&terrain, Profile::Hiker);
        let mut buf = Vec::new();
        tp.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
        buf.clear();
        tp.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn travel_admits_follow_profile() {
        let mut terrain = Grid::new(3, 1, Terrain::Forest);
        terrain.set(Point::new(1, 0), Terrain::Path);
        let hiker = TravelPather::new(&terrain, Profile::Hiker);
        let rival = TravelPather::new(&terrain, Profile::Rival);
        assert!(hiker.admits(Point::new(0, 0)));
        assert!(!rival.admits(Point::new(0, 0)));
        assert!(rival.admits(Point::new(1, 0)));
        assert_eq!(hiker.cost(Point::new(1, 0), Point::new(0, 0)), 15);
        assert_eq!(rival.cost(Point::new(0, 0), Point::new(1, 0)), 10);
        assert!(!hiker.admits(Point::new(5, 0)));
    }
}
