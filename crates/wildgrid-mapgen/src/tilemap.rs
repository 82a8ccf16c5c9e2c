//! A finished tile and the distance fields computed over it.

use wildgrid_core::{Grid, Point, Result, Terrain};
use wildgrid_paths::{DistanceField, PathRange, Profile};

use crate::gates::{Gates, Side};
use crate::regions;

/// One generated tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    pub terrain: Grid<Terrain>,
    /// Smoothed elevation; zero along carved routes.
    pub elevation: Grid<u8>,
    pub gates: Gates,
    /// Position of the player marker.
    pub player: Point,
    /// Carved routes, west to east then north to south, each ordered from
    /// its first gate to its second.
    pub routes: [Vec<Point>; 2],
}

/// Hiker and rival distance fields from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelFields {
    pub hiker: DistanceField,
    pub rival: DistanceField,
}

impl TravelFields {
    pub fn get(&self, profile: Profile) -> Option<&DistanceField> {
        match profile {
            Profile::Hiker => Some(&self.hiker),
            Profile::Rival => Some(&self.rival),
            Profile::Carve => None,
        }
    }
}

impl TileMap {
    pub fn width(&self) -> i32 {
        self.terrain.width()
    }

    pub fn height(&self) -> i32 {
        self.terrain.height()
    }

    /// Distance field for `profile` from `source`.
    pub fn distance_field(
        &self,
        pr: &mut PathRange,
        profile: Profile,
        source: Point,
    ) -> Result<DistanceField> {
        DistanceField::compute(pr, &self.terrain, profile, source)
    }

    /// Hiker and rival fields from the player position.
    pub fn travel_fields(&self, pr: &mut PathRange) -> Result<TravelFields> {
        Ok(TravelFields {
            hiker: self.distance_field(pr, Profile::Hiker, self.player)?,
            rival: self.distance_field(pr, Profile::Rival, self.player)?,
        })
    }

    /// Close the border on `side`, gate included.
    pub fn block_side(&mut self, side: Side) {
        regions::block_side(&mut self.terrain, side);
    }

    /// The border cell of the gate on `side`.
    pub fn gate_cell(&self, side: Side) -> Point {
        self.gates.cells(side, self.width(), self.height())[0]
    }
}
