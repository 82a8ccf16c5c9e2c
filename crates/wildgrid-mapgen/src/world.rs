//! A square world of lazily generated tiles whose gates line up.

use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;
use wildgrid_core::{Error, Point, Range, Result};

use crate::gates::{GateRequest, Side};
use crate::mapgen::MapGen;
use crate::structures::{WORLD_CENTER, spawn_chance};
use crate::tilemap::{TileMap, TravelFields};

/// Tiles per world side.
pub const WORLD_SIZE: i32 = 399;

/// Generated tiles keyed by world position, plus the tile being visited.
///
/// A tile is generated the first time it is entered. Its gates are taken
/// from any neighbors that already exist, so paths continue across tile
/// borders, and sides facing off the world are walled shut.
pub struct World<R: Rng> {
    mapgen: MapGen<R>,
    tiles: HashMap<Point, TileMap>,
    current: Point,
}

impl<R: Rng> World<R> {
    /// Create a world and generate its starting tile at the center.
    pub fn new(mapgen: MapGen<R>) -> Result<Self> {
        let mut world = Self {
            mapgen,
            tiles: HashMap::new(),
            current: WORLD_CENTER,
        };
        world.move_to(WORLD_CENTER)?;
        Ok(world)
    }

    pub fn bounds() -> Range {
        Range::new(0, 0, WORLD_SIZE, WORLD_SIZE)
    }

    /// Position of the tile being visited.
    pub fn current(&self) -> Point {
        self.current
    }

    /// The tile being visited.
    pub fn current_tile(&self) -> &TileMap {
        &self.tiles[&self.current]
    }

    /// The tile at `pos`, if it has been generated.
    pub fn tile(&self, pos: Point) -> Option<&TileMap> {
        self.tiles.get(&pos)
    }

    /// Number of generated tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn mapgen(&mut self) -> &mut MapGen<R> {
        &mut self.mapgen
    }

    /// Travel to `pos`, generating its tile on first visit. Positions off the
    /// world fail with [`Error::OutOfRange`] and leave the current tile
    /// unchanged.
    pub fn move_to(&mut self, pos: Point) -> Result<&TileMap> {
        let bounds = Self::bounds();
        if !bounds.contains(pos) {
            return Err(Error::OutOfRange { pos, bounds });
        }
        if !self.tiles.contains_key(&pos) {
            let tile = self.generate_at(pos)?;
            self.tiles.insert(pos, tile);
        }
        self.current = pos;
        Ok(self.current_tile())
    }

    /// Travel one tile towards `side`.
    pub fn step(&mut self, side: Side) -> Result<&TileMap> {
        self.move_to(self.current + side.offset())
    }

    /// Hiker and rival distance fields from the player of the current tile.
    pub fn travel_fields(&mut self) -> Result<TravelFields> {
        let tile = &self.tiles[&self.current];
        self.mapgen.travel_fields(tile)
    }

    /// Gate constraints for a tile at `pos`: each existing neighbor's facing
    /// gate.
    pub fn gate_request(&self, pos: Point) -> GateRequest {
        let mut req = GateRequest::default();
        for side in Side::ALL {
            if let Some(n) = self.tiles.get(&(pos + side.offset())) {
                req.set(side, Some(n.gates.get(side.opposite())));
            }
        }
        req
    }

    fn generate_at(&mut self, pos: Point) -> Result<TileMap> {
        let req = self.gate_request(pos);
        let chance = spawn_chance(pos);
        debug!("generating tile {pos} with {req:?}, building chance {chance}%");
        let mut tile = self.mapgen.generate(req, chance)?;
        let bounds = Self::bounds();
        for side in Side::ALL {
            if !bounds.contains(pos + side.offset()) {
                tile.block_side(side);
            }
        }
        info!("tile {pos} generated ({} in world)", self.tiles.len() + 1);
        Ok(tile)
    }
}
