//! Border gates: where paths leave a tile.

use rand::{Rng, RngExt};
use wildgrid_core::{Error, Point, Result};

/// One side of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    pub const fn name(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }

    /// World offset of the neighboring tile on this side.
    pub const fn offset(self) -> Point {
        match self {
            Side::North => Point::new(0, -1),
            Side::South => Point::new(0, 1),
            Side::East => Point::new(1, 0),
            Side::West => Point::new(-1, 0),
        }
    }

    pub const fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }
}

/// Gate constraints for a new tile. `None` means "pick at random".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateRequest {
    pub north: Option<i32>,
    pub south: Option<i32>,
    pub east: Option<i32>,
    pub west: Option<i32>,
}

impl GateRequest {
    /// Request with every gate fixed.
    pub const fn fixed(north: i32, south: i32, east: i32, west: i32) -> Self {
        Self {
            north: Some(north),
            south: Some(south),
            east: Some(east),
            west: Some(west),
        }
    }

    pub fn get(&self, side: Side) -> Option<i32> {
        match side {
            Side::North => self.north,
            Side::South => self.south,
            Side::East => self.east,
            Side::West => self.west,
        }
    }

    pub fn set(&mut self, side: Side, v: Option<i32>) {
        match side {
            Side::North => self.north = v,
            Side::South => self.south = v,
            Side::East => self.east = v,
            Side::West => self.west = v,
        }
    }

    /// Validate supplied gates and draw the missing ones, in north, south,
    /// east, west order.
    ///
    /// North and south gates are columns in `1..=width - 2`; east and west
    /// gates are rows in `1..=height - 2`.
    pub fn resolve<R: Rng>(&self, rng: &mut R, width: i32, height: i32) -> Result<Gates> {
        let mut pick = |side: Side| -> Result<i32> {
            let span = match side {
                Side::North | Side::South => width - 2,
                Side::East | Side::West => height - 2,
            };
            match self.get(side) {
                Some(v) if (1..=span).contains(&v) => Ok(v),
                Some(v) => Err(Error::GateOutOfRange {
                    side: side.name(),
                    value: v,
                    min: 1,
                    max: span,
                }),
                None => Ok(1 + rng.random_range(0..span.max(1))),
            }
        };
        Ok(Gates {
            north: pick(Side::North)?,
            south: pick(Side::South)?,
            east: pick(Side::East)?,
            west: pick(Side::West)?,
        })
    }
}

/// The gates a tile was generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gates {
    /// Column of the north gate.
    pub north: i32,
    /// Column of the south gate.
    pub south: i32,
    /// Row of the east gate.
    pub east: i32,
    /// Row of the west gate.
    pub west: i32,
}

impl Gates {
    pub fn get(&self, side: Side) -> i32 {
        match side {
            Side::North => self.north,
            Side::South => self.south,
            Side::East => self.east,
            Side::West => self.west,
        }
    }

    /// The border cell of the gate on `side`, and the cell one step inward.
    pub fn cells(&self, side: Side, width: i32, height: i32) -> [Point; 2] {
        match side {
            Side::North => [Point::new(self.north, 0), Point::new(self.north, 1)],
            Side::South => [
                Point::new(self.south, height - 1),
                Point::new(self.south, height - 2),
            ],
            Side::East => [
                Point::new(width - 1, self.east),
                Point::new(width - 2, self.east),
            ],
            Side::West => [Point::new(0, self.west), Point::new(1, self.west)],
        }
    }

    /// Endpoints of the two routes to carve: west to east, then north to
    /// south. Each runs between the inward cells of its gates.
    pub fn routes(&self, width: i32, height: i32) -> [(Point, Point); 2] {
        let inner = |side| self.cells(side, width, height)[1];
        [
            (inner(Side::West), inner(Side::East)),
            (inner(Side::North), inner(Side::South)),
        ]
    }
}
