//! **wildgrid-core** — foundational types for wildgrid tiles.
//!
//! Geometry primitives, the dense [`Grid`] used for terrain, elevation and
//! distance data, the [`Terrain`] enum and the shared [`Error`] type.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::{Error, Result};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use terrain::Terrain;

/// Width of a tile in cells.
pub const MAP_WIDTH: i32 = 80;
/// Height of a tile in cells.
pub const MAP_HEIGHT: i32 = 21;
