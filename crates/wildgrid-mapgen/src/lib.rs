//! Tile generation for wildgrid.
//!
//! A tile is built in fixed stages, every one driven by the caller's random
//! source:
//!
//! 1. **Elevation** ([`height_field`]): seeded diffusion, then two 5×5
//!    Gaussian passes.
//! 2. **Gates** ([`GateRequest::resolve`]): one opening per side.
//! 3. **Biomes** ([`grow_regions`]): open land, clearing, mountain and
//!    forest grown from random seeds, then walled in ([`wall_border`]).
//! 4. **Boulders**, the two **carved routes**, then **trees**.
//! 5. **Buildings** ([`place_building`]): a mart and a center beside a path.
//! 6. **Player** marker on a path cell.
//!
//! [`MapGen`] runs the pipeline for one tile; [`World`] keeps a grid of
//! tiles whose gates line up with their neighbors.

mod config;
mod fifo;
mod gates;
mod height;
mod mapgen;
mod regions;
mod scatter;
mod structures;
mod tilemap;
mod world;

pub use config::{GenConfig, Scatter, SeedCount};
pub use gates::{GateRequest, Gates, Side};
pub use height::{diffuse, height_field, smooth};
pub use mapgen::MapGen;
pub use regions::{block_side, grow_regions, wall_border};
pub use scatter::{place_boulders, place_trees, scatter};
pub use structures::{
    WORLD_CENTER, find_building_site, is_building_site, place_building, spawn_chance,
};
pub use tilemap::{TileMap, TravelFields};
pub use world::{WORLD_SIZE, World};
