//! The tile generation pipeline.

use log::{debug, warn};
use rand::{Rng, RngExt};
use wildgrid_core::{Error, Grid, MAP_HEIGHT, MAP_WIDTH, Point, Range, Result, Terrain};
use wildgrid_paths::{CarvePather, PathRange};

use crate::config::GenConfig;
use crate::gates::GateRequest;
use crate::height::height_field;
use crate::regions::{grow_regions, wall_border};
use crate::scatter::{place_boulders, place_trees};
use crate::structures::place_building;
use crate::tilemap::{TileMap, TravelFields};

/// Tile generator. Owns the random source and the reusable path-search
/// state.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
    pr: PathRange,
}

impl<R: Rng> MapGen<R> {
    /// Generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GenConfig::default())
    }

    pub fn with_config(rng: R, config: GenConfig) -> Self {
        Self {
            rng,
            config,
            pr: PathRange::new(Range::new(0, 0, MAP_WIDTH, MAP_HEIGHT)),
        }
    }

    /// Generate one tile.
    ///
    /// Gates missing from `gates` are drawn at random; supplied ones must lie
    /// in their side's span. `building_chance` is the percent chance for each
    /// of the mart and the center to spawn (see
    /// [`spawn_chance`](crate::spawn_chance)).
    ///
    /// Steps, all driven by `self.rng`: elevation, gates, biome regions,
    /// border walls, boulders, the two carved routes, trees, mart, center,
    /// player.
    pub fn generate(&mut self, gates: GateRequest, building_chance: i32) -> Result<TileMap> {
        let (w, h) = (MAP_WIDTH, MAP_HEIGHT);
        let mut elevation = height_field(&mut self.rng, w, h);
        let gates = gates.resolve(&mut self.rng, w, h)?;
        debug!(
            "gates: north {} south {} east {} west {}",
            gates.north, gates.south, gates.east, gates.west
        );

        let mut terrain = grow_regions(&mut self.rng, &self.config, w, h);
        wall_border(&mut terrain, &gates);
        place_boulders(&mut self.rng, &mut terrain, self.config.boulders);

        let mut routes: [Vec<Point>; 2] = Default::default();
        for (slot, (from, to)) in routes.iter_mut().zip(gates.routes(w, h)) {
            let route = self.carve(&mut terrain, &mut elevation, from, to)?;
            debug!("carved {} cells from {from} to {to}", route.len());
            *slot = route;
        }

        place_trees(&mut self.rng, &mut terrain, self.config.trees);
        let attempts = self.config.building_attempts;
        for kind in [Terrain::Mart, Terrain::Center] {
            place_building(&mut self.rng, &mut terrain, kind, building_chance, attempts);
        }

        let player = match self.player_site(&terrain) {
            Some(p) => p,
            None => {
                warn!("no path cell in the player columns; using the west gate");
                routes[0].first().copied().unwrap_or(Point::new(1, gates.west))
            }
        };
        terrain.set(player, Terrain::Player);
        debug!("player at {player}");

        Ok(TileMap {
            terrain,
            elevation,
            gates,
            player,
            routes,
        })
    }

    /// Carve the cheapest route between two interior cells, turning it into
    /// path at elevation 0.
    fn carve(
        &mut self,
        terrain: &mut Grid<Terrain>,
        elevation: &mut Grid<u8>,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>> {
        if self.pr.range() != elevation.bounds() {
            self.pr.set_range(elevation.bounds());
        }
        let route = self
            .pr
            .carve_path(&CarvePather::new(elevation), from, to)?
            .ok_or(Error::NoRoute { from, to })?;
        for &p in &route {
            terrain.set(p, Terrain::Path);
            elevation.set(p, 0);
        }
        Ok(route)
    }

    /// Pick a random column in `3..=width - 3` and return its topmost
    /// interior path cell. Columns without one are skipped, moving east and
    /// wrapping around.
    fn player_site(&mut self, terrain: &Grid<Terrain>) -> Option<Point> {
        let (w, h) = (terrain.width(), terrain.height());
        let (lo, hi) = (3, w - 3);
        if hi < lo {
            return None;
        }
        let span = hi - lo + 1;
        let start = self.rng.random_range(0..span);
        (0..span)
            .map(|i| lo + (start + i) % span)
            .find_map(|x| {
                (1..h - 1)
                    .map(|y| Point::new(x, y))
                    .find(|&p| terrain.at(p) == Some(Terrain::Path))
            })
    }

    /// Hiker and rival distance fields from the player of `tile`, reusing
    /// this generator's search state.
    pub fn travel_fields(&mut self, tile: &TileMap) -> Result<TravelFields> {
        tile.travel_fields(&mut self.pr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> MapGen<StdRng> {
        MapGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn player_sits_on_a_former_path_cell() {
        let mut mg = generator(30);
        let tile = mg.generate(GateRequest::default(), 100).unwrap();
        let p = tile.player;
        assert_eq!(tile.terrain.at(p), Some(Terrain::Player));
        assert!((3..=MAP_WIDTH - 3).contains(&p.x));
        assert!((1..MAP_HEIGHT - 1).contains(&p.y));
        assert!(tile.routes.iter().any(|r| r.contains(&p)));
        assert_eq!(tile.terrain.count(Terrain::Player), 1);
    }

    #[test]
    fn certain_buildings_both_spawn() {
        let mut mg = generator(31);
        let tile = mg.generate(GateRequest::default(), 100).unwrap();
        assert_eq!(tile.terrain.count(Terrain::Mart), 4);
        assert_eq!(tile.terrain.count(Terrain::Center), 4);
    }

    #[test]
    fn zero_chance_spawns_no_buildings() {
        let mut mg = generator(32);
        let tile = mg.generate(GateRequest::default(), 0).unwrap();
        assert_eq!(tile.terrain.count_fn(|_, t| t.is_building()), 0);
    }

    #[test]
    fn bad_gate_fails_before_anything_is_built() {
        let mut mg = generator(33);
        let err = mg
            .generate(GateRequest { east: Some(0), ..GateRequest::default() }, 100)
            .unwrap_err();
        assert!(matches!(err, Error::GateOutOfRange { side: "east", .. }));
    }

    #[test]
    fn routes_start_and_end_at_inner_gate_cells() {
        let mut mg = generator(34);
        let tile = mg.generate(GateRequest::fixed(40, 40, 10, 10), 50).unwrap();
        let [we, ns] = &tile.routes;
        assert_eq!(we.first(), Some(&Point::new(1, 10)));
        assert_eq!(we.last(), Some(&Point::new(MAP_WIDTH - 2, 10)));
        assert_eq!(ns.first(), Some(&Point::new(40, 1)));
        assert_eq!(ns.last(), Some(&Point::new(40, MAP_HEIGHT - 2)));
    }

    #[test]
    fn travel_fields_start_at_the_player() {
        let mut mg = generator(35);
        let tile = mg.generate(GateRequest::default(), 100).unwrap();
        let fields = mg.travel_fields(&tile).unwrap();
        assert_eq!(fields.hiker.at(tile.player), Some(0));
        assert_eq!(fields.rival.at(tile.player), Some(0));
        // The player stands on a route, so its whole route is reachable.
        let route = tile.routes.iter().find(|r| r.contains(&tile.player)).unwrap();
        for &p in route {
            assert!(fields.hiker.reachable(p), "hiker cannot reach {p}");
            assert!(fields.rival.reachable(p), "rival cannot reach {p}");
        }
    }
}
