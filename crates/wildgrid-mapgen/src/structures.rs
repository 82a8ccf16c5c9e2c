//! Marts and centers: 2×2 buildings set beside a path.

use log::{debug, warn};
use rand::{Rng, RngExt};
use wildgrid_core::{Grid, Point, Terrain};

/// World coordinate of the starting tile, where buildings always spawn.
pub const WORLD_CENTER: Point = Point::new(199, 199);

/// Percent chance that a building spawns on the tile at `world_pos`.
///
/// Certain at the world center, otherwise it falls from 50 with the
/// manhattan distance to the center, reaching 5 at distance 400.
pub fn spawn_chance(world_pos: Point) -> i32 {
    if world_pos == WORLD_CENTER {
        return 100;
    }
    let d = world_pos.manhattan(WORLD_CENTER);
    50 - 45 * d / 400
}

/// The four cells of the footprint whose top-left corner is `p`.
fn footprint(p: Point) -> [Point; 4] {
    [p, p.shift(1, 0), p.shift(0, 1), p.shift(1, 1)]
}

/// Pairs of cells flanking each side of the footprint at `p`: west, east,
/// north, south.
fn flanks(p: Point) -> [[Point; 2]; 4] {
    [
        [p.shift(-1, 0), p.shift(-1, 1)],
        [p.shift(2, 0), p.shift(2, 1)],
        [p.shift(0, -1), p.shift(1, -1)],
        [p.shift(0, 2), p.shift(1, 2)],
    ]
}

/// Whether a 2×2 building fits with its top-left corner at `p`.
///
/// One whole side must face two path cells, and no footprint cell may be a
/// path or another building.
pub fn is_building_site(grid: &Grid<Terrain>, p: Point) -> bool {
    let on_path = |q: Point| grid.at(q) == Some(Terrain::Path);
    let faces_path = flanks(p).iter().any(|pair| pair.iter().all(|&q| on_path(q)));
    let clear = footprint(p).iter().all(|&q| {
        grid.at(q)
            .is_some_and(|t| t != Terrain::Path && !t.is_building())
    });
    faces_path && clear
}

/// Draw random corners until one is a building site, or give up after
/// `attempts` draws.
///
/// Corners are drawn with x in `3..=width - 3` and y in `5..=height - 6`.
pub fn find_building_site<R: Rng>(
    rng: &mut R,
    grid: &Grid<Terrain>,
    attempts: u32,
) -> Option<Point> {
    let (w, h) = (grid.width(), grid.height());
    if w - 3 < 3 || h - 6 < 5 {
        return None;
    }
    (0..attempts)
        .map(|_| {
            let x = rng.random_range(3..=w - 3);
            let y = rng.random_range(5..=h - 6);
            Point::new(x, y)
        })
        .find(|&p| is_building_site(grid, p))
}

/// Roll against `chance` and, on success, place a `kind` building.
///
/// Returns the top-left corner of the placed building. A failed roll and a
/// fruitless site search both return `None`; the latter is logged.
pub fn place_building<R: Rng>(
    rng: &mut R,
    grid: &mut Grid<Terrain>,
    kind: Terrain,
    chance: i32,
    attempts: u32,
) -> Option<Point> {
    if rng.random_range(0..100) >= chance {
        debug!("{kind} not rolled (chance {chance}%)");
        return None;
    }
    let Some(p) = find_building_site(rng, grid, attempts) else {
        warn!("no site for {kind} after {attempts} attempts; skipping it");
        return None;
    };
    for q in footprint(p) {
        grid.set(q, kind);
    }
    debug!("{kind} placed at {p}");
    Some(p)
}
