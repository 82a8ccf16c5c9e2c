//! Single-cell obstacles sprinkled over the interior.

use rand::{Rng, RngExt};
use wildgrid_core::{Grid, Point, Terrain};

use crate::config::Scatter;

/// Roll interior positions per `rule` and turn each one into `obstacle`
/// unless the cell currently holds one of the `skip` kinds.
///
/// Returns how many positions were rolled. The continuation rolls are capped
/// at the grid area so a 100% rule still terminates.
pub fn scatter<R: Rng>(
    rng: &mut R,
    grid: &mut Grid<Terrain>,
    rule: Scatter,
    obstacle: Terrain,
    skip: &[Terrain],
) -> usize {
    let (w, h) = (grid.width(), grid.height());
    if w < 3 || h < 3 {
        return 0;
    }
    let cap = grid.bounds().len().max(rule.min as usize);
    let mut rolled = 0;
    while rolled < cap {
        if rolled >= rule.min as usize && rng.random_range(0..100) >= rule.continue_pct {
            break;
        }
        let y = rng.random_range(1..h - 1);
        let x = rng.random_range(1..w - 1);
        let p = Point::new(x, y);
        if let Some(t) = grid.at(p)
            && !skip.contains(&t)
        {
            grid.set(p, obstacle);
        }
        rolled += 1;
    }
    rolled
}

/// Boulders land anywhere inside the border except on forest.
pub fn place_boulders<R: Rng>(rng: &mut R, grid: &mut Grid<Terrain>, rule: Scatter) -> usize {
    scatter(rng, grid, rule, Terrain::Boulder, &[Terrain::Forest])
}

/// Trees avoid mountains and never block a carved path.
pub fn place_trees<R: Rng>(rng: &mut R, grid: &mut Grid<Terrain>, rule: Scatter) -> usize {
    scatter(
        rng,
        grid,
        rule,
        Terrain::Tree,
        &[Terrain::Mountain, Terrain::Path],
    )
}
