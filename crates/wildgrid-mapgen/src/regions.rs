//! Biome regions grown by stochastic flood fill, then walled in.

use log::{debug, warn};
use rand::{Rng, RngExt};
use wildgrid_core::{Grid, Point, Terrain};

use crate::config::GenConfig;
use crate::fifo::Fifo;
use crate::gates::{Gates, Side};

/// Grow biome regions over a fresh `width` × `height` grid.
///
/// Seeds for open land, clearing, mountain and forest are dropped on random
/// empty cells, in that order. Each queued cell then tries to claim its empty
/// west, north, south and east neighbors; horizontal attempts succeed with
/// `horizontal_spread`% chance and vertical ones with `vertical_spread`%,
/// which stretches blobs sideways. After a failed attempt the cell is
/// queued again, at most once per visit and `max_requeues` times overall,
/// so it gets another chance later. Any cell still empty when the queue
/// drains takes the kind of a claimed neighbor.
pub fn grow_regions<R: Rng>(
    rng: &mut R,
    config: &GenConfig,
    width: i32,
    height: i32,
) -> Grid<Terrain> {
    let mut grid = Grid::new(width, height, Terrain::Empty);
    let area = grid.bounds().len();
    let mut queue = Fifo::with_capacity(area * 2);
    let mut requeues = Grid::new(width, height, 0u8);

    let counts: Vec<u32> = config
        .region_seeds
        .iter()
        .map(|c| rng.random_range(c.min..=c.max.max(c.min)))
        .collect();
    debug!("region seeds (open land, clearing, mountain, forest): {counts:?}");

    let mut placed = 0usize;
    for (kind, count) in Terrain::BIOMES.into_iter().zip(counts) {
        for _ in 0..count {
            if placed >= area {
                break;
            }
            let p = loop {
                let p = Point::new(rng.random_range(0..width), rng.random_range(0..height));
                if grid.at(p) == Some(Terrain::Empty) {
                    break p;
                }
            };
            grid.set(p, kind);
            queue.push(p);
            placed += 1;
        }
    }

    let h = config.horizontal_spread;
    let v = config.vertical_spread;
    while let Some(p) = queue.pop() {
        let Some(kind) = grid.at(p) else {
            continue;
        };
        let mut requeued = false;
        for (n, pct) in p.neighbors_4().into_iter().zip([h, v, v, h]) {
            if grid.at(n) != Some(Terrain::Empty) {
                continue;
            }
            if rng.random_range(0..100) < pct {
                grid.set(n, kind);
                queue.push(n);
            } else if !requeued {
                requeued = true;
                if let Some(r) = requeues.at_mut(p)
                    && *r < config.max_requeues
                {
                    *r += 1;
                    queue.push(p);
                }
            }
        }
    }
    debug!("region diffusion processed {} queue entries", queue.pushed());

    let leftover = fill_gaps(&mut grid);
    if leftover > 0 {
        warn!("{leftover} cells were not reached by region diffusion; filled from neighbors");
    }
    grid
}

/// Give every empty cell the kind of its first claimed 4-neighbor,
/// sweeping until nothing changes. Returns how many cells were filled.
fn fill_gaps(grid: &mut Grid<Terrain>) -> usize {
    let mut filled = 0;
    loop {
        let mut changed = false;
        for p in grid.bounds() {
            if grid.at(p) != Some(Terrain::Empty) {
                continue;
            }
            let claimed = p
                .neighbors_4()
                .into_iter()
                .filter_map(|n| grid.at(n))
                .find(|&t| t != Terrain::Empty);
            if let Some(t) = claimed {
                grid.set(p, t);
                filled += 1;
                changed = true;
            }
        }
        if !changed {
            return filled;
        }
    }
}

/// Turn the outer ring into boulders and open the four gates: each gate cell
/// and the cell one step inward become path.
pub fn wall_border(grid: &mut Grid<Terrain>, gates: &Gates) {
    let bounds = grid.bounds();
    for p in bounds {
        if bounds.on_edge(p) {
            grid.set(p, Terrain::Boulder);
        }
    }
    for side in Side::ALL {
        for c in gates.cells(side, bounds.width(), bounds.height()) {
            grid.set(c, Terrain::Path);
        }
    }
}

/// Replace the whole `side` border, gate included, with boulders.
pub fn block_side(grid: &mut Grid<Terrain>, side: Side) {
    let (w, h) = (grid.width(), grid.height());
    let cells: Vec<Point> = match side {
        Side::North => (0..w).map(|x| Point::new(x, 0)).collect(),
        Side::South => (0..w).map(|x| Point::new(x, h - 1)).collect(),
        Side::East => (0..h).map(|y| Point::new(w - 1, y)).collect(),
        Side::West => (0..h).map(|y| Point::new(0, y)).collect(),
    };
    for p in cells {
        grid.set(p, Terrain::Boulder);
    }
}
