//! Elevation surface: seeded diffusion followed by Gaussian smoothing.

use log::debug;
use rand::{Rng, RngExt};
use wildgrid_core::{Grid, Point};

use crate::fifo::Fifo;

/// Elevations of the diffusion seeds: 1, 21, 41, …, 241.
const SEED_VALUES: std::ops::Range<u8> = 1..255;
const SEED_STEP: usize = 20;

/// 5×5 Gaussian kernel used for both smoothing passes.
const GAUSSIAN: [[i32; 5]; 5] = [
    [1, 4, 7, 4, 1],
    [4, 16, 26, 16, 4],
    [7, 26, 41, 26, 7],
    [4, 16, 26, 16, 4],
    [1, 4, 7, 4, 1],
];

/// Generate a smoothed `width` × `height` elevation grid.
pub fn height_field<R: Rng>(rng: &mut R, width: i32, height: i32) -> Grid<u8> {
    let raw = diffuse(rng, width, height);
    let once = smooth(&raw);
    smooth(&once)
}

/// Scatter the seed elevations on distinct random cells and spread each
/// value to every unassigned 8-neighbor, breadth first, until the grid is
/// full.
///
/// Zero marks an unassigned cell, which is why no seed value is zero.
pub fn diffuse<R: Rng>(rng: &mut R, width: i32, height: i32) -> Grid<u8> {
    let mut grid = Grid::new(width, height, 0u8);
    let area = grid.bounds().len();
    let mut queue = Fifo::with_capacity(area);

    for value in SEED_VALUES.step_by(SEED_STEP).take(area) {
        let p = loop {
            let p = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            if grid.at(p) == Some(0) {
                break p;
            }
        };
        grid.set(p, value);
        queue.push(p);
    }

    while let Some(p) = queue.pop() {
        let Some(value) = grid.at(p) else {
            continue;
        };
        for n in p.neighbors_8() {
            if grid.at(n) == Some(0) {
                grid.set(n, value);
                queue.push(n);
            }
        }
    }

    debug!("height diffusion visited {} cells", queue.pushed());
    grid
}

/// One pass of the 5×5 Gaussian blur. Reads only `src`.
///
/// Kernel cells falling outside the grid are left out of both the weighted
/// sum and the normalizing weight, so borders are not darkened.
pub fn smooth(src: &Grid<u8>) -> Grid<u8> {
    Grid::from_fn(src.width(), src.height(), |p| {
        let mut weight = 0;
        let mut total = 0;
        for (dy, row) in GAUSSIAN.iter().enumerate() {
            for (dx, &k) in row.iter().enumerate() {
                let q = p.shift(dx as i32 - 2, dy as i32 - 2);
                if let Some(v) = src.at(q) {
                    weight += k;
                    total += i32::from(v) * k;
                }
            }
        }
        if weight == 0 {
            return 0;
        }
        u8::try_from(total / weight).unwrap_or(u8::MAX)
    })
}
