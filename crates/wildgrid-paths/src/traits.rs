use wildgrid_core::Point;

/// Minimal pathfinding interface: neighbor enumeration and queue admission.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` takes part in a search at all. Cells that are not admitted
    /// never enter the queue, so they are never reached or relaxed into.
    fn admits(&self, p: Point) -> bool;
}

/// Pather with non-negative edge costs.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into adjacent `to`. Must be >= 0.
    fn cost(&self, from: Point, to: Point) -> i32;

    /// Total cost on reaching `to` from `from`, where `g` is the settled cost
    /// of `from`. The result must never be lower than `g`.
    ///
    /// Defaults to `g + cost(from, to)`, saturating.
    fn accumulate(&self, g: i32, from: Point, to: Point) -> i32 {
        g.saturating_add(self.cost(from, to))
    }
}
