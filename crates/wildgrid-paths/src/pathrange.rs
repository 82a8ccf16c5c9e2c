use wildgrid_core::{Error, Point, Range, Result};

use crate::pqueue::{Handle, PriorityQueue};

/// Sentinel cost meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-run search node
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) cost: i32,
    pub(crate) parent: Option<usize>,
    /// Queue entry while the node is open; `None` once settled or if the
    /// node was never admitted.
    pub(crate) handle: Option<Handle>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: UNREACHABLE,
            parent: None,
            handle: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Owns the working state of Dijkstra searches over a grid rectangle.
///
/// The node array and queue are reused between searches to avoid
/// reallocating, but every search resets them completely before it starts:
/// costs go back to [`UNREACHABLE`], predecessors and queue handles are
/// dropped. Nothing from a previous run can influence the next one, even
/// when the two runs admit different cells.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) queue: PriorityQueue<i32, usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); len],
            queue: PriorityQueue::with_capacity(len),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range, resizing the node array.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.nodes.clear();
        self.nodes.resize(rng.len(), Node::default());
        self.queue.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Settled cost of `p` in the last search, or [`UNREACHABLE`].
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.nodes[i].cost,
            None => UNREACHABLE,
        }
    }

    /// Return every node to its initial state and empty the queue.
    pub(crate) fn reset(&mut self) {
        self.nodes.fill(Node::default());
        self.queue.clear();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Like [`idx`](Self::idx) but reports [`Error::OutOfRange`].
    pub(crate) fn checked_idx(&self, p: Point) -> Result<usize> {
        self.idx(p).ok_or(Error::OutOfRange {
            pos: p,
            bounds: self.rng,
        })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_and_point_agree() {
        let pr = PathRange::new(Range::new(2, 3, 12, 8));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn checked_idx_reports_bounds() {
        let rng = Range::new(0, 0, 4, 4);
        let pr = PathRange::new(rng);
        assert_eq!(
            pr.checked_idx(Point::new(4, 0)),
            Err(Error::OutOfRange {
                pos: Point::new(4, 0),
                bounds: rng
            })
        );
    }

    #[test]
    fn set_range_resizes_nodes() {
        let mut pr = PathRange::new(Range::new(0, 0, 5, 5));
        pr.set_range(Range::new(0, 0, 20, 20));
        assert_eq!(pr.nodes.len(), 400);
        assert_eq!(pr.width, 20);
        assert_eq!(pr.cost_at(Point::new(19, 19)), UNREACHABLE);
    }
}
