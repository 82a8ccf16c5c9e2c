use log::trace;
use wildgrid_core::{Grid, Point, Result};

use crate::PathRange;
use crate::pathrange::UNREACHABLE;
use crate::traits::WeightedPather;

impl PathRange {
    /// Run Dijkstra from `source`, stopping early once `target` is settled.
    ///
    /// Every admitted cell (and the source) is queued up front at
    /// [`UNREACHABLE`]; relaxations lower keys in place. Returns whether the
    /// target was settled. Without a target the search runs until the queue
    /// is exhausted or only unreachable nodes remain.
    fn search<P: WeightedPather>(
        &mut self,
        pather: &P,
        source: Point,
        target: Option<Point>,
    ) -> Result<bool> {
        let si = self.checked_idx(source)?;
        let goal = target.map(|t| self.checked_idx(t)).transpose()?;

        self.reset();
        self.nodes[si].cost = 0;
        for i in 0..self.nodes.len() {
            let p = self.point(i);
            if i == si || pather.admits(p) {
                self.nodes[i].handle = Some(self.queue.insert(self.nodes[i].cost, i));
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut settled = 0usize;
        let mut found = false;

        while let Some((g, ci)) = self.queue.remove_min() {
            self.nodes[ci].handle = None;
            if g == UNREACHABLE {
                // Everything still queued is cut off from the source.
                break;
            }
            settled += 1;
            if Some(ci) == goal {
                found = true;
                break;
            }

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Some(h) = self.nodes[ni].handle else {
                    continue;
                };
                let tentative = pather.accumulate(g, cp, np);
                let n = &mut self.nodes[ni];
                if tentative >= n.cost {
                    continue;
                }
                n.cost = tentative;
                n.parent = Some(ci);
                self.queue.decrease_key(h, tentative);
            }
        }

        self.nbuf = nbuf;
        trace!(
            "dijkstra from {source}: settled {settled} of {} nodes, target reached: {found}",
            self.nodes.len()
        );
        Ok(found)
    }

    /// Find the cheapest route from `from` to `to`.
    ///
    /// Returns the route including both endpoints, ordered from `from` to
    /// `to`, or `None` if `to` cannot be reached. Positions outside the
    /// range fail with [`Error::OutOfRange`](wildgrid_core::Error::OutOfRange).
    pub fn carve_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Vec<Point>>> {
        if !self.search(pather, from, Some(to))? {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut cur = self.idx(to);
        while let Some(ci) = cur {
            path.push(self.point(ci));
            cur = self.nodes[ci].parent;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Compute the cost of reaching every cell from `source`.
    ///
    /// The source always costs 0. Cells that are not admitted by `pather`, or
    /// are cut off from the source, hold [`UNREACHABLE`].
    pub fn distance_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        source: Point,
    ) -> Result<Grid<i32>> {
        self.search(pather, source, None)?;
        let rng = self.rng;
        Ok(Grid::from_fn(rng.width(), rng.height(), |p| {
            self.cost_at(p + rng.min)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;
    use wildgrid_core::{Error, Range};

    /// Open grid with `#` walls and digit cells costing their value.
    struct Simple {
        cells: Vec<Vec<u8>>,
    }

    impl Simple {
        fn new(rows: &[&str]) -> Self {
            Self {
                cells: rows.iter().map(|r| r.bytes().collect()).collect(),
            }
        }

        fn range(&self) -> Range {
            Range::new(0, 0, self.cells[0].len() as i32, self.cells.len() as i32)
        }

        fn at(&self, p: Point) -> Option<u8> {
            self.cells.get(p.y as usize)?.get(p.x as usize).copied()
        }
    }

    impl Pather for Simple {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.range().contains(n)));
        }

        fn admits(&self, p: Point) -> bool {
            self.at(p).is_some_and(|c| c != b'#')
        }
    }

    impl WeightedPather for Simple {
        fn cost(&self, _from: Point, to: Point) -> i32 {
            self.at(to).map_or(UNREACHABLE, |c| i32::from(c - b'0'))
        }
    }

    #[test]
    fn route_prefers_cheap_cells() {
        let s = Simple::new(&["11111", "19991", "11111"]);
        let mut pr = PathRange::new(s.range());
        let path = pr
            .carve_path(&s, Point::new(0, 1), Point::new(4, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 1)));
        assert_eq!(path.last(), Some(&Point::new(4, 1)));
        assert!(!path.contains(&Point::new(2, 1)));
        assert_eq!(pr.cost_at(Point::new(4, 1)), 6);
    }

    #[test]
    fn walled_target_is_not_found() {
        let s = Simple::new(&["1#1", "1#1", "1#1"]);
        let mut pr = PathRange::new(s.range());
        let res = pr.carve_path(&s, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn out_of_range_endpoints_fail() {
        let s = Simple::new(&["111", "111"]);
        let mut pr = PathRange::new(s.range());
        assert!(matches!(
            pr.carve_path(&s, Point::new(-1, 0), Point::new(2, 1)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            pr.carve_path(&s, Point::new(0, 0), Point::new(3, 1)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            pr.distance_map(&s, Point::new(0, 2)),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn distance_map_satisfies_bellman_equations() {
        let s = Simple::new(&["12341", "1#9#1", "15#21", "11111"]);
        let mut pr = PathRange::new(s.range());
        let src = Point::new(0, 0);
        let field = pr.distance_map(&s, src).unwrap();
        assert_eq!(field.at(src), Some(0));
        let mut buf = Vec::new();
        for (p, c) in field.iter() {
            if p == src {
                continue;
            }
            if !s.admits(p) {
                assert_eq!(c, UNREACHABLE);
                continue;
            }
            buf.clear();
            s.neighbors(p, &mut buf);
            let best = buf
                .iter()
                .filter_map(|&n| field.at(n))
                .filter(|&d| d != UNREACHABLE)
                .map(|d| d + s.cost(Point::ZERO, p))
                .min()
                .unwrap_or(UNREACHABLE);
            assert_eq!(c, best, "at {p}");
        }
    }

    #[test]
    fn runs_do_not_leak_state() {
        let open = Simple::new(&["111", "111", "111"]);
        let walled = Simple::new(&["1#1", "###", "1#1"]);
        let mut pr = PathRange::new(open.range());
        let first = pr.distance_map(&open, Point::new(0, 0)).unwrap();
        assert_eq!(first.at(Point::new(2, 2)), Some(4));
        let second = pr.distance_map(&walled, Point::new(0, 0)).unwrap();
        assert_eq!(second.at(Point::new(0, 0)), Some(0));
        assert_eq!(second.at(Point::new(2, 2)), Some(UNREACHABLE));
        assert_eq!(second.at(Point::new(1, 0)), Some(UNREACHABLE));
        let third = pr.distance_map(&open, Point::new(2, 2)).unwrap();
        assert_eq!(third.at(Point::new(0, 0)), Some(4));
    }

    #[test]
    fn distance_map_covers_whole_range() {
        let s = Simple::new(&["111", "111"]);
        let mut pr = PathRange::new(s.range());
        let field = pr.distance_map(&s, Point::new(2, 1)).unwrap();
        assert_eq!(field.size(), Point::new(3, 2));
        assert_eq!(field.at(Point::new(0, 0)), Some(3));
        assert_eq!(field.count(UNREACHABLE), 0);
    }
}
