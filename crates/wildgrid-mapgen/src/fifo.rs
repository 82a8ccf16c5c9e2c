use wildgrid_core::Point;

/// First-in first-out work list over a single buffer.
///
/// Popping only advances a cursor, so every pushed point stays in `buf`
/// until the queue is dropped. Diffusion pushes each cell about once, which
/// keeps the buffer close to its initial capacity.
pub(crate) struct Fifo {
    buf: Vec<Point>,
    head: usize,
}

impl Fifo {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: Vec::with_capacity(n),
            head: 0,
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.buf.push(p);
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        let p = *self.buf.get(self.head)?;
        self.head += 1;
        Some(p)
    }

    /// Total number of pushes so far.
    pub(crate) fn pushed(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_push_order() {
        let mut q = Fifo::with_capacity(4);
        assert_eq!(q.pop(), None);
        q.push(Point::new(1, 1));
        q.push(Point::new(2, 2));
        assert_eq!(q.pop(), Some(Point::new(1, 1)));
        q.push(Point::new(3, 3));
        assert_eq!(q.pop(), Some(Point::new(2, 2)));
        assert_eq!(q.pop(), Some(Point::new(3, 3)));
        assert_eq!(q.pop(), None);
        assert_eq!(q.pushed(), 3);
    }
}
