//! A dense, owned 2D grid.
//!
//! [`Grid`] stores one value per cell of a rectangle anchored at the origin.
//! Tiles keep their terrain and elevation in two grids of the same size.

use crate::error::{Error, Result};
use crate::geom::{Point, Range};

/// A 2D grid of `T` values in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Copy> Grid<T> {
    /// Create a `width` × `height` grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    /// Build a grid by evaluating `f` at every point.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            width: bounds.width(),
            height: bounds.height(),
        }
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Point at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Mutable access to the cell at a point.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut T> {
        let i = self.index(p)?;
        Some(&mut self.cells[i])
    }

    /// Get the cell at a point, failing with [`Error::OutOfRange`].
    pub fn get(&self, p: Point) -> Result<T> {
        self.at(p).ok_or(Error::OutOfRange {
            pos: p,
            bounds: self.bounds(),
        })
    }

    /// Set the cell at a point. Returns `false` if `p` is out of bounds.
    pub fn set(&mut self, p: Point, v: T) -> bool {
        match self.at_mut(p) {
            Some(c) => {
                *c = v;
                true
            }
            None => false,
        }
    }

    /// Set the cell at a point, failing with [`Error::OutOfRange`].
    pub fn put(&mut self, p: Point, v: T) -> Result<()> {
        if self.set(p, v) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                pos: p,
                bounds: self.bounds(),
            })
        }
    }

    pub fn fill(&mut self, v: T) {
        self.cells.fill(v);
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, v)| f(p, v)).count()
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.point(i), v))
    }

    /// Row `y` as a slice, or `None` if out of bounds.
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y * self.width) as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// The raw cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Count how many cells equal `v`.
    pub fn count(&self, v: T) -> usize {
        self.cells.iter().filter(|&&c| c == v).count()
    }
}
