use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors reported by tile generation and pathfinding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A position lies outside the grid it was used with.
    #[error("position {pos} is outside {bounds}")]
    OutOfRange { pos: Point, bounds: Range },
    /// A supplied gate coordinate is not in the usable interior span.
    #[error("{side} gate {value} is outside the valid span {min}..={max}")]
    GateOutOfRange {
        side: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    /// No route connects two cells that had to be joined.
    #[error("no route from {from} to {to}")]
    NoRoute { from: Point, to: Point },
}

pub type Result<T> = std::result::Result<T, Error>;
