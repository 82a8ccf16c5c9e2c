//! Shortest paths over wildgrid tiles.
//!
//! One Dijkstra implementation, driven by a [`PriorityQueue`] with in-place
//! key decrease, serves two purposes:
//!
//! - **Path carving** ([`PathRange::carve_path`] with a [`CarvePather`]):
//!   the cheapest gate-to-gate route over the elevation surface.
//! - **Distance fields** ([`DistanceField::compute`] with a
//!   [`TravelPather`]): the cost of reaching every cell from one source for
//!   a traveler [`Profile`].
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbors, queue admission |
//! | [`WeightedPather`] : [`Pather`] | edge cost, cost accumulation |

mod cost;
mod dijkstra;
mod field;
mod pathers;
mod pathrange;
mod pqueue;
mod traits;

pub use cost::Profile;
pub use field::DistanceField;
pub use pathers::{CarvePather, TravelPather};
pub use pathrange::{PathRange, UNREACHABLE};
pub use pqueue::{Handle, PriorityQueue};
pub use traits::{Pather, WeightedPather};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn profile_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Profile::Hiker).unwrap(), "\"hiker\"");
        let back: Profile = serde_json::from_str("\"rival\"").unwrap();
        assert_eq!(back, Profile::Rival);
    }
}
