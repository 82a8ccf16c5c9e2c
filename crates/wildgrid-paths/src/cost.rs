//! Traveler profiles and the terrain cost table.

use std::fmt;

use wildgrid_core::Terrain;

/// A named cost policy for one kind of mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Profile {
    /// Walks anywhere that is not solid, including rough biomes.
    Hiker,
    /// Sticks to open ground; mountains and forests are impassable.
    Rival,
    /// Used while carving paths; terrain is free and cost comes from
    /// elevation instead.
    Carve,
}

impl Profile {
    /// The profiles that get a distance field on every tile.
    pub const TRAVELERS: [Profile; 2] = [Profile::Hiker, Profile::Rival];

    /// Cost of entering a cell of kind `t`, or `None` if impassable.
    pub const fn weight(self, t: Terrain) -> Option<i32> {
        match self {
            Profile::Hiker => match t {
                Terrain::Boulder
                | Terrain::Tree
                | Terrain::Mart
                | Terrain::Center
                | Terrain::Player => None,
                Terrain::Path => Some(10),
                Terrain::OpenLand => Some(15),
                Terrain::Clearing => Some(10),
                Terrain::Mountain => Some(15),
                Terrain::Forest => Some(15),
                Terrain::Empty => Some(0),
            },
            Profile::Rival => match t {
                Terrain::Boulder
                | Terrain::Tree
                | Terrain::Mart
                | Terrain::Center
                | Terrain::Mountain
                | Terrain::Forest
                | Terrain::Player => None,
                Terrain::Path => Some(10),
                Terrain::OpenLand => Some(20),
                Terrain::Clearing => Some(10),
                Terrain::Empty => Some(0),
            },
            Profile::Carve => Some(0),
        }
    }

    /// Whether a cell of kind `t` can be entered at all.
    pub const fn passable(self, t: Terrain) -> bool {
        self.weight(t).is_some()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Profile::Hiker => "hiker",
            Profile::Rival => "rival",
            Profile::Carve => "carve",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiker_table() {
        let h = Profile::Hiker;
        assert_eq!(h.weight(Terrain::Path), Some(10));
        assert_eq!(h.weight(Terrain::OpenLand), Some(15));
        assert_eq!(h.weight(Terrain::Clearing), Some(10));
        assert_eq!(h.weight(Terrain::Mountain), Some(15));
        assert_eq!(h.weight(Terrain::Forest), Some(15));
        assert_eq!(h.weight(Terrain::Empty), Some(0));
        for t in [
            Terrain::Boulder,
            Terrain::Tree,
            Terrain::Mart,
            Terrain::Center,
            Terrain::Player,
        ] {
            assert!(!h.passable(t), "{t}");
        }
    }

    #[test]
    fn rival_avoids_rough_biomes_and_pays_more_on_open_land() {
        let r = Profile::Rival;
        assert_eq!(r.weight(Terrain::Mountain), None);
        assert_eq!(r.weight(Terrain::Forest), None);
        assert_eq!(r.weight(Terrain::OpenLand), Some(20));
        assert!(r.weight(Terrain::OpenLand) > Profile::Hiker.weight(Terrain::OpenLand));
        assert_eq!(r.weight(Terrain::Path), Some(10));
        assert_eq!(r.weight(Terrain::Clearing), Some(10));
        assert_eq!(r.weight(Terrain::Player), None);
    }

    #[test]
    fn carve_is_free_everywhere() {
        for t in Terrain::ALL {
            assert_eq!(Profile::Carve.weight(t), Some(0));
        }
    }
}
