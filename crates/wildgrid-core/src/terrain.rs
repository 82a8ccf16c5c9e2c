//! Terrain kinds and their display glyphs.

use std::fmt;

/// The kind of terrain occupying a tile cell.
///
/// `Empty` is the unassigned state used while regions are being grown; a
/// finished tile normally contains none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Empty,
    Boulder,
    Tree,
    Path,
    Mart,
    Center,
    OpenLand,
    Clearing,
    Mountain,
    Forest,
    Player,
}

impl Terrain {
    /// Every terrain kind, in declaration order.
    pub const ALL: [Terrain; 11] = [
        Terrain::Empty,
        Terrain::Boulder,
        Terrain::Tree,
        Terrain::Path,
        Terrain::Mart,
        Terrain::Center,
        Terrain::OpenLand,
        Terrain::Clearing,
        Terrain::Mountain,
        Terrain::Forest,
        Terrain::Player,
    ];

    /// The biomes grown by region diffusion, in seeding order.
    pub const BIOMES: [Terrain; 4] = [
        Terrain::OpenLand,
        Terrain::Clearing,
        Terrain::Mountain,
        Terrain::Forest,
    ];

    /// Display glyph, or `None` for kinds that have no on-map representation.
    pub const fn glyph(self) -> Option<char> {
        match self {
            Terrain::Player => Some('@'),
            Terrain::Boulder | Terrain::Mountain => Some('%'),
            Terrain::Tree | Terrain::Forest => Some('^'),
            Terrain::Path => Some('#'),
            Terrain::Mart => Some('M'),
            Terrain::Center => Some('C'),
            Terrain::OpenLand => Some(':'),
            Terrain::Clearing => Some('.'),
            Terrain::Empty => None,
        }
    }

    /// Whether this is one of the two 2×2 buildings.
    pub const fn is_building(self) -> bool {
        matches!(self, Terrain::Mart | Terrain::Center)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Empty => "empty",
            Terrain::Boulder => "boulder",
            Terrain::Tree => "tree",
            Terrain::Path => "path",
            Terrain::Mart => "mart",
            Terrain::Center => "center",
            Terrain::OpenLand => "open land",
            Terrain::Clearing => "clearing",
            Terrain::Mountain => "mountain",
            Terrain::Forest => "forest",
            Terrain::Player => "player",
        };
        f.write_str(name)
    }
}
