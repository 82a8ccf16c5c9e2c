//! Generation tunables.

/// Inclusive range for how many seeds a biome gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedCount {
    pub min: u32,
    pub max: u32,
}

impl SeedCount {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Rule for scattering single-cell obstacles: place `min` unconditionally,
/// then keep placing while a `continue_pct`% roll succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scatter {
    pub min: u32,
    pub continue_pct: u32,
}

/// Every knob of tile generation.
///
/// The defaults reproduce the classic tile look: a handful of seeds per
/// biome, wide horizontal blobs, a few dozen boulders and trees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Seed counts for open land, clearing, mountain and forest, in that
    /// order.
    pub region_seeds: [SeedCount; 4],
    /// Chance in percent that a biome spreads east or west per attempt.
    pub horizontal_spread: u32,
    /// Chance in percent that a biome spreads north or south per attempt.
    pub vertical_spread: u32,
    /// How many times a single cell may be re-queued after failed spreads.
    pub max_requeues: u8,
    pub boulders: Scatter,
    pub trees: Scatter,
    /// Attempts at finding a building site before giving up on it.
    pub building_attempts: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            region_seeds: [SeedCount::new(2, 5); 4],
            horizontal_spread: 80,
            vertical_spread: 20,
            max_requeues: 32,
            boulders: Scatter {
                min: 10,
                continue_pct: 95,
            },
            trees: Scatter {
                min: 10,
                continue_pct: 95,
            },
            building_attempts: 10_000,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: GenConfig =
            serde_json::from_str(r#"{ "vertical_spread": 50, "trees": { "min": 0, "continue_pct": 0 } }"#)
                .unwrap();
        assert_eq!(cfg.vertical_spread, 50);
        assert_eq!(cfg.trees.min, 0);
        assert_eq!(cfg.horizontal_spread, GenConfig::default().horizontal_spread);
        assert_eq!(cfg.boulders, GenConfig::default().boulders);
    }
}
