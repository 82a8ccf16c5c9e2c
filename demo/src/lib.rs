//! Text rendering for wildgrid tiles and distance fields.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::warn;
use wildgrid_core::{Grid, Point, Terrain};
use wildgrid_mapgen::GenConfig;
use wildgrid_paths::{DistanceField, UNREACHABLE};

/// A rendered tile and the cells that had no glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub anomalies: Vec<Point>,
}

/// Foreground colour for a terrain kind.
pub fn terrain_color(t: Terrain) -> Color {
    match t {
        Terrain::Player => Color::White,
        Terrain::Boulder | Terrain::Mountain => Color::Grey,
        Terrain::Tree | Terrain::Forest => Color::DarkGreen,
        Terrain::Path => Color::Yellow,
        Terrain::Mart => Color::Blue,
        Terrain::Center => Color::Red,
        Terrain::OpenLand => Color::Green,
        Terrain::Clearing => Color::DarkYellow,
        Terrain::Empty => Color::Magenta,
    }
}

/// Log the anomalies of a rendering, if any.
fn report(anomalies: &[Point]) {
    if let Some(first) = anomalies.first() {
        warn!(
            "{} cells have no glyph (first at {first}); left blank",
            anomalies.len()
        );
    }
}

/// Render `terrain` one row per line. Cells without a glyph are left
/// blank and listed in [`Rendered::anomalies`].
pub fn render_map(terrain: &Grid<Terrain>) -> Rendered {
    let mut text = String::with_capacity(terrain.bounds().len() + terrain.height() as usize);
    let mut anomalies = Vec::new();
    for (p, t) in terrain.iter() {
        match t.glyph() {
            Some(c) => text.push(c),
            None => {
                text.push(' ');
                anomalies.push(p);
            }
        }
        if p.x == terrain.width() - 1 {
            text.push('\n');
        }
    }
    report(&anomalies);
    Rendered { text, anomalies }
}

/// Write `terrain` to `out` with one colour per terrain kind.
///
/// Returns the cells that had no glyph.
pub fn write_map_colored<W: Write>(out: &mut W, terrain: &Grid<Terrain>) -> io::Result<Vec<Point>> {
    let mut anomalies = Vec::new();
    for (p, t) in terrain.iter() {
        let c = t.glyph().unwrap_or_else(|| {
            anomalies.push(p);
            ' '
        });
        queue!(out, SetForegroundColor(terrain_color(t)), Print(c))?;
        if p.x == terrain.width() - 1 {
            queue!(out, ResetColor, Print('\n'))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    report(&anomalies);
    Ok(anomalies)
}

/// Render a distance field as rows of three-column cells holding the cost
/// modulo 100. Unreachable cells are blank.
pub fn render_distance(field: &DistanceField) -> String {
    let costs = field.costs();
    let mut text = String::with_capacity(costs.bounds().len() * 3 + costs.height() as usize);
    for (p, cost) in costs.iter() {
        if cost == UNREACHABLE {
            text.push_str("   ");
        } else {
            let _ = write!(text, "{:3}", cost % 100);
        }
        if p.x == costs.width() - 1 {
            text.push('\n');
        }
    }
    text
}

/// Read a generation config from a JSON file. Missing fields keep their
/// defaults.
pub fn load_config(path: &Path) -> io::Result<GenConfig> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
