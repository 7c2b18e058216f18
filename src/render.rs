//! Render-support surface for the external renderer: the deterministic
//! fallback color per building type (used when a tile image fails to
//! resolve) and an on-demand ASCII view of the grid.

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color substituted when no tile asset resolves for a cell.
pub fn fallback_color(cell: Cell) -> Rgb {
    match cell {
        Cell::Grass => Rgb(34, 139, 34),
        Cell::House => Rgb(255, 0, 0),
        Cell::Shop => Rgb(0, 0, 255),
        Cell::Factory => Rgb(128, 128, 128),
    }
}

/// One character per cell for text output.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Grass => '.',
        Cell::House => 'H',
        Cell::Shop => 'S',
        Cell::Factory => 'F',
    }
}

/// Builds the whole grid as newline-terminated rows of glyphs.
pub fn ascii_map(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for row in grid.rows() {
        out.extend(row.iter().copied().map(glyph));
        out.push('\n');
    }
    out
}
