use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::grid::{Cell, Grid};

/// Default save location, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "city_save.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is corrupt: {0}")]
    Corrupt(String),
}

/// Writes the grid to `path` as a JSON array of rows, each row an array of
/// lowercase cell tags. Overwrites best-effort; a failed write surfaces as
/// `Io` and leaves the in-memory grid untouched.
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let rows: Vec<&[Cell]> = grid.rows().collect();
    let json = serde_json::to_string(&rows).map_err(io::Error::from)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a grid back from `path`. A missing file is not an error: it means
/// no city has been saved yet, so a fresh default grid is returned. A file
/// that exists but does not parse into a rectangular grid of known tags
/// fails with `Corrupt` and never replaces the caller's live grid.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, PersistenceError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no save file, starting from a fresh grid");
            return Ok(Grid::default());
        }
        Err(e) => return Err(PersistenceError::Io(e)),
    };

    let rows: Vec<Vec<Cell>> =
        serde_json::from_str(&text).map_err(|e| PersistenceError::Corrupt(e.to_string()))?;
    grid_from_rows(rows)
}

fn grid_from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, PersistenceError> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(PersistenceError::Corrupt("save file contains an empty grid".into()));
    }
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(PersistenceError::Corrupt(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
    }
    let cells = rows.into_iter().flatten().collect();
    Ok(Grid::from_cells(width as u32, height as u32, cells))
}
