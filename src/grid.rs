use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default city dimensions, in cells.
pub const DEFAULT_WIDTH: u32 = 20;
pub const DEFAULT_HEIGHT: u32 = 15;

/// One grid tile's building-type tag. Serialized as the lowercase tag
/// used in the save file ("grass", "house", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Grass,
    House,
    Shop,
    Factory,
}

/// The placeable subset of [`Cell`]: what the player can select and drop
/// onto the grid. Grass is the absence of a building, not a placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Building {
    #[default]
    House,
    Shop,
    Factory,
}

impl From<Building> for Cell {
    fn from(building: Building) -> Self {
        match building {
            Building::House => Cell::House,
            Building::Shop => Cell::Shop,
            Building::Factory => Cell::Factory,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// The full city layout: a width x height rectangle of cells, row-major.
/// Dimensions are fixed at construction; cells are mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to grass.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self::filled(width, height))
    }

    fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Grass; (width * height) as usize],
        }
    }

    /// Rebuilds a grid from row-major cells. Callers guarantee the shape;
    /// used by persistence after it has validated the loaded rows.
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Cell, GridError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Sets the cell at (x, y). Never touches neighboring cells; setting
    /// the same value twice is a no-op.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Row slices in top-to-bottom order, each of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        // DEFAULT_WIDTH/DEFAULT_HEIGHT are nonzero, so no validation needed.
        Self::filled(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
