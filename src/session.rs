use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::grid::{Building, Cell, Grid, GridError};
use crate::input::{self, Command};
use crate::persistence::{self, PersistenceError};

/// The live game state: the city grid, the currently selected building
/// type, and where saves go. Built once at program start and handed to
/// the event loop; there are no ambient globals.
pub struct Session {
    grid: Grid,
    selected: Building,
    save_path: PathBuf,
    cell_size: u32,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height)?,
            selected: Building::default(),
            save_path: config.save_path.clone(),
            cell_size: config.cell_size,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selected(&self) -> Building {
        self.selected
    }

    /// Places the selected building at the clicked cell. Clicks outside
    /// the grid are expected (the window is larger than the city), so an
    /// out-of-bounds placement is dropped rather than reported.
    pub fn handle_pointer_down(&mut self, position: (i32, i32)) {
        let (cx, cy) = input::pointer_to_cell(position, self.cell_size);
        let (Ok(x), Ok(y)) = (u32::try_from(cx), u32::try_from(cy)) else {
            debug!(cx, cy, "placement outside grid dropped");
            return;
        };
        match self.grid.set(x, y, Cell::from(self.selected)) {
            Ok(()) => debug!(x, y, building = ?self.selected, "placed building"),
            Err(_) => debug!(x, y, "placement outside grid dropped"),
        }
    }

    /// Applies a key press. Unbound keys are a no-op. Save and load
    /// failures propagate to the caller; a failed load leaves the current
    /// grid untouched.
    pub fn handle_key(&mut self, key: char) -> Result<(), PersistenceError> {
        match input::command_for_key(key) {
            Some(Command::Select(building)) => {
                self.selected = building;
                debug!(building = ?building, "selected building type");
            }
            Some(Command::Save) => {
                persistence::save(&self.grid, &self.save_path)?;
                info!(path = %self.save_path.display(), "city saved");
            }
            Some(Command::Load) => {
                self.grid = persistence::load(&self.save_path)?;
                info!(path = %self.save_path.display(), "city loaded");
            }
            None => {}
        }
        Ok(())
    }
}
