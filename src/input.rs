//! Pure routing from raw input events to commands. No state, no bounds
//! checks: coordinate validation belongs to the grid.

use crate::grid::Building;

/// What a recognized key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Building),
    Save,
    Load,
}

/// Converts an absolute pixel position to grid coordinates by floor
/// division. The result may lie outside any particular grid (including
/// negative cells for positions left of or above the origin).
pub fn pointer_to_cell(position: (i32, i32), cell_size: u32) -> (i32, i32) {
    let size = cell_size as i32;
    (position.0.div_euclid(size), position.1.div_euclid(size))
}

/// Fixed key table: 1/2/3 select a building type, s saves, l loads.
/// Any other key maps to no command.
pub fn command_for_key(key: char) -> Option<Command> {
    match key {
        '1' => Some(Command::Select(Building::House)),
        '2' => Some(Command::Select(Building::Shop)),
        '3' => Some(Command::Select(Building::Factory)),
        's' | 'S' => Some(Command::Save),
        'l' | 'L' => Some(Command::Load),
        _ => None,
    }
}
