pub mod config;
pub mod grid;
pub mod input;
pub mod persistence;
pub mod render;
pub mod session;

pub use config::Config;
pub use grid::{Building, Cell, Grid, GridError};
pub use input::Command;
pub use persistence::PersistenceError;
pub use session::Session;
