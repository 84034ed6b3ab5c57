// lib.rs - Conway's Game of Life on a toroidal grid
//
// `Grid` holds the cells and applies the rules, `SimulationController`
// decides when the grid may be resized, seeded or stepped. Rendering is
// left to the caller, which reads cells through `is_alive`.

pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;

pub use controller::{
    DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE, Mode, SimulationConfig, SimulationController,
};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
