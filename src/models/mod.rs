use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod game;
pub mod plot;

/// Number of plots in the garden.
pub const GRID_SIZE: usize = 16;

/// Plots per row when the grid is drawn.
pub const GRID_COLS: usize = 4;

/// The garden: a fixed, index-addressed set of plots.
pub type Grid = [plot::Plot; GRID_SIZE];

/// A zero-based (row, col) position within the garden grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn of_index(index: usize) -> Self {
        Self {
            row: index / GRID_COLS,
            col: index % GRID_COLS,
        }
    }
}
