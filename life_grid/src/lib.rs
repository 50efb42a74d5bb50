// lib.rs - Grid construction and render mapping for the life grid display

pub mod cell;     // CellState record
pub mod grid;     // Grid builder
pub mod render;   // Grid renderer and cell visual mapping
pub mod seed;     // Cell factories and built-in patterns
pub mod step;     // Step control extension point

pub use cell::CellState;
pub use grid::{Grid, GridError};
pub use render::{cell_visual, render, CellClass, CellVisual, CELL_PX};
pub use seed::{find_pattern, Pattern, Seeding, PATTERNS};
pub use step::{NoopStep, StepStrategy};
