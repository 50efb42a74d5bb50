// step.rs - What the Step control does to the grid

use crate::grid::Grid;

/// Behaviour behind the Step control. Implementations return the next grid,
/// or `None` to leave the current one unchanged. The grid itself is never
/// mutated; a new grid replaces the old one wholesale.
pub trait StepStrategy {
    fn name(&self) -> &str;
    fn step(&mut self, grid: &Grid) -> Option<Grid>;
}

/// Step control that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStep;

impl StepStrategy for NoopStep {
    fn name(&self) -> &str {
        "noop"
    }

    fn step(&mut self, grid: &Grid) -> Option<Grid> {
        log::debug!("noop step on {}x{} grid", grid.width(), grid.height());
        None
    }
}
