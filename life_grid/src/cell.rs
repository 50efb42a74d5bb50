// cell.rs - State of a single grid position

/// Alive/dead status of one grid position together with its coordinates.
///
/// `x` is the column index and `y` the row index. Values are created once by a
/// cell factory and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellState {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

impl CellState {
    pub const fn new(x: usize, y: usize, alive: bool) -> Self {
        Self { x, y, alive }
    }

    pub const fn dead(x: usize, y: usize) -> Self {
        Self::new(x, y, false)
    }

    pub const fn alive(x: usize, y: usize) -> Self {
        Self::new(x, y, true)
    }

    /// The 0|1 form of `alive`.
    pub const fn alive_bit(&self) -> u8 {
        self.alive as u8
    }
}
