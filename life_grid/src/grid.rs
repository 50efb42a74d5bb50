// grid.rs - Grid builder
//
// Every factory in this crate takes (col, row), column first.

use std::convert::Infallible;
use std::error::Error;

use crate::cell::CellState;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell factory failed at column {col}, row {row}: {source}")]
    Factory {
        col: usize,
        row: usize,
        source: BoxError,
    },
}

/// Rows of cells, indexed `[row][col]`. All rows have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T = CellState> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl<T> Grid<T> {
    /// Builds a `height` x `width` grid where the cell at `[row][col]` is
    /// `factory(col, row)`. The factory is called in row-major order.
    pub fn build<F>(width: usize, height: usize, mut factory: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::try_build(width, height, |col, row| Ok::<T, Infallible>(factory(col, row)))
    }

    /// Like [`Grid::build`], but stops at the first factory error and returns it.
    pub fn try_build<F, E>(width: usize, height: usize, mut factory: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> Result<T, E>,
        E: Into<BoxError>,
    {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let cell = factory(col, row).map_err(|e| GridError::Factory {
                    col,
                    row,
                    source: e.into(),
                })?;
                cells.push(cell);
            }
            rows.push(cells);
        }

        log::debug!("built {}x{} grid", width, height);
        Ok(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flatten()
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Applies `f` to every cell, keeping row and column order.
    pub fn map<V, F>(&self, mut f: F) -> Grid<V>
    where
        F: FnMut(&T) -> V,
    {
        let rows: Vec<Vec<V>> = self
            .rows
            .iter()
            .map(|cells| cells.iter().map(&mut f).collect())
            .collect();
        Grid { rows, width: self.width }
    }
}

impl Grid<CellState> {
    pub fn live_cells(&self) -> usize {
        self.iter().filter(|cell| cell.alive).count()
    }
}
