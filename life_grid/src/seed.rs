// seed.rs - Cell factories used to seed a grid
//
// Each factory is a function of (col, row) returning a CellState.

use rand::Rng;

use crate::cell::CellState;
use crate::grid::{Grid, GridError};

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],   // (col, row) offsets of live cells
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(col, _)| col + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, row)| row + 1).max().unwrap_or(0)
    }

    fn contains(&self, col: usize, row: usize) -> bool {
        self.cells.contains(&(col, row))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn all_dead() -> impl Fn(usize, usize) -> CellState {
    CellState::dead
}

pub fn all_alive() -> impl Fn(usize, usize) -> CellState {
    CellState::alive
}

pub fn checkerboard() -> impl Fn(usize, usize) -> CellState {
    |col, row| CellState::new(col, row, (col + row) % 2 == 0)
}

/// Each cell is alive with probability `density` (clamped to `0.0..=1.0`),
/// drawn from `rng`. Pass a seeded rng for a reproducible grid.
pub fn random<R: Rng>(mut rng: R, density: f64) -> impl FnMut(usize, usize) -> CellState {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    move |col, row| CellState::new(col, row, rng.gen_bool(density))
}

/// Live cells are the pattern's cells shifted by `(origin_col, origin_row)`.
pub fn pattern(
    pattern: &'static Pattern,
    origin_col: usize,
    origin_row: usize,
) -> impl Fn(usize, usize) -> CellState {
    move |col, row| {
        let alive = col >= origin_col
            && row >= origin_row
            && pattern.contains(col - origin_col, row - origin_row);
        CellState::new(col, row, alive)
    }
}

/// Which factory seeds the initial grid.
#[derive(Debug)]
pub enum Seeding {
    Dead,
    Alive,
    Random { density: f64 },
    Checkerboard,
    Pattern(&'static Pattern),   // centered in the grid
}

impl Seeding {
    pub fn name(&self) -> &'static str {
        match self {
            Seeding::Dead          => "dead",
            Seeding::Alive         => "alive",
            Seeding::Random { .. } => "random",
            Seeding::Checkerboard  => "checkerboard",
            Seeding::Pattern(p)    => p.name,
        }
    }

    /// Builds a `width` x `height` grid seeded by this factory. `rng` is only
    /// drawn from by [`Seeding::Random`].
    pub fn build<R: Rng>(&self, width: usize, height: usize, rng: &mut R) -> Result<Grid, GridError> {
        log::info!("seeding {}x{} grid: {}", width, height, self.name());
        match self {
            Seeding::Dead                => Grid::build(width, height, all_dead()),
            Seeding::Alive               => Grid::build(width, height, all_alive()),
            Seeding::Random { density }  => Grid::build(width, height, random(rng, *density)),
            Seeding::Checkerboard        => Grid::build(width, height, checkerboard()),
            Seeding::Pattern(p) => {
                let origin_col = width.saturating_sub(p.width()) / 2;
                let origin_row = height.saturating_sub(p.height()) / 2;
                Grid::build(width, height, pattern(*p, origin_col, origin_row))
            }
        }
    }
}
