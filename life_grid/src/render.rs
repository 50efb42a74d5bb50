// render.rs - Maps grid cells to visual elements

use crate::cell::CellState;
use crate::grid::Grid;

/// Edge length of one cell rectangle in pixels.
pub const CELL_PX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Alive,
    Dead,
}

impl CellClass {
    pub fn css(self) -> &'static str {
        match self {
            CellClass::Alive => "cell alive",
            CellClass::Dead  => "cell dead",
        }
    }
}

/// A styled rectangle, positioned in pixels relative to the mount origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellVisual {
    pub left: usize,
    pub top: usize,
    pub size: usize,
    pub class: CellClass,
}

pub fn cell_visual(state: &CellState) -> CellVisual {
    CellVisual {
        left: state.x * CELL_PX,
        top: state.y * CELL_PX,
        size: CELL_PX,
        class: if state.alive { CellClass::Alive } else { CellClass::Dead },
    }
}

/// Applies `cell_renderer` to every cell of `grid`, preserving row and column order.
pub fn render<T, V, F>(cell_renderer: F, grid: &Grid<T>) -> Grid<V>
where
    F: FnMut(&T) -> V,
{
    grid.map(cell_renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visual_is_offset_by_ten_pixels_per_cell() {
        let visual = cell_visual(&CellState::alive(3, 7));
        assert_eq!(
            visual,
            CellVisual { left: 30, top: 70, size: 10, class: CellClass::Alive }
        );
        assert_eq!(visual.class.css(), "cell alive");
    }

    #[test]
    fn dead_cell_gets_dead_class() {
        let visual = cell_visual(&CellState::dead(0, 0));
        assert_eq!((visual.left, visual.top), (0, 0));
        assert_eq!(visual.class.css(), "cell dead");
    }

    #[test]
    fn render_preserves_order() {
        let grid = Grid::build(3, 2, CellState::dead).unwrap();
        let visuals = render(cell_visual, &grid);
        for (row, cells) in visuals.rows().iter().enumerate() {
            for (col, visual) in cells.iter().enumerate() {
                assert_eq!((visual.left, visual.top), (col * CELL_PX, row * CELL_PX));
            }
        }
    }
}
