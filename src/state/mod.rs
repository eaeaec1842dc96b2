//! Application State Module
//!
//! All mutable editor state lives in one struct passed by reference through
//! the frame-update path. There are no ambient globals; the random source
//! used for paint jitter is owned here so tests can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::*;
use crate::ui::WidgetSet;

pub struct ApplicationState {
    /// The 16x16 drawing surface
    pub grid: ColorGrid,
    /// The 2x16 color picker
    pub palette: ColorGrid,
    /// Color applied by the next grid paint
    pub active_color: CellColor,
    /// Currently selected palette cell (col, row)
    pub palette_sel: (usize, usize),
    /// Grid cell under the pointer this frame, for the hover highlight
    pub hovered_cell: Option<(usize, usize)>,
    /// Whether grid lines are drawn over the canvas
    pub show_grid_lines: bool,
    /// Mirror every paint/erase across the vertical center column
    pub symmetry_mode: bool,
    /// Per-channel jitter bound, refreshed from the variance text box
    pub variance: i32,
    /// All buttons and text boxes
    pub widgets: WidgetSet,
    pub rng: StdRng,
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let grid = ColorGrid::new(GRID_WIDTH, GRID_HEIGHT);

        // Palette starts filled with random colors, like a fresh sketchbook.
        let mut palette = ColorGrid::new(PALETTE_WIDTH, PALETTE_HEIGHT);
        for col in 0..PALETTE_WIDTH {
            for row in 0..PALETTE_HEIGHT {
                let color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
                palette.set(col, row, CellColor::Solid(color));
            }
        }
        let active_color = palette.get(0, 0);

        ApplicationState {
            grid,
            palette,
            active_color,
            palette_sel: (0, 0),
            hovered_cell: None,
            show_grid_lines: false,
            symmetry_mode: false,
            variance: 0,
            widgets: WidgetSet::new(),
            rng,
        }
    }

    pub fn grid_region(&self) -> Region {
        grid_region(GRID_ORIGIN, CELL_SIZE, self.grid.width(), self.grid.height())
    }

    pub fn palette_region(&self) -> Region {
        grid_region(
            PALETTE_ORIGIN,
            CELL_SIZE,
            self.palette.width(),
            self.palette.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_selected_palette_color_active() {
        let state = ApplicationState::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(state.palette_sel, (0, 0));
        assert_eq!(state.active_color, state.palette.get(0, 0));
        assert!(!state.active_color.is_empty());
        assert!(!state.symmetry_mode);
        assert_eq!(state.variance, 0);
    }
}
