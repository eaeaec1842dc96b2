pub mod grid;
pub mod widgets;

use macroquad::prelude::*;

use crate::core::*;
use crate::state::ApplicationState;

pub fn draw_frame(state: &ApplicationState) {
    clear_background(Color::from_rgba(0x44, 0x44, 0x44, 255));

    grid::draw_color_grid(PALETTE_ORIGIN, CELL_SIZE, &state.palette);
    grid::draw_color_grid(GRID_ORIGIN, CELL_SIZE, &state.grid);

    if state.show_grid_lines {
        grid::draw_grid_lines(GRID_ORIGIN, CELL_SIZE, state.grid.width(), state.grid.height());
    }
    if state.symmetry_mode {
        grid::draw_symmetry_guide(GRID_ORIGIN, CELL_SIZE, state.grid.width(), state.grid.height());
    }
    if let Some(cell) = state.hovered_cell {
        grid::draw_hover_highlight(GRID_ORIGIN, cell);
    }

    grid::draw_selection_marker(PALETTE_ORIGIN, state.palette_sel);

    for button in &state.widgets.buttons {
        widgets::draw_button(button);
    }
    for textbox in &state.widgets.textboxes {
        widgets::draw_textbox(textbox);
    }
}
