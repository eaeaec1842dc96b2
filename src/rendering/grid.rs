use macroquad::prelude::*;

use crate::core::{CellColor, ColorGrid, CELL_SIZE};

/// Draw every solid cell of a matrix at `origin`; empty cells let the
/// backdrop show through.
pub fn draw_color_grid(origin: (f32, f32), cell_size: f32, grid: &ColorGrid) {
    for col in 0..grid.width() {
        for row in 0..grid.height() {
            if let CellColor::Solid(rgb) = grid.get(col, row) {
                draw_rectangle(
                    origin.0 + col as f32 * cell_size,
                    origin.1 + row as f32 * cell_size,
                    cell_size,
                    cell_size,
                    rgb.to_mq_color(),
                );
            }
        }
    }
}

pub fn draw_grid_lines(origin: (f32, f32), cell_size: f32, width: usize, height: usize) {
    let line_color = Color::from_rgba(0x22, 0x22, 0x22, 255);
    let w = cell_size * width as f32;
    let h = cell_size * height as f32;

    for col in 0..=width {
        let x = origin.0 + col as f32 * cell_size;
        draw_line(x, origin.1, x, origin.1 + h, 1.0, line_color);
    }
    for row in 0..=height {
        let y = origin.1 + row as f32 * cell_size;
        draw_line(origin.0, y, origin.0 + w, y, 1.0, line_color);
    }
}

/// Vertical guide down the mirror axis while symmetry painting is on.
pub fn draw_symmetry_guide(origin: (f32, f32), cell_size: f32, width: usize, height: usize) {
    let x = origin.0 + cell_size * width as f32 / 2.0;
    let h = cell_size * height as f32;
    draw_line(x, origin.1, x, origin.1 + h, 2.0, Color::from_rgba(238, 238, 238, 160));
}

/// Square outline of the given thickness, drawn inward from the cell edge.
pub fn draw_square_outline(x: f32, y: f32, size: f32, thickness: f32, color: Color) {
    draw_rectangle_lines(x, y, size, size, thickness * 2.0, color);
}

/// Thick light frame with a thin dark inner line, marking the selected
/// palette cell.
pub fn draw_selection_marker(origin: (f32, f32), sel: (usize, usize)) {
    let x = origin.0 + sel.0 as f32 * CELL_SIZE;
    let y = origin.1 + sel.1 as f32 * CELL_SIZE;
    draw_square_outline(x, y, CELL_SIZE, 3.0, Color::from_rgba(0xEE, 0xEE, 0xEE, 255));
    draw_square_outline(x, y, CELL_SIZE, 1.0, Color::from_rgba(0x22, 0x22, 0x22, 255));
}

/// Highlight box around the grid cell under the pointer.
pub fn draw_hover_highlight(origin: (f32, f32), cell: (usize, usize)) {
    let x = origin.0 + cell.0 as f32 * CELL_SIZE;
    let y = origin.1 + cell.1 as f32 * CELL_SIZE;
    draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 2.0, Color::from_rgba(0, 0, 0, 150));
}
