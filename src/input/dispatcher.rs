//! Per-frame interaction: one snapshot in, state mutations out. Buttons get
//! first claim on the click edge, then text-box focus, then painting while
//! the pointer is held.

use anyhow::Context;
use macroquad::logging::error;
use macroquad::prelude::Vec2;

use crate::core::*;
use crate::persistence::{load_matrix_into, save_matrix, save_path};
use crate::state::ApplicationState;
use crate::ui::{layout, ButtonKind};

use super::snapshot::InputSnapshot;

pub fn handle_input(state: &mut ApplicationState, snap: &InputSnapshot) {
    let mut click = snap.clicked;

    if click && fire_button_under_pointer(state, snap.mouse) {
        click = false;
    }
    if click {
        update_focus(state, snap.mouse);
    }

    apply_text_input(state, snap);

    if snap.held {
        handle_painting(state, snap.mouse);
    }

    refresh_variance(state);

    state.hovered_cell = if state.grid_region().contains(snap.mouse) {
        Some(cell_under_pointer(GRID_ORIGIN, CELL_SIZE, snap.mouse))
    } else {
        None
    };
}

/// Test buttons in priority order; the first hit fires and consumes the
/// click edge. Returns whether anything fired.
fn fire_button_under_pointer(state: &mut ApplicationState, mouse: Vec2) -> bool {
    let hit = state.widgets.buttons.iter().position(|b| {
        b.kind != ButtonKind::VarianceLabel && b.region.contains(mouse)
    });
    let Some(idx) = hit else {
        return false;
    };

    let kind = state.widgets.buttons[idx].kind;
    if let Err(err) = apply_button_action(state, idx, kind) {
        error!("{err:#}");
    }
    true
}

fn apply_button_action(
    state: &mut ApplicationState,
    button_idx: usize,
    kind: ButtonKind,
) -> anyhow::Result<()> {
    match kind {
        ButtonKind::SetPaletteColor => {
            if let Some(rgb) = parse_channel_boxes(state) {
                let (col, row) = state.palette_sel;
                state.palette.set(col, row, CellColor::Solid(rgb));
                state.active_color = CellColor::Solid(rgb);
            }
        }
        ButtonKind::ErasePaletteEntry => {
            let (col, row) = state.palette_sel;
            state.palette.set(col, row, CellColor::Empty);
            state.active_color = CellColor::Empty;
        }
        ButtonKind::ToggleGridLines => {
            state.show_grid_lines = !state.show_grid_lines;
            state.widgets.buttons[button_idx].label =
                if state.show_grid_lines { "GRID ON" } else { "GRID OFF" }.to_string();
        }
        ButtonKind::ToggleSymmetry => {
            state.symmetry_mode = !state.symmetry_mode;
            state.widgets.buttons[button_idx].label =
                if state.symmetry_mode { "SYMMETRY ON" } else { "SYMMETRY OFF" }.to_string();
        }
        ButtonKind::ClearGrid => {
            state.grid.fill(CellColor::Empty);
        }
        ButtonKind::SaveGrid => {
            let path = save_path(&state.widgets.textboxes[layout::BOX_FILE_NAME].text);
            save_matrix(&path, &state.grid)
                .with_context(|| format!("saving grid to {}", path.display()))?;
        }
        ButtonKind::SavePalette => {
            let path = save_path(&state.widgets.textboxes[layout::BOX_FILE_NAME].text);
            save_matrix(&path, &state.palette)
                .with_context(|| format!("saving palette to {}", path.display()))?;
        }
        ButtonKind::LoadGrid => {
            let path = save_path(&state.widgets.textboxes[layout::BOX_FILE_NAME].text);
            load_matrix_into(&path, &mut state.grid)
                .with_context(|| format!("loading grid from {}", path.display()))?;
        }
        ButtonKind::LoadPalette => {
            let path = save_path(&state.widgets.textboxes[layout::BOX_FILE_NAME].text);
            load_matrix_into(&path, &mut state.palette)
                .with_context(|| format!("loading palette from {}", path.display()))?;
        }
        ButtonKind::FillBackground => match state.active_color {
            CellColor::Empty => state.grid.fill(CellColor::Empty),
            CellColor::Solid(base) => {
                // Each cell gets its own jitter draw for a speckled backdrop.
                for n in 0..state.grid.len() {
                    let shade = jitter(&mut state.rng, base, state.variance);
                    state.grid.set_linear(n, CellColor::Solid(shade));
                }
            }
        },
        ButtonKind::VarianceLabel => {}
    }
    Ok(())
}

/// All three channel boxes must hold integers; otherwise the press is a
/// no-op. Values clamp to the channel range.
fn parse_channel_boxes(state: &ApplicationState) -> Option<Rgb> {
    let channel = |idx: usize| -> Option<u8> {
        let value: i64 = state.widgets.textboxes[idx].text.trim().parse().ok()?;
        Some(value.clamp(0, 255) as u8)
    };
    Some(Rgb::new(
        channel(layout::BOX_RED)?,
        channel(layout::BOX_GREEN)?,
        channel(layout::BOX_BLUE)?,
    ))
}

fn update_focus(state: &mut ApplicationState, mouse: Vec2) {
    let hit = state
        .widgets
        .textboxes
        .iter()
        .position(|tb| tb.region.contains(mouse));
    state.widgets.focus(hit);
}

fn apply_text_input(state: &mut ApplicationState, snap: &InputSnapshot) {
    if let Some(tb) = state.widgets.focused_mut() {
        if snap.backspace {
            tb.pop_char();
        }
        for &c in &snap.chars {
            tb.push_char(c);
        }
    }
}

fn handle_painting(state: &mut ApplicationState, mouse: Vec2) {
    if state.grid_region().contains(mouse) {
        let (col, row) = cell_under_pointer(GRID_ORIGIN, CELL_SIZE, mouse);
        paint_cell(state, col, row);
    } else if state.palette_region().contains(mouse) {
        let (col, row) = cell_under_pointer(PALETTE_ORIGIN, CELL_SIZE, mouse);
        state.palette_sel = (col, row);
        // Palette picks copy the stored value, never jittered.
        state.active_color = state.palette.get(col, row);
    }
}

fn paint_cell(state: &mut ApplicationState, col: usize, row: usize) {
    let mirror = state.grid.mirrored_col(col);
    match state.active_color {
        CellColor::Empty => {
            state.grid.set(col, row, CellColor::Empty);
            if state.symmetry_mode {
                state.grid.set(mirror, row, CellColor::Empty);
            }
        }
        CellColor::Solid(base) => {
            let shade = jitter(&mut state.rng, base, state.variance);
            state.grid.set(col, row, CellColor::Solid(shade));
            if state.symmetry_mode {
                // The mirror side draws its own jitter, like the original
                // symmetric brush: both halves share the base color but may
                // differ within the variance.
                let mirrored_shade = jitter(&mut state.rng, base, state.variance);
                state.grid.set(mirror, row, CellColor::Solid(mirrored_shade));
            }
        }
    }
}

fn refresh_variance(state: &mut ApplicationState) {
    let text = &state.widgets.textboxes[layout::BOX_VARIANCE].text;
    if let Ok(value) = text.trim().parse::<i32>() {
        if value >= 0 {
            state.variance = value;
        }
    }
}
