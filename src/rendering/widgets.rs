use macroquad::prelude::*;

use crate::ui::{Button, TextBox};

const WIDGET_FILL: Color = Color::new(0.20, 0.20, 0.20, 1.0);
const WIDGET_FILL_FOCUSED: Color = Color::new(0.27, 0.27, 0.27, 1.0);
const WIDGET_BORDER: Color = Color::new(0.47, 0.47, 0.47, 1.0);
const WIDGET_TEXT: Color = Color::new(0.87, 0.87, 0.87, 1.0);

pub fn draw_button(button: &Button) {
    let r = button.region;
    draw_rectangle(r.x, r.y, r.w, r.h, WIDGET_FILL);
    draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WIDGET_BORDER);

    let text_size = measure_text(&button.label, None, 20, 1.0);
    draw_text(
        &button.label,
        r.x + (r.w - text_size.width) / 2.0,
        r.y + (r.h + text_size.height) / 2.0,
        20.0,
        WIDGET_TEXT,
    );
}

pub fn draw_textbox(textbox: &TextBox) {
    let r = textbox.region;
    let fill = if textbox.focused { WIDGET_FILL_FOCUSED } else { WIDGET_FILL };
    draw_rectangle(r.x, r.y, r.w, r.h, fill);
    draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WIDGET_BORDER);

    let text_size = measure_text(&textbox.text, None, 20, 1.0);
    draw_text(
        &textbox.text,
        r.x + 4.0,
        r.y + (r.h + text_size.height) / 2.0,
        20.0,
        WIDGET_TEXT,
    );
}
