use crate::core::Region;
use super::button::{Button, ButtonKind};
use super::textbox::TextBox;

// Text box slots, in the order they live in the widget set.
pub const BOX_RED: usize = 0;
pub const BOX_GREEN: usize = 1;
pub const BOX_BLUE: usize = 2;
pub const BOX_VARIANCE: usize = 3;
pub const BOX_FILE_NAME: usize = 4;

/// Every button and text box on screen, at its fixed position. Button order
/// is the priority order for click dispatch.
pub struct WidgetSet {
    pub buttons: Vec<Button>,
    pub textboxes: Vec<TextBox>,
}

impl WidgetSet {
    pub fn new() -> Self {
        let buttons = vec![
            Button::new(
                ButtonKind::SetPaletteColor,
                "COLOR",
                Region::new(73.0, 440.0, 90.0, 30.0),
            ),
            Button::new(
                ButtonKind::ErasePaletteEntry,
                "ERASE",
                Region::new(862.0, 660.0, 90.0, 30.0),
            ),
            Button::new(
                ButtonKind::ToggleGridLines,
                "GRID OFF",
                Region::new(1.0, 1.0, 130.0, 30.0),
            ),
            Button::new(
                ButtonKind::ToggleSymmetry,
                "SYMMETRY OFF",
                Region::new(1.0, 35.0, 160.0, 22.0),
            ),
            Button::new(
                ButtonKind::ClearGrid,
                "CLEAR ALL",
                Region::new(830.0, 760.0, 140.0, 30.0),
            ),
            Button::new(
                ButtonKind::SaveGrid,
                "SAVE ASSET",
                Region::new(1.0, 660.0, 160.0, 30.0),
            ),
            Button::new(
                ButtonKind::SavePalette,
                "SAVE PALLET",
                Region::new(200.0, 660.0, 170.0, 30.0),
            ),
            Button::new(
                ButtonKind::LoadGrid,
                "LOAD ASSET",
                Region::new(1.0, 700.0, 160.0, 30.0),
            ),
            Button::new(
                ButtonKind::LoadPalette,
                "LOAD PALLET",
                Region::new(200.0, 700.0, 170.0, 30.0),
            ),
            Button::new(
                ButtonKind::FillBackground,
                "BACKGROUND",
                Region::new(1.0, 60.0, 140.0, 22.0),
            ),
            // Caption above the variance box, drawn in the button style.
            Button::new(
                ButtonKind::VarianceLabel,
                "VARIANCE",
                Region::new(72.0, 350.0, 110.0, 22.0),
            ),
        ];

        let mut textboxes = Vec::new();
        for i in 0..3 {
            textboxes.push(TextBox::new(
                Region::new(70.0, 481.0 + i as f32 * 60.0, 60.0, 26.0),
                3,
            ));
        }
        textboxes.push(TextBox::with_text(
            Region::new(70.0, 375.0, 60.0, 26.0),
            3,
            "0",
        ));
        textboxes.push(TextBox::new(Region::new(1.0, 740.0, 380.0, 26.0), 32));

        Self { buttons, textboxes }
    }

    /// Focus the box at `idx` and unfocus the rest; `None` clears all focus.
    pub fn focus(&mut self, idx: Option<usize>) {
        for (i, tb) in self.textboxes.iter_mut().enumerate() {
            tb.focused = Some(i) == idx;
        }
    }

    pub fn focused_mut(&mut self) -> Option<&mut TextBox> {
        self.textboxes.iter_mut().find(|tb| tb.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_box_focused() {
        let mut widgets = WidgetSet::new();
        widgets.focus(Some(BOX_VARIANCE));
        assert!(widgets.textboxes[BOX_VARIANCE].focused);
        widgets.focus(Some(BOX_RED));
        assert!(widgets.textboxes[BOX_RED].focused);
        assert_eq!(widgets.textboxes.iter().filter(|t| t.focused).count(), 1);
        widgets.focus(None);
        assert!(widgets.focused_mut().is_none());
    }

    #[test]
    fn variance_box_starts_at_zero() {
        let widgets = WidgetSet::new();
        assert_eq!(widgets.textboxes[BOX_VARIANCE].text, "0");
        assert_eq!(widgets.textboxes[BOX_FILE_NAME].text, "");
    }
}
