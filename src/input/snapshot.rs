use macroquad::prelude::*;

/// Immutable record of everything the frame needs to know about the user.
/// Built once per frame; handlers read it instead of polling mid-update.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    pub mouse: Vec2,
    /// Left button currently down
    pub held: bool,
    /// Left button released this frame (the click edge)
    pub clicked: bool,
    /// Characters typed this frame, in order
    pub chars: Vec<char>,
    pub backspace: bool,
}

/// Turns the raw held flag into a one-frame click edge by diffing
/// consecutive frames, instead of mutating flags inside the event reader.
#[derive(Default)]
pub struct EdgeDetector {
    prev_held: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly on the frame the button goes from held to released.
    pub fn step(&mut self, held: bool) -> bool {
        let clicked = self.prev_held && !held;
        self.prev_held = held;
        clicked
    }

    /// Read macroquad's input state into a snapshot for this frame.
    pub fn poll(&mut self) -> InputSnapshot {
        let held = is_mouse_button_down(MouseButton::Left);
        let clicked = self.step(held);

        let mut chars = Vec::new();
        while let Some(c) = get_char_pressed() {
            chars.push(c);
        }

        InputSnapshot {
            mouse: Vec2::from(mouse_position()),
            held,
            clicked,
            chars,
            backspace: is_key_pressed(KeyCode::Backspace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_edge_fires_once_on_release() {
        let mut edges = EdgeDetector::new();
        // press, held, held, release
        assert!(!edges.step(true));
        assert!(!edges.step(true));
        assert!(!edges.step(true));
        assert!(edges.step(false));
        // staying released produces no further edges
        assert!(!edges.step(false));
    }

    #[test]
    fn tap_within_one_frame_still_edges() {
        let mut edges = EdgeDetector::new();
        assert!(!edges.step(true));
        assert!(edges.step(false));
    }
}
