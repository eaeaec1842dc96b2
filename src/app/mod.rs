use macroquad::prelude::*;

use crate::input::EdgeDetector;
use crate::rendering;
use crate::state::ApplicationState;

pub async fn run() {
    let mut state = ApplicationState::new();
    let mut edges = EdgeDetector::new();

    loop {
        let snapshot = edges.poll();
        crate::input::handle_input(&mut state, &snapshot);

        rendering::draw_frame(&state);

        next_frame().await
    }
}
