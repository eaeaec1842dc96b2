mod app;
mod core;
mod input;
mod persistence;
mod rendering;
mod state;
mod ui;

use macroquad::prelude::Conf;

fn window_conf() -> Conf {
    Conf {
        window_title: "gridpaint".to_owned(),
        window_width: crate::core::SCREEN_WIDTH,
        window_height: crate::core::SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    app::run().await;
}
