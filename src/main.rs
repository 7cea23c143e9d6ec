mod app;
mod config;
mod core;
mod input;
mod rendering;
mod state;

use macroquad::prelude::*;

use crate::core::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    app::run(config::Config::from_env()).await;
}
