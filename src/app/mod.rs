// src/app/mod.rs
use anyhow::Context;
use macroquad::prelude::*;

use crate::config::Config;
use crate::core::BACKGROUND_COLOR;
use crate::input::handle_input;
use crate::rendering::{GridRenderer, TileRenderer};
use crate::state::ApplicationState;

async fn load_font(path: &str) -> anyhow::Result<Font> {
    load_ttf_font(path)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))
        .with_context(|| format!("loading font {}", path))
}

pub async fn run(config: Config) {
    let font = match load_font(&config.font_path).await {
        Ok(font) => Some(font),
        Err(e) => {
            log::error!("{:#}, using the built-in font", e);
            None
        }
    };

    let mut state = ApplicationState::new(config.seed);
    let tile_renderer = TileRenderer::new(font);
    let grid_renderer = GridRenderer::new();

    log::info!(
        "new board{}",
        config.seed.map(|s| format!(" (seed {})", s)).unwrap_or_default()
    );

    loop {
        handle_input(&mut state);

        clear_background(BACKGROUND_COLOR.to_mq_color());
        tile_renderer.draw(&state.board);
        grid_renderer.draw();

        next_frame().await
    }
}
