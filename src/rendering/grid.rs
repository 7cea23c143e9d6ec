use macroquad::prelude::*;

use crate::core::*;

/// Draws the thick outline over the window border and between cells.
/// Band geometry is fixed, so it is computed once.
pub struct GridRenderer {
    bands: Vec<Rect>,
}

impl GridRenderer {
    pub fn new() -> Self {
        GridRenderer {
            bands: outline_bands(),
        }
    }

    pub fn draw(&self) {
        let color = OUTLINE_COLOR.to_mq_color();
        for band in &self.bands {
            draw_rectangle(band.x, band.y, band.w, band.h, color);
        }
    }
}

/// Border bands on all four sides plus one band starting at each internal row/column boundary
fn outline_bands() -> Vec<Rect> {
    let t = OUTLINE_THICKNESS;
    let mut bands = vec![
        // top, bottom
        Rect::new(0.0, 0.0, WINDOW_WIDTH, t),
        Rect::new(0.0, WINDOW_HEIGHT - t, WINDOW_WIDTH, t),
        // left, right
        Rect::new(0.0, 0.0, t, WINDOW_HEIGHT),
        Rect::new(WINDOW_WIDTH - t, 0.0, t, WINDOW_HEIGHT),
    ];

    for row in 1..ROWS {
        bands.push(Rect::new(0.0, row as f32 * CELL_HEIGHT, WINDOW_WIDTH, t));
    }
    for col in 1..COLS {
        bands.push(Rect::new(col as f32 * CELL_WIDTH, 0.0, t, WINDOW_HEIGHT));
    }

    bands
}
