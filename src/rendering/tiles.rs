use macroquad::prelude::*;

use crate::core::*;

/// Draws numbered tiles. Falls back to macroquad's built-in font when no
/// TTF font could be loaded.
pub struct TileRenderer {
    font: Option<Font>,
    font_size: u16,
}

impl TileRenderer {
    pub fn new(font: Option<Font>) -> Self {
        TileRenderer {
            font,
            font_size: label_font_size() as u16,
        }
    }

    /// Draw every tile except the empty slot
    pub fn draw(&self, board: &Board) {
        for tile in board.tiles().iter().filter(|t| !t.is_empty()) {
            self.draw_tile(tile);
        }
    }

    fn draw_tile(&self, tile: &Tile) {
        let origin = tile.origin();
        draw_rectangle(origin.x, origin.y, CELL_WIDTH, CELL_HEIGHT, tile.color.to_mq_color());

        let label = tile.label();
        let size = measure_text(&label, self.font.as_ref(), self.font_size, 1.0);

        // Center inside the part of the cell not covered by the outline
        let inner_x = origin.x + OUTLINE_THICKNESS / 2.0;
        let inner_y = origin.y + OUTLINE_THICKNESS / 2.0;
        let text_x = inner_x + (CELL_WIDTH - size.width) / 2.0;
        let text_y = inner_y + (CELL_HEIGHT + size.height) / 2.0;

        draw_text_ex(
            &label,
            text_x,
            text_y,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.font_size,
                color: BLACK,
                ..Default::default()
            },
        );
    }
}
