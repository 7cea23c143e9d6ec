use super::color::Rgba;

// Window
pub const WINDOW_TITLE: &str = "Sliding Tiles";
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

// Board
pub const SIDE: usize = 4;
pub const ROWS: usize = SIDE;
pub const COLS: usize = SIDE;
pub const TILE_COUNT: usize = ROWS * COLS;

pub const CELL_WIDTH: f32 = WINDOW_WIDTH / COLS as f32;
pub const CELL_HEIGHT: f32 = WINDOW_HEIGHT / ROWS as f32;

pub const OUTLINE_THICKNESS: f32 = 10.0;

pub const BACKGROUND_COLOR: Rgba = Rgba::rgb(205, 192, 180);
pub const OUTLINE_COLOR: Rgba = Rgba::rgb(187, 173, 160);

pub const FONT_PATH: &str = "./fonts/Comic Sans MS.ttf";

// Random transpositions applied when generating a board
pub const SHUFFLE_SWAPS: usize = 100;

/// Font size that fits the widest label into a cell
pub fn label_font_size() -> f32 {
    let digits = (TILE_COUNT as u32).to_string().len() as f32;
    (CELL_WIDTH / digits).min(CELL_HEIGHT / 2.0)
}
