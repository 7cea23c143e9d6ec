use macroquad::prelude::*;

use super::constants::{CELL_HEIGHT, CELL_WIDTH, COLS, ROWS};

/// Screen position of the top-left corner of a cell
pub fn cell_origin(row: usize, col: usize) -> Vec2 {
    Vec2::new(col as f32 * CELL_WIDTH, row as f32 * CELL_HEIGHT)
}

/// Cell containing a screen point, `None` when the point is off the board
pub fn cell_at(pos: Vec2) -> Option<(usize, usize)> {
    if pos.x < 0.0 || pos.y < 0.0 {
        return None;
    }
    let row = (pos.y / CELL_HEIGHT).floor() as usize;
    let col = (pos.x / CELL_WIDTH).floor() as usize;
    (row < ROWS && col < COLS).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_scales_by_cell_size() {
        assert_eq!(cell_origin(0, 0), Vec2::ZERO);
        assert_eq!(cell_origin(2, 1), Vec2::new(CELL_WIDTH, 2.0 * CELL_HEIGHT));
    }

    #[test]
    fn cell_at_maps_points_back() {
        assert_eq!(cell_at(Vec2::new(1.0, 1.0)), Some((0, 0)));
        assert_eq!(cell_at(cell_origin(3, 2) + Vec2::splat(5.0)), Some((3, 2)));
        assert_eq!(cell_at(Vec2::new(-1.0, 10.0)), None);
        assert_eq!(cell_at(Vec2::new(10.0, ROWS as f32 * CELL_HEIGHT)), None);
    }
}
