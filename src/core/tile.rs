use macroquad::prelude::*;

use super::color::Rgba;
use super::constants::{CELL_HEIGHT, CELL_WIDTH, OUTLINE_THICKNESS};
use super::grid::cell_origin;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub value: u32,
    pub row: usize,
    pub col: usize,
    pub color: Rgba,
}

impl Tile {
    pub fn new(value: u32, row: usize, col: usize, color: Rgba) -> Self {
        Tile { value, row, col, color }
    }

    /// The tile holding value 0 is the empty slot
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }

    pub fn origin(&self) -> Vec2 {
        cell_origin(self.row, self.col)
    }

    /// Hit test against the cell, ignoring the outline band on its top and left edges
    pub fn mouse_over(&self, pos: Vec2) -> bool {
        let origin = self.origin();
        pos.x >= origin.x + OUTLINE_THICKNESS
            && pos.x <= origin.x + CELL_WIDTH
            && pos.y >= origin.y + OUTLINE_THICKNESS
            && pos.y <= origin.y + CELL_HEIGHT
    }

    /// True when `other` sits directly left, right, above or below this tile
    pub fn is_adjacent_to(&self, other: &Tile) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}
