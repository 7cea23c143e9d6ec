use macroquad::prelude::Vec2;
use rand::Rng;

use super::color::random_tile_color;
use super::constants::{COLS, SHUFFLE_SWAPS, TILE_COUNT};
use super::tile::Tile;

/// A tile sliding into the empty slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub value: u32,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// The puzzle grid. `tiles[0]` is always the empty slot.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
}

/// Swap `SHUFFLE_SWAPS` random pairs of distinct indices in `start..end`
pub fn naive_shuffle<T, R: Rng + ?Sized>(values: &mut [T], start: usize, end: usize, rng: &mut R) {
    let end = end.min(values.len());
    if end <= start + 1 {
        return;
    }

    for _ in 0..SHUFFLE_SWAPS {
        let a = rng.gen_range(start..end);
        let mut b = rng.gen_range(start..end);
        while a == b {
            b = rng.gen_range(start..end);
        }
        values.swap(a, b);
    }
}

/// A click on `clicked` is valid when it sits next to the empty slot
pub fn valid_move(clicked: &Tile, empty: &Tile) -> bool {
    !clicked.is_empty() && clicked.is_adjacent_to(empty)
}

/// Exchange grid positions, leaving values and colors in place
pub fn swap_tiles(lhs: &mut Tile, rhs: &mut Tile) {
    std::mem::swap(&mut lhs.row, &mut rhs.row);
    std::mem::swap(&mut lhs.col, &mut rhs.col);
}

impl Board {
    /// Shuffled board with the empty slot in the top-left cell
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers: Vec<u32> = (0..TILE_COUNT as u32).collect();

        loop {
            naive_shuffle(&mut numbers, 1, TILE_COUNT, rng);
            if !is_ascending(&numbers) {
                break;
            }
        }

        let tiles = numbers
            .iter()
            .enumerate()
            .map(|(i, &value)| Tile::new(value, i / COLS, i % COLS, random_tile_color(rng)))
            .collect();

        Board { tiles }
    }

    /// Build a board from row-major values. `values[0]` must be 0.
    #[cfg(test)]
    pub fn from_values(values: &[u32]) -> Self {
        use super::color::Rgba;

        assert_eq!(values.len(), TILE_COUNT);
        let mut tiles: Vec<Tile> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Tile::new(value, i / COLS, i % COLS, Rgba::rgb(0, 0, 0)))
            .collect();
        let empty = tiles.iter().position(Tile::is_empty).expect("empty tile");
        tiles.swap(0, empty);
        Board { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[allow(dead_code)]
    pub fn empty(&self) -> &Tile {
        &self.tiles[0]
    }

    #[allow(dead_code)]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }

    /// Slide the tile under `pos` into the empty slot if it is adjacent
    pub fn click(&mut self, pos: Vec2) -> Option<Move> {
        let (empty, rest) = self.tiles.split_first_mut()?;

        let clicked = rest
            .iter_mut()
            .find(|tile| tile.mouse_over(pos) && valid_move(tile, empty))?;

        let from = (clicked.row, clicked.col);
        let to = (empty.row, empty.col);
        swap_tiles(clicked, empty);

        Some(Move { value: clicked.value, from, to })
    }

    /// Values read in row-major order, empty slot as 0
    pub fn values(&self) -> Vec<u32> {
        let mut grid = vec![0; TILE_COUNT];
        for tile in &self.tiles {
            grid[tile.row * COLS + tile.col] = tile.value;
        }
        grid
    }

    /// Solved when the board reads 0, 1, 2, ... in row-major order
    pub fn is_solved(&self) -> bool {
        is_ascending(&self.values())
    }
}

fn is_ascending(values: &[u32]) -> bool {
    values.iter().enumerate().all(|(i, &v)| v as usize == i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::ROWS;
    use crate::core::grid::cell_origin;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn center_of(row: usize, col: usize) -> Vec2 {
        cell_origin(row, col) + Vec2::new(75.0, 75.0)
    }

    fn solved_values() -> Vec<u32> {
        (0..TILE_COUNT as u32).collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut values = solved_values();
        naive_shuffle(&mut values, 1, TILE_COUNT, &mut rng);

        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, solved_values());
        assert_ne!(values, solved_values());
    }

    #[test]
    fn shuffle_leaves_indices_outside_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut values = solved_values();
        naive_shuffle(&mut values, 1, 8, &mut rng);

        assert_eq!(values[0], 0);
        assert_eq!(&values[8..], &solved_values()[8..]);
    }

    #[test]
    fn shuffle_ignores_tiny_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut values = vec![4, 5, 6];
        naive_shuffle(&mut values, 1, 2, &mut rng);
        naive_shuffle(&mut values, 2, 2, &mut rng);
        assert_eq!(values, vec![4, 5, 6]);
    }

    #[test]
    fn generated_board_covers_every_cell_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let board = Board::generate(&mut rng);

        assert_eq!(board.tiles().len(), TILE_COUNT);
        assert!(board.empty().is_empty());
        assert_eq!((board.empty().row, board.empty().col), (0, 0));

        let cells: HashSet<_> = board.tiles().iter().map(|t| (t.row, t.col)).collect();
        assert_eq!(cells.len(), TILE_COUNT);
        assert!(cells.iter().all(|&(r, c)| r < ROWS && c < COLS));

        let mut values = board.values();
        values.sort();
        assert_eq!(values, solved_values());
        assert!(!board.is_solved());
    }

    #[test]
    fn same_seed_same_board() {
        let a = Board::generate(&mut ChaCha8Rng::seed_from_u64(99));
        let b = Board::generate(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn valid_move_requires_orthogonal_neighbour() {
        let board = Board::from_values(&solved_values());
        let empty = board.empty();

        assert!(valid_move(board.tile_at(0, 1).unwrap(), empty));
        assert!(valid_move(board.tile_at(1, 0).unwrap(), empty));
        assert!(!valid_move(board.tile_at(1, 1).unwrap(), empty));
        assert!(!valid_move(board.tile_at(0, 2).unwrap(), empty));
        assert!(!valid_move(board.tile_at(3, 3).unwrap(), empty));
    }

    #[test]
    fn swap_only_exchanges_positions() {
        let mut board = Board::from_values(&solved_values());
        let before = board.tiles().to_vec();

        let (empty, rest) = board.tiles.split_first_mut().unwrap();
        swap_tiles(&mut rest[3], empty);

        let after = board.tiles();
        assert_eq!((after[0].row, after[0].col), (before[4].row, before[4].col));
        assert_eq!((after[4].row, after[4].col), (before[0].row, before[0].col));
        assert_eq!(after[0].value, before[0].value);
        assert_eq!(after[4].value, before[4].value);
        for i in [1, 2, 3, 5, 6, 15] {
            assert_eq!(after[i], before[i]);
        }
    }

    #[test]
    fn click_on_neighbour_slides_it() {
        let mut board = Board::from_values(&solved_values());

        let mv = board.click(center_of(0, 1)).expect("move");
        assert_eq!(mv, Move { value: 1, from: (0, 1), to: (0, 0) });
        assert_eq!(board.tile_at(0, 0).unwrap().value, 1);
        assert!(board.tile_at(0, 1).unwrap().is_empty());
        assert!(!board.is_solved());

        // Sliding back restores the solved order
        let mv = board.click(center_of(0, 0)).expect("move");
        assert_eq!(mv.value, 1);
        assert!(board.is_solved());
    }

    #[test]
    fn click_on_distant_tile_is_ignored() {
        let mut board = Board::from_values(&solved_values());
        let before = board.values();

        assert_eq!(board.click(center_of(2, 2)), None);
        assert_eq!(board.click(center_of(0, 0)), None);
        assert_eq!(board.click(Vec2::new(-5.0, -5.0)), None);
        // On the grid line along the top edge of (1, 0)
        assert_eq!(board.click(cell_origin(1, 0) + Vec2::new(75.0, 5.0)), None);
        assert_eq!(board.values(), before);
    }

    #[test]
    fn board_with_empty_elsewhere() {
        let mut values = solved_values();
        values.swap(0, 5);
        let mut board = Board::from_values(&values);

        assert_eq!((board.empty().row, board.empty().col), (1, 1));
        let mv = board.click(center_of(2, 1)).expect("move");
        assert_eq!(mv.to, (1, 1));
        assert_eq!(mv.value, 9);
    }
}
