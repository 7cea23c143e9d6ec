//! Application State Module
//!
//! Holds the puzzle board together with the random generator used to
//! shuffle it, the number of moves made on the current board, and whether
//! the board has been solved.

use macroquad::prelude::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::*;

/// The main application state containing all global state
pub struct ApplicationState {
    /// Current puzzle board
    pub board: Board,
    /// Generator used for shuffles and tile colors
    pub rng: ChaCha8Rng,
    /// Moves made since the board was generated
    pub moves: u32,
    /// Set once the current board reaches the solved order
    pub solved: bool,
}

impl ApplicationState {
    /// Creates a new ApplicationState with a freshly shuffled board
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let board = Board::generate(&mut rng);

        ApplicationState {
            board,
            rng,
            moves: 0,
            solved: false,
        }
    }

    /// Slide the tile under the cursor, if any. Returns the move made.
    pub fn apply_click(&mut self, pos: Vec2) -> Option<Move> {
        if self.solved {
            return None;
        }

        let mv = self.board.click(pos)?;
        self.moves += 1;
        log::debug!(
            "moved {} from {:?} to {:?} (move {})",
            mv.value,
            mv.from,
            mv.to,
            self.moves
        );

        if self.board.is_solved() {
            self.solved = true;
            log::info!("puzzle solved in {} moves", self.moves);
        }

        Some(mv)
    }

    /// Discard the current board and deal a new one
    pub fn reshuffle(&mut self) {
        self.board = Board::generate(&mut self.rng);
        self.moves = 0;
        self.solved = false;
        log::info!("board reshuffled");
    }
}
