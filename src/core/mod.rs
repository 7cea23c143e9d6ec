pub mod constants;
pub mod color;
pub mod grid;
pub mod tile;
pub mod board;

pub use constants::*;
pub use color::*;
pub use tile::*;
pub use board::*;
