pub mod grid;
pub mod tiles;

pub use grid::GridRenderer;
pub use tiles::TileRenderer;
