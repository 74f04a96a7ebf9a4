pub mod bit_grid;
pub mod bit_vector;
pub mod rect;

pub use bit_grid::BitGrid;
pub use bit_vector::{BitCursor, BitFormat, BitOrder, BitVector, Bits};
pub use rect::Rect;
