//! Basic types for working with tiles.
mod cell;
mod letter;
mod rack;
mod tile;

pub use cell::Cell;
pub use letter::Letter;
pub use rack::{Rack, RACK_SIZE};
pub use tile::Tile;
