use super::tile::Tile;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the board that is either empty or contains a [`Tile`](crate::Tile)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(Option<Tile>);

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    /// Create new `Cell` from `Tile`
    pub fn from_tile(tile: Tile) -> Cell {
        Cell(Some(tile))
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        self.0
    }

    pub(crate) fn tile_mut(&mut self) -> Option<&mut Tile> {
        self.0.as_mut()
    }

    /// Remove the tile, leaving the cell empty.
    pub(crate) fn take(&mut self) -> Option<Tile> {
        self.0.take()
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// An empty cell shows as "."
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(tile) => write!(f, "{}", tile),
            None => write!(f, "."),
        }
    }
}
