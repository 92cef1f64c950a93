use super::{Cell, Letter};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A tile on the board, either a regular letter or a wildcard (blank used as letter).
///
/// A tile is `temporary` while it belongs to the move being built. It can be taken back
/// until the move is accepted, after which it is final.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    letter: Letter,
    wildcard: bool,
    temporary: bool,
}

impl Tile {
    /// Create a temporary `Tile` from a rack `Letter`.
    /// ## Errors
    /// [`BlankNeedsLetter`](Error::BlankNeedsLetter) if `letter` is blank; use
    /// [`Tile::wildcard`] instead.
    pub fn from_letter(letter: Letter) -> Result<Tile, Error> {
        if letter.is_blank() {
            return Err(Error::BlankNeedsLetter);
        }
        Ok(Tile {
            letter,
            wildcard: false,
            temporary: true,
        })
    }

    /// Return a temporary wildcard tile for letter `ch`.
    /// ## Example
    /// ```
    /// use wordgrid::Tile;
    /// let tile = Tile::wildcard('e').unwrap();
    /// assert_eq!(tile.to_char(), 'E');
    /// assert_eq!(tile.points(), 0);
    /// ```
    pub fn wildcard(ch: char) -> Result<Tile, Error> {
        let letter = Letter::try_from(ch)?;
        if letter.is_blank() {
            return Err(Error::BlankNeedsLetter);
        }
        Ok(Tile {
            letter,
            wildcard: true,
            temporary: true,
        })
    }

    /// Create `Cell` from tile
    pub fn into_cell(self) -> Cell {
        Cell::from_tile(self)
    }

    /// The letter shown on the tile.
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// The letter shown on the tile as upper case char.
    pub fn to_char(&self) -> char {
        self.letter.to_char()
    }

    /// Check if the tile is a wildcard
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Check if the tile belongs to the current move
    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    /// Lock the tile on the board.
    pub fn set_final(&mut self) {
        self.temporary = false;
    }

    /// Point value; a wildcard is worth 0 points.
    pub fn points(&self) -> u32 {
        if self.wildcard {
            0
        } else {
            self.letter.points()
        }
    }

    /// The letter that goes back to the rack. A wildcard loses its letter.
    pub fn to_rack_letter(self) -> Letter {
        if self.wildcard {
            Letter::BLANK
        } else {
            self.letter
        }
    }
}

/// Wildcards show in lower case
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.wildcard {
            write!(f, "{}", self.to_char().to_ascii_lowercase())
        } else {
            write!(f, "{}", self.to_char())
        }
    }
}
