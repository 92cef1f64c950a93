use crate::error::Error;
use crate::tileset::{self, BLANK_LABEL};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A letter on a rack, that can be played as [`Tile`](crate::Tile) on the board.
///
/// Either a regular letter `A`..`Z` or a `blank` ("*") that can be used as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Default for Letter {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Letter {
    /// The blank letter
    pub const BLANK: Letter = Letter(BLANK_LABEL as u8);

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }

    /// The letter as (upper case) char, or `*` for a blank.
    pub fn to_char(self) -> char {
        self.0 as char
    }

    /// Points for this letter. A blank is worth 0 points.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use wordgrid::{Error, Letter};
    /// assert_eq!(Letter::try_from('z')?.points(), 10);
    /// assert_eq!(Letter::BLANK.points(), 0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn points(&self) -> u32 {
        tileset::points(self.to_char())
    }
}

/// Letters are case insensitive; `*` is the blank.
impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'A'..='Z' | BLANK_LABEL => Ok(Letter(ch as u8)),
            'a'..='z' => Ok(Letter(ch.to_ascii_uppercase() as u8)),
            _ => Err(Error::InvalidLetter(ch)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
