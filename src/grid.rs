use crate::Error;
use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// The dimension of the board: N x N squares
pub const N: usize = 9;
const CENTER: usize = N / 2;

lazy_static! {
    static ref LAYOUT: [[Premium; N]; N] = {
        let mut layout = [[Premium::None; N]; N];
        for (row, squares) in layout.iter_mut().enumerate() {
            for (col, square) in squares.iter_mut().enumerate() {
                *square = Premium::at(row, col);
            }
        }
        layout
    };
}

/// A (row, col) coordinate on the board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Return the position if it is on the board.
    /// ## Errors
    /// [`OutOfBounds`](Error::OutOfBounds) if `row` or `col` is not in 0..9.
    pub fn checked(row: usize, col: usize) -> Result<Position, Error> {
        if row < N && col < N {
            Ok(Position { row, col })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    /// The orthogonal neighbours that are on the board.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        let up = row.checked_sub(1).map(|r| Position::new(r, col));
        let down = Some(row + 1)
            .filter(|&r| r < N)
            .map(|r| Position::new(r, col));
        let left = col.checked_sub(1).map(|c| Position::new(row, c));
        let right = Some(col + 1)
            .filter(|&c| c < N)
            .map(|c| Position::new(row, c));
        up.into_iter().chain(down).chain(left).chain(right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Kind of premium square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Premium {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The center square. It gives no bonus.
    Center,
}

impl Default for Premium {
    fn default() -> Self {
        Premium::None
    }
}

impl Premium {
    /// The premium of the square at `row`, `col`. Later rules override earlier ones.
    fn at(row: usize, col: usize) -> Premium {
        let last = N - 1;
        let mut premium = Premium::None;
        if row == col || row == last - col {
            premium = Premium::DoubleLetter;
        }
        if ((row == 2 || row == 6) && col == CENTER) || ((col == 2 || col == 6) && row == CENTER)
        {
            premium = Premium::DoubleWord;
        }
        if (row == 1 || row == last - 1) && (col == 1 || col == last - 1) {
            premium = Premium::TripleLetter;
        }
        if [0, CENTER, last].contains(&row) && [0, CENTER, last].contains(&col) {
            premium = Premium::TripleWord;
        }
        if row == CENTER && col == CENTER {
            premium = Premium::Center;
        }
        premium
    }

    /// Extra multiples of the letter value: 1 for double letter, 2 for triple letter.
    pub fn letter_bonus(self) -> u32 {
        match self {
            Premium::DoubleLetter => 1,
            Premium::TripleLetter => 2,
            _ => 0,
        }
    }

    /// Word multiplier: 2 for double word, 3 for triple word, else 1.
    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Premium::None => "--",
            Premium::DoubleLetter => "2l",
            Premium::TripleLetter => "3l",
            Premium::DoubleWord => "2w",
            Premium::TripleWord => "3w",
            Premium::Center => "ss",
        };
        write!(f, "{}", s)
    }
}

/// A board square: its premium kind, and whether the premium has been used.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    premium: Premium,
    consumed: bool,
}

impl Square {
    /// The premium kind of the square, consumed or not.
    pub fn premium(&self) -> Premium {
        self.premium
    }

    /// Check if the premium has already been applied.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// The premium still available on this square.
    pub fn bonus(&self) -> Premium {
        if self.consumed {
            Premium::None
        } else {
            self.premium
        }
    }

    pub(crate) fn consume(&mut self) {
        self.consumed = true;
    }
}

/// A consumed premium shows as "--"
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bonus())
    }
}

type Inner = [[Square; N]; N];

/// Board grid, consisting of 9x9 (normal or premium) squares.
///
/// The layout is fixed:
/// - double letter on both diagonals,
/// - double word at (2,4), (6,4), (4,2), (4,6),
/// - triple letter at (1,1), (1,7), (7,1), (7,7),
/// - triple word where row and col are both one of 0, 4, 8,
/// - the center square at (4,4).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Default for Grid {
    /// Create the grid with no premium consumed
    /// ## Example
    /// ```
    /// # use wordgrid::{Grid, Premium};
    /// let grid = Grid::default();
    /// assert_eq!(grid[4][6].premium(), Premium::DoubleWord);
    /// ```
    fn default() -> Grid {
        let mut grid = [[Square::default(); N]; N];
        for (row, squares) in grid.iter_mut().enumerate() {
            for (col, square) in squares.iter_mut().enumerate() {
                square.premium = LAYOUT[row][col];
            }
        }
        Grid(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Get the squares as a vec of 9 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Square::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }
}
