use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading the word list; the dictionary is unavailable
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// The word list is not strictly ascending
    #[error("Word list is not sorted at line {line}: \"{word}\"")]
    DictionaryNotSorted { line: usize, word: String },

    /// Error deserializing bincoded dictionary
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Dictionary {0} could not be (de)serialized")]
    DictionaryDeserializeError(String),

    /// Row or column outside the 9x9 board
    #[error("Position row={row}, col={col} is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Attempt to place a tile on a cell that already holds one
    #[error("Cell at row={row}, col={col} is already occupied")]
    OccupiedCell { row: usize, col: usize },

    /// The cell does not touch any tile on a non-empty board
    #[error("Tile at row={row}, col={col} does not connect to any tile")]
    IllegalPlacement { row: usize, col: usize },

    /// Character is not a valid letter
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 9)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 9 cells
    #[error("Invalid row \"{0}\": length {1}, expect 9")]
    InvalidRowLength(String, usize),

    /// The rack slot holds no letter
    #[error("Rack slot {0} is empty")]
    EmptySlot(usize),

    /// A blank tile must be given a letter before it is placed
    #[error("A blank tile needs a letter")]
    BlankNeedsLetter,

    /// Only tiles placed in the current move can be taken back
    #[error("No temporary tile at row={row}, col={col}")]
    NotRemovable { row: usize, col: usize },

    /// The game has ended
    #[error("The game is over")]
    GameOver,
}
