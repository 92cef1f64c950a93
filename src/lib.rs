//! A word game engine for Rust.
//! <br>
//! This crate implements the rules of a two-player Scrabble-like game on a 9x9 board:
//! placing tiles, checking the words they form against a dictionary, and scoring them
//! with premium squares that can be used only once.
//!
//! # How to use `wordgrid`
//! Start by loading a dictionary. The word list must be in utf-8, contain one word per
//! line and be sorted. Then start a [`GameSession`], place letters from the rack of the
//! current player on the board and submit the move.
//! A move that is rejected puts all tiles back on the rack, and the same player can try again.
//!
//! # Basic usage
//!  ```
//! # use std::convert::TryFrom;
//! use wordgrid::{Board, Dictionary, Letter, MoveOutcome, MoveValidator, Rejection, Tile};
//!
//! let dictionary = Dictionary::from_words(&["rest", "rust"])?;
//! let mut board = Board::default();
//! for (col, ch) in (2..).zip("RUST".chars()) {
//!     board.place(Tile::from_letter(Letter::try_from(ch)?)?, 4, col)?;
//! }
//! println!("{}", board);
//! let outcome = MoveValidator::new(&dictionary).validate(&mut board);
//! // double word at (4,2), no bonus on the center square
//! assert_eq!(outcome, MoveOutcome::Accepted { score: 4 * 2, words: vec!["RUST".into()] });
//!
//! board.place(Tile::wildcard('s')?, 5, 5)?;
//! let outcome = MoveValidator::new(&dictionary).validate(&mut board);
//! assert_eq!(outcome, MoveOutcome::Rejected(Rejection::InvalidWord("TS".into())));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is a balanced binary search tree, built once from the sorted word list.
//! The board holds a grid of cells with tiles and a grid of premium squares. Word runs are
//! extracted from the board after each move; only runs with a tile of the current move count.
//! Premium squares are consumed only when a move is accepted.
mod board;
mod dictionary;
mod error;
mod grid;
pub mod scoring;
mod session;
mod tilebag;
mod tiles;
pub mod tileset;
mod validator;

pub use board::{Board, Direction, WordRun};
pub use dictionary::{Dictionary, Words};
pub use error::Error;
pub use grid::{Grid, Position, Premium, Square, N};
pub use scoring::MoveScore;
pub use session::{GameResult, GameSession, Player};
pub use tilebag::TileBag;
pub use tiles::{Cell, Letter, Rack, Tile, RACK_SIZE};
pub use validator::{MoveOutcome, MoveState, MoveValidator, Rejection};
