use crate::board::{Board, WordRun};
use crate::dictionary::Dictionary;
use crate::grid::{Position, N};
use crate::scoring;
use crate::Tile;
use log::debug;
use thiserror::Error;

/// Progress of a submitted move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveState {
    Idle,
    TilesPlaced,
    Validating,
    Accepted,
    Rejected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Reasons to reject a move. The board is left as it was; the caller takes the tiles back.
pub enum Rejection {
    /// No tiles were placed in this move
    #[error("Add some tiles!")]
    NoTilesPlaced,

    /// A placed tile is not connected to the tiles already on the board
    #[error("The tile at row={row}, col={col} does not connect to the other tiles")]
    IllegalPlacement { row: usize, col: usize },

    /// The placed tiles do not form a word of two or more letters
    #[error("No word was formed")]
    NoWordFormed,

    /// A formed word is not in the dictionary
    #[error("{0} is not a valid word")]
    InvalidWord(String),
}

/// Result of a submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is valid: `score` points for `words`.
    Accepted { score: u32, words: Vec<String> },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Points scored, 0 if rejected.
    pub fn score(&self) -> u32 {
        match self {
            MoveOutcome::Accepted { score, .. } => *score,
            MoveOutcome::Rejected(_) => 0,
        }
    }
}

/// Checks a move against the rules and the dictionary, and scores it.
///
/// The move consists of the temporary tiles on the board. Premium squares are only
/// consumed after every check has passed, so a rejected move leaves the board as it was.
#[derive(Debug)]
pub struct MoveValidator<'a> {
    dictionary: &'a Dictionary,
    state: MoveState,
}

impl<'a> MoveValidator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> MoveValidator<'a> {
        MoveValidator {
            dictionary,
            state: MoveState::Idle,
        }
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    /// Back to `Idle`, ready for the next move.
    pub fn reset(&mut self) {
        self.state = MoveState::Idle;
    }

    /// Validate the move on `board`. If accepted, the premium squares used are consumed
    /// and the placed tiles are made final.
    ///
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use wordgrid::{Board, Dictionary, Error, Letter, MoveOutcome, MoveValidator, Tile};
    /// let dictionary = Dictionary::from_words(&["at", "cat"])?;
    /// let mut board = Board::default();
    /// for (col, ch) in (4..).zip("CAT".chars()) {
    ///     board.place(Tile::from_letter(Letter::try_from(ch)?)?, 4, col)?;
    /// }
    /// let outcome = MoveValidator::new(&dictionary).validate(&mut board);
    /// assert_eq!(outcome, MoveOutcome::Accepted { score: 10, words: vec!["CAT".into()] });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn validate(&mut self, board: &mut Board) -> MoveOutcome {
        self.state = MoveState::Idle;
        let added = board.temporary_tiles();
        match self.check(board, &added) {
            Ok(runs) => {
                let score = scoring::score_runs(board.grid_mut(), &runs);
                board.finalize(added.iter().map(|&(pos, _)| pos));
                self.state = MoveState::Accepted;
                debug!("accepted {:?} for {} points", score.words, score.total);
                MoveOutcome::Accepted {
                    score: score.total,
                    words: score.words,
                }
            }
            Err(rejection) => {
                self.state = MoveState::Rejected;
                debug!("rejected move: {}", rejection);
                MoveOutcome::Rejected(rejection)
            }
        }
    }

    /// All checks, without changing the board. Returns the runs to score.
    fn check(
        &mut self,
        board: &Board,
        added: &[(Position, Tile)],
    ) -> Result<Vec<WordRun>, Rejection> {
        if added.is_empty() {
            return Err(Rejection::NoTilesPlaced);
        }
        self.state = MoveState::TilesPlaced;
        // every added tile must be reachable from the final tiles, or on a first move
        // from the first added tile that touches another
        let mut anchors: Vec<Position> = (0..N)
            .flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
            .filter(|p| board.tile_at(p.row, p.col).map_or(false, |t| !t.is_temporary()))
            .collect();
        if anchors.is_empty() {
            let (first, _) = added
                .iter()
                .find(|(pos, _)| pos.neighbours().any(|n| board.is_occupied(n.row, n.col)))
                .unwrap_or(&added[0]);
            anchors.push(*first);
        }
        let connected = reachable(board, anchors);
        if let Some(&(pos, _)) = added.iter().find(|(pos, _)| !connected[pos.row][pos.col]) {
            return Err(Rejection::IllegalPlacement {
                row: pos.row,
                col: pos.col,
            });
        }
        self.state = MoveState::Validating;
        let horizontal = board.extract_horizontal_words();
        let vertical = board.extract_vertical_words();
        let runs = scoring::qualifying_runs(&horizontal, &vertical);
        if runs.is_empty() {
            return Err(Rejection::NoWordFormed);
        }
        if let Some(run) = runs.iter().find(|run| !self.dictionary.contains(&run.word())) {
            return Err(Rejection::InvalidWord(run.word()));
        }
        Ok(runs)
    }
}

/// The occupied cells that can be reached from `seeds` through orthogonal neighbours.
fn reachable<I: IntoIterator<Item = Position>>(board: &Board, seeds: I) -> [[bool; N]; N] {
    let mut seen = [[false; N]; N];
    let mut stack: Vec<Position> = seeds.into_iter().collect();
    while let Some(pos) = stack.pop() {
        if seen[pos.row][pos.col] || !board.is_occupied(pos.row, pos.col) {
            continue;
        }
        seen[pos.row][pos.col] = true;
        stack.extend(pos.neighbours());
    }
    seen
}
