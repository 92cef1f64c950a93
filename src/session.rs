use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::grid::Position;
use crate::tilebag::TileBag;
use crate::validator::{MoveOutcome, MoveValidator};
use crate::{Error, Rack, Tile};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// One of the two players. Player one moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Final result of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{} wins", player),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
struct PlayerState {
    score: u32,
    rack: Rack,
}

/// A game between two players.
///
/// The current player moves letters from the rack to the board with
/// [`place_tile`](GameSession::place_tile) and [`place_blank`](GameSession::place_blank),
/// and submits them with [`submit_move`](GameSession::submit_move).
/// A rejected move puts every tile back in the rack slot it came from.
///
/// ## Examples
/// ```
/// # use wordgrid::{Dictionary, Error, GameSession, Player};
/// let dictionary = Dictionary::from_words(&["at", "cat"])?;
/// let session = GameSession::with_seed(dictionary, 7);
/// assert_eq!(session.current_player(), Player::One);
/// assert_eq!(session.rack(Player::One).len(), 7);
/// assert_eq!(session.tiles_in_bag(), 86);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    dictionary: Dictionary,
    board: Board,
    players: [PlayerState; 2],
    current: Player,
    bag: TileBag,
    rng: R,
    /// Tiles of the current move and the rack slot each came from
    placed: Vec<(Position, usize)>,
    result: Option<GameResult>,
}

impl GameSession<StdRng> {
    /// A new game with a seeded random generator. Games with the same seed draw the same tiles.
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        GameSession::new(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// A new game: empty board, full bag and both racks filled, player one first.
    pub fn new(dictionary: Dictionary, mut rng: R) -> Self {
        let mut bag = TileBag::full();
        let mut players = [PlayerState::default(); 2];
        for player in players.iter_mut() {
            player.rack.refill(&mut bag, &mut rng);
        }
        info!("new game, {} tiles in the bag", bag.len());
        GameSession {
            dictionary,
            board: Board::default(),
            players,
            current: Player::One,
            bag,
            rng,
            placed: Vec::new(),
            result: None,
        }
    }

    fn ensure_running(&self) -> Result<(), Error> {
        if self.result.is_some() {
            return Err(Error::GameOver);
        }
        Ok(())
    }

    /// Move the letter in `slot` of the current rack to `row`, `col`.
    /// ## Errors
    /// - [`GameOver`](Error::GameOver) after [`end_game`](GameSession::end_game).
    /// - [`EmptySlot`](Error::EmptySlot) if there is no letter in `slot`.
    /// - [`BlankNeedsLetter`](Error::BlankNeedsLetter) if the letter is a blank.
    /// - [`OutOfBounds`](Error::OutOfBounds), [`OccupiedCell`](Error::OccupiedCell) or
    ///   [`IllegalPlacement`](Error::IllegalPlacement) if the tile can not go there.
    pub fn place_tile(&mut self, slot: usize, row: usize, col: usize) -> Result<(), Error> {
        self.ensure_running()?;
        let letter = self.players[self.current.index()]
            .rack
            .get(slot)
            .ok_or(Error::EmptySlot(slot))?;
        self.place(slot, Tile::from_letter(letter)?, row, col)
    }

    /// Move the blank in `slot` to `row`, `col`, showing `letter`.
    /// A regular letter in `slot` is placed as is.
    pub fn place_blank(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        letter: char,
    ) -> Result<(), Error> {
        self.ensure_running()?;
        let rack_letter = self.players[self.current.index()]
            .rack
            .get(slot)
            .ok_or(Error::EmptySlot(slot))?;
        let tile = if rack_letter.is_blank() {
            Tile::wildcard(letter)?
        } else {
            Tile::from_letter(rack_letter)?
        };
        self.place(slot, tile, row, col)
    }

    fn place(&mut self, slot: usize, tile: Tile, row: usize, col: usize) -> Result<(), Error> {
        let pos = Position::checked(row, col)?;
        if self.board.is_occupied(row, col) {
            return Err(Error::OccupiedCell { row, col });
        }
        if !self.board.is_placement_legal(row, col) {
            return Err(Error::IllegalPlacement { row, col });
        }
        self.board.place(tile, row, col)?;
        self.players[self.current.index()].rack.take(slot)?;
        self.placed.push((pos, slot));
        Ok(())
    }

    /// Take a tile of the current move back to its rack slot.
    /// ## Errors
    /// [`NotRemovable`](Error::NotRemovable) if the cell is empty or holds a final tile.
    pub fn remove_tile(&mut self, row: usize, col: usize) -> Result<(), Error> {
        self.ensure_running()?;
        let index = self
            .placed
            .iter()
            .position(|&(pos, _)| pos == Position::new(row, col))
            .ok_or(Error::NotRemovable { row, col })?;
        let (pos, slot) = self.placed.remove(index);
        self.take_back(pos, slot);
        Ok(())
    }

    /// Take back all tiles of the current move.
    pub fn recall_tiles(&mut self) -> Result<(), Error> {
        self.ensure_running()?;
        self.revert();
        Ok(())
    }

    fn take_back(&mut self, pos: Position, slot: usize) {
        if let Some(tile) = self.board.remove(pos.row, pos.col) {
            self.players[self.current.index()]
                .rack
                .put_back(slot, tile.to_rack_letter());
        }
    }

    fn revert(&mut self) {
        while let Some((pos, slot)) = self.placed.pop() {
            self.take_back(pos, slot);
        }
    }

    /// Submit the tiles on the board as a move.
    ///
    /// If the move is accepted, the score is added to the current player, the rack is
    /// refilled and it is the other player's turn. If the move is rejected, the tiles
    /// go back to the rack and the same player moves again.
    pub fn submit_move(&mut self) -> Result<MoveOutcome, Error> {
        self.ensure_running()?;
        let outcome = MoveValidator::new(&self.dictionary).validate(&mut self.board);
        let player = &mut self.players[self.current.index()];
        match &outcome {
            MoveOutcome::Accepted { score, words } => {
                player.score += score;
                self.placed.clear();
                let drawn = player.rack.refill(&mut self.bag, &mut self.rng);
                info!(
                    "{} played {:?} for {} points, total {}",
                    self.current, words, score, player.score
                );
                debug!("{} drew {} tiles, {} left", self.current, drawn, self.bag.len());
                self.current = self.current.other();
            }
            MoveOutcome::Rejected(rejection) => {
                debug!("{}: {}", self.current, rejection);
                self.revert();
            }
        }
        Ok(outcome)
    }

    /// End the game. Tiles of an unfinished move go back to the rack.
    /// The player with the highest score wins.
    pub fn end_game(&mut self) -> GameResult {
        if let Some(result) = self.result {
            return result;
        }
        self.revert();
        let (one, two) = (self.score(Player::One), self.score(Player::Two));
        let result = if one > two {
            GameResult::Winner(Player::One)
        } else if two > one {
            GameResult::Winner(Player::Two)
        } else {
            GameResult::Tie
        };
        info!("game over: {} ({} - {})", result, one, two);
        self.result = Some(result);
        result
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self, player: Player) -> u32 {
        self.players[player.index()].score
    }

    pub fn rack(&self, player: Player) -> &Rack {
        &self.players[player.index()].rack
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of tiles that have not been drawn.
    pub fn tiles_in_bag(&self) -> usize {
        self.bag.len()
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The result, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Rejection;
    use crate::Letter;
    use assert_matches::assert_matches;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    fn session() -> GameSession {
        let dictionary = Dictionary::from_words(&["AT", "CAT", "CATS", "TA"]).unwrap();
        GameSession::with_seed(dictionary, 42)
    }

    /// Replace the rack of `player`; `*` is a blank.
    fn set_rack(session: &mut GameSession, player: Player, letters: &str) {
        let mut rack = Rack::new();
        for (slot, ch) in letters.chars().enumerate() {
            rack.put_back(slot, Letter::try_from(ch).unwrap());
        }
        session.players[player.index()].rack = rack;
    }

    #[test]
    fn test_new() {
        let session = session();
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.rack(Player::One).len(), 7);
        assert_eq!(session.rack(Player::Two).len(), 7);
        assert_eq!(session.tiles_in_bag(), 100 - 14);
        assert_eq!(session.score(Player::One), 0);
        assert!(session.board().is_empty());
        assert!(!session.is_over());
        assert_eq!(session.dictionary().len(), 4);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let a = session();
        let b = session();
        assert_eq!(a.rack(Player::One), b.rack(Player::One));
        assert_eq!(a.rack(Player::Two), b.rack(Player::Two));
    }

    #[test]
    fn test_accepted_move() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "QCZATXY");
        session.place_tile(1, 4, 4)?;
        session.place_tile(3, 4, 5)?;
        session.place_tile(4, 4, 6)?;
        let outcome = session.submit_move()?;
        assert_matches!(outcome, MoveOutcome::Accepted { score: 10, .. });
        assert_eq!(session.score(Player::One), 10);
        assert_eq!(session.current_player(), Player::Two);
        // compacted and refilled
        let rack = session.rack(Player::One);
        assert_eq!(rack.len(), 7);
        assert_eq!(rack.get(0), Letter::try_from('Q').ok());
        assert_eq!(rack.get(1), Letter::try_from('Z').ok());
        assert_eq!(session.tiles_in_bag(), 100 - 14 - 3);
        assert!(!session.board().tile_at(4, 4).unwrap().is_temporary());
        Ok(())
    }

    #[test]
    fn test_rejected_move_rolls_back() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "CAXQRST");
        let before = *session.rack(Player::One);
        session.place_tile(0, 4, 4)?;
        session.place_tile(1, 4, 5)?;
        session.place_tile(2, 4, 6)?;
        assert_eq!(session.rack(Player::One).len(), 4);
        let outcome = session.submit_move()?;
        assert_eq!(
            outcome,
            MoveOutcome::Rejected(Rejection::InvalidWord(String::from("CAX")))
        );
        assert_eq!(*session.rack(Player::One), before);
        assert_eq!(session.score(Player::One), 0);
        assert_eq!(session.current_player(), Player::One);
        assert!(session.board().is_empty());
        assert!(!session.board().square(4, 6).unwrap().is_consumed());
        Ok(())
    }

    #[test]
    fn test_single_tile_first_move() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "A");
        session.place_tile(0, 4, 4)?;
        let outcome = session.submit_move()?;
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::NoWordFormed));
        assert!(session.board().is_empty());
        assert_eq!(session.rack(Player::One).to_string(), "A______");
        assert_eq!(session.current_player(), Player::One);
        Ok(())
    }

    #[test]
    fn test_empty_submit() -> Result<()> {
        let mut session = session();
        assert_eq!(
            session.submit_move()?,
            MoveOutcome::Rejected(Rejection::NoTilesPlaced)
        );
        Ok(())
    }

    #[test]
    fn test_turns() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "AT");
        session.place_tile(0, 4, 4)?;
        session.place_tile(1, 4, 5)?;
        assert!(session.submit_move()?.is_accepted());
        assert_eq!(session.current_player(), Player::Two);
        set_rack(&mut session, Player::Two, "CS");
        session.place_tile(0, 4, 3)?;
        session.place_tile(1, 4, 6)?;
        let outcome = session.submit_move()?;
        // C at (4,3) plain, S at (4,6) double word
        assert_eq!(outcome.score(), (3 + 1 + 1 + 1) * 2);
        assert_eq!(session.score(Player::Two), 12);
        assert_eq!(session.current_player(), Player::One);
        Ok(())
    }

    #[test]
    fn test_removed_link_disconnects_move() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "AT");
        session.place_tile(0, 4, 4)?;
        session.place_tile(1, 4, 5)?;
        assert!(session.submit_move()?.is_accepted());
        set_rack(&mut session, Player::Two, "TAT");
        session.place_tile(0, 3, 4)?;
        session.place_tile(1, 2, 4)?;
        session.place_tile(2, 2, 5)?;
        session.remove_tile(3, 4)?;
        let outcome = session.submit_move()?;
        assert_eq!(
            outcome,
            MoveOutcome::Rejected(Rejection::IllegalPlacement { row: 2, col: 4 })
        );
        assert_eq!(session.rack(Player::Two).to_string(), "TAT____");
        assert_eq!(session.score(Player::Two), 0);
        assert_eq!(session.current_player(), Player::Two);
        assert!(!session.board().is_occupied(2, 4));
        Ok(())
    }

    #[test]
    fn test_remove_and_recall() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "CAT");
        session.place_tile(0, 4, 4)?;
        session.place_tile(1, 4, 5)?;
        session.place_tile(2, 4, 6)?;
        session.remove_tile(4, 5)?;
        assert_eq!(session.rack(Player::One).to_string(), "_A_____");
        assert!(!session.board().is_occupied(4, 5));
        session.recall_tiles()?;
        assert_eq!(session.rack(Player::One).to_string(), "CAT____");
        assert!(session.board().is_empty());
        assert_matches!(
            session.remove_tile(4, 4),
            Err(Error::NotRemovable { row: 4, col: 4 })
        );
        Ok(())
    }

    #[test]
    fn test_place_errors() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "CA*");
        assert_matches!(session.place_tile(5, 4, 4), Err(Error::EmptySlot(5)));
        assert_matches!(session.place_tile(2, 4, 4), Err(Error::BlankNeedsLetter));
        assert_matches!(
            session.place_tile(0, 9, 4),
            Err(Error::OutOfBounds { row: 9, col: 4 })
        );
        session.place_tile(0, 4, 4)?;
        assert_matches!(
            session.place_tile(1, 4, 4),
            Err(Error::OccupiedCell { row: 4, col: 4 })
        );
        assert_matches!(
            session.place_tile(1, 0, 0),
            Err(Error::IllegalPlacement { row: 0, col: 0 })
        );
        assert_matches!(session.place_tile(0, 4, 5), Err(Error::EmptySlot(0)));
        // failed placements leave the rack alone
        assert_eq!(session.rack(Player::One).to_string(), "_A*____");
        Ok(())
    }

    #[test]
    fn test_blank() -> Result<()> {
        let mut session = session();
        set_rack(&mut session, Player::One, "*T");
        assert_matches!(
            session.place_blank(0, 4, 4, '3'),
            Err(Error::InvalidLetter('3'))
        );
        session.place_blank(0, 4, 4, 'a')?;
        assert!(session.board().tile_at(4, 4).unwrap().is_wildcard());
        // letter ignored for a regular tile
        session.place_blank(1, 4, 5, 'x')?;
        assert_eq!(session.board().tile_at(4, 5).unwrap().to_char(), 'T');
        session.remove_tile(4, 4)?;
        assert_eq!(session.rack(Player::One).get(0), Some(Letter::BLANK));
        session.place_blank(0, 4, 4, 'a')?;
        let outcome = session.submit_move()?;
        assert_eq!(
            outcome,
            MoveOutcome::Accepted {
                score: 1,
                words: vec![String::from("AT")]
            }
        );
        Ok(())
    }

    #[test]
    fn test_end_game() -> Result<()> {
        let mut session = session();
        session.players[1].score = 5;
        set_rack(&mut session, Player::One, "A");
        session.place_tile(0, 4, 4)?;
        assert_eq!(session.end_game(), GameResult::Winner(Player::Two));
        assert!(session.is_over());
        assert_eq!(session.result(), Some(GameResult::Winner(Player::Two)));
        assert!(session.board().is_empty());
        assert_eq!(session.end_game(), GameResult::Winner(Player::Two));
        assert_matches!(session.place_tile(0, 4, 4), Err(Error::GameOver));
        assert_matches!(session.submit_move(), Err(Error::GameOver));
        assert_matches!(session.recall_tiles(), Err(Error::GameOver));
        assert_eq!(GameResult::Winner(Player::Two).to_string(), "Player 2 wins");
        Ok(())
    }

    #[test]
    fn test_tie() {
        let mut session = session();
        assert_eq!(session.end_game(), GameResult::Tie);
    }
}
