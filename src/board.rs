use crate::grid::{Grid, Position, Square, N};
use crate::{Cell, Error, Tile};
use log::debug;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

type State = [[Cell; N]; N];

/// Direction of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Position of the `i`th cell of `line` (a row if horizontal, else a column).
    fn position(self, line: usize, i: usize) -> Position {
        match self {
            Direction::Horizontal => Position::new(line, i),
            Direction::Vertical => Position::new(i, line),
        }
    }
}

/// A maximal run of occupied cells in one row or column, with its tiles in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRun {
    direction: Direction,
    tiles: ArrayVec<[(Position, Tile); N]>,
}

impl WordRun {
    fn new(direction: Direction) -> WordRun {
        WordRun {
            direction,
            tiles: ArrayVec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Position of the first tile.
    pub fn start(&self) -> Option<Position> {
        self.tiles.first().map(|&(pos, _)| pos)
    }

    /// The tiles of the run, left to right or top to bottom.
    pub fn tiles(&self) -> &[(Position, Tile)] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The letters of the run as (upper case) word.
    pub fn word(&self) -> String {
        self.tiles.iter().map(|(_, tile)| tile.to_char()).collect()
    }

    /// Check if the run contains a tile of the current move.
    pub fn has_temporary(&self) -> bool {
        self.tiles.iter().any(|(_, tile)| tile.is_temporary())
    }
}

/// Display the board state as 9 lines of 9 cells.
/// Empty cells show as ".", wildcards in lower case.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents the state of the board:
/// * A grid of 9x9 squares with possible letter/word premium,
/// * The tiles on the board.
///
/// The board is the only owner of both; all changes go through its methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    cells: State,
}

impl Board {
    /// Create a new empty board with the standard grid.
    #[must_use]
    pub fn new() -> Board {
        Board {
            grid: Grid::default(),
            cells: [[Cell::EMPTY; N]; N],
        }
    }

    /// Parse board state from a list of strings.
    /// The list must contain 9 rows of 9 characters: `.` or space for an empty cell,
    /// `A`..`Z` for a letter and `a`..`z` for a blank used as that letter.
    ///
    /// The tiles are final, and the premium squares below them are consumed.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains other characters.
    ///
    /// ## Examples
    /// ```
    /// use wordgrid::Board;
    /// let state = &[
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     "....CAT..",
    ///     "......o..",
    ///     "......E..",
    ///     ".........",
    ///     ".........",
    /// ];
    /// let board = Board::default().with_state_from_strings(state).unwrap();
    /// assert!(board.is_occupied(5, 6));
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set board state from list of strings. See
    /// [`with_state_from_strings`](Board::with_state_from_strings).
    pub fn set_state_from_strings(&mut self, rows: &[&str]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut cells = [[Cell::EMPTY; N]; N];
        for (i, &row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, ch) in row.chars().enumerate() {
                cells[i][j] = match ch {
                    '.' | ' ' => Cell::EMPTY,
                    'a'..='z' => Tile::wildcard(ch)?.into_cell(),
                    _ => Tile::from_letter(crate::Letter::try_from(ch)?)?.into_cell(),
                };
            }
        }
        let mut grid = Grid::default();
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                if let Some(tile) = cell.tile_mut() {
                    tile.set_final();
                    grid[i][j].consume();
                }
            }
        }
        self.cells = cells;
        self.grid = grid;
        Ok(())
    }

    /// Get board cells as a vec of 9 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect::<String>())
            .collect()
    }

    /// Return the premium grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Return the cell at `row`, `col`, or None if outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Return the square at `row`, `col`, or None if outside the board.
    pub fn square(&self, row: usize, col: usize) -> Option<Square> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Return tile at `row`, `col` or None if empty cell or outside grid.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        self.cell(row, col).and_then(|cell| cell.tile())
    }

    /// Check if cell at `row`, `col` is occupied.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid::{Board, Error, Tile};
    /// let mut board = Board::default();
    /// board.place(Tile::wildcard('x')?, 4, 4)?;
    /// assert!(board.is_occupied(4, 4));
    /// assert!(!board.is_occupied(4, 5));
    /// assert!(!board.is_occupied(40, 4));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    /// Check if there are no tiles on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_empty)
    }

    /// The number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Put `tile` on the cell at `row`, `col`.
    /// ## Errors
    /// - [`OutOfBounds`](Error::OutOfBounds) if the position is not on the board.
    /// - [`OccupiedCell`](Error::OccupiedCell) if the cell already holds a tile.
    ///
    /// The board is not changed on error.
    pub fn place(&mut self, tile: Tile, row: usize, col: usize) -> Result<(), Error> {
        let pos = Position::checked(row, col)?;
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_empty() {
            return Err(Error::OccupiedCell { row, col });
        }
        *cell = tile.into_cell();
        debug!("placed {} at {}", tile, pos);
        Ok(())
    }

    /// Clear the cell at `row`, `col`, and return the tile that was there.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Tile> {
        let tile = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .and_then(Cell::take);
        if let Some(tile) = tile {
            debug!("removed {} at {}", tile, Position::new(row, col));
        }
        tile
    }

    /// Check if a tile may be put at `row`, `col`: the position is on the board, and
    /// either the board is empty or one of the four neighbours holds a tile.
    pub fn is_placement_legal(&self, row: usize, col: usize) -> bool {
        match Position::checked(row, col) {
            Ok(pos) => {
                self.is_empty()
                    || pos
                        .neighbours()
                        .any(|n| self.is_occupied(n.row, n.col))
            }
            Err(_) => false,
        }
    }

    /// All temporary tiles (the current move), in row-major order.
    pub fn temporary_tiles(&self) -> Vec<(Position, Tile)> {
        let mut tiles = Vec::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if let Some(tile) = cell.tile().filter(Tile::is_temporary) {
                    tiles.push((Position::new(i, j), tile));
                }
            }
        }
        tiles
    }

    /// Lock the tiles at `positions` on the board.
    pub fn finalize<I: IntoIterator<Item = Position>>(&mut self, positions: I) {
        for pos in positions {
            if let Some(tile) = self
                .cells
                .get_mut(pos.row)
                .and_then(|r| r.get_mut(pos.col))
                .and_then(Cell::tile_mut)
            {
                tile.set_final();
            }
        }
    }

    /// All maximal horizontal runs, top to bottom.
    pub fn extract_horizontal_words(&self) -> Vec<WordRun> {
        self.extract_words(Direction::Horizontal)
    }

    /// All maximal vertical runs, left to right.
    pub fn extract_vertical_words(&self) -> Vec<WordRun> {
        self.extract_words(Direction::Vertical)
    }

    /// Scan every line in `direction`. A run starts at an occupied cell after an empty
    /// cell or the border, and ends before the next empty cell or the border.
    fn extract_words(&self, direction: Direction) -> Vec<WordRun> {
        let mut runs = Vec::new();
        for line in 0..N {
            let mut run: Option<WordRun> = None;
            for i in 0..N {
                let pos = direction.position(line, i);
                match self.cells[pos.row][pos.col].tile() {
                    Some(tile) => run
                        .get_or_insert_with(|| WordRun::new(direction))
                        .tiles
                        .push((pos, tile)),
                    None => runs.extend(run.take()),
                }
            }
            runs.extend(run);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, Premium};

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "C........",
        "A........",
        "TOP..D...",
        "........S",
        "....DOG.U",
        "......O.N",
        "......A..",
        "......t..",
        "XY.....ZO",
    ];

    fn tile(ch: char) -> Tile {
        Tile::from_letter(Letter::try_from(ch).unwrap()).unwrap()
    }

    fn words(runs: &[WordRun]) -> Vec<String> {
        runs.iter().map(WordRun::word).collect()
    }

    #[test]
    fn test_state() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        assert_eq!(board.to_strings(), TEST_STATE);
        assert!(board.is_occupied(0, 0));
        assert!(!board.is_occupied(0, 1));
        assert!(board.tile_at(7, 6).unwrap().is_wildcard());
        assert!(board.temporary_tiles().is_empty());
        // premium below a loaded tile is consumed
        assert!(board.square(0, 0).unwrap().is_consumed());
        assert!(!board.square(1, 1).unwrap().is_consumed());
        println!("{}", board);
        Ok(())
    }

    #[test]
    fn test_state_errors() {
        let board = Board::default();
        assert!(matches!(
            board.clone().with_state_from_strings(&TEST_STATE[1..]),
            Err(Error::InvalidRowCount(8))
        ));
        let mut state = TEST_STATE.to_vec();
        state[3] = "....";
        assert!(matches!(
            board.clone().with_state_from_strings(&state),
            Err(Error::InvalidRowLength(_, 4))
        ));
        state[3] = "....#....";
        assert!(matches!(
            board.with_state_from_strings(&state),
            Err(Error::InvalidLetter('#'))
        ));
    }

    #[test]
    fn test_extract_horizontal_words() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let runs = board.extract_horizontal_words();
        assert_eq!(
            words(&runs),
            vec!["C", "A", "TOP", "D", "S", "DOG", "U", "O", "N", "A", "T", "XY", "ZO"]
        );
        let top = &runs[2];
        assert_eq!(top.direction(), Direction::Horizontal);
        assert_eq!(top.start(), Some(Position::new(2, 0)));
        assert_eq!(top.len(), 3);
        Ok(())
    }

    #[test]
    fn test_extract_vertical_words() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let runs = board.extract_vertical_words();
        assert_eq!(
            words(&runs),
            vec!["CAT", "X", "O", "Y", "P", "D", "D", "O", "GOAT", "Z", "SUN", "O"]
        );
        let goat = &runs[8];
        assert_eq!(goat.direction(), Direction::Vertical);
        assert_eq!(goat.start(), Some(Position::new(4, 6)));
        assert!(!goat.has_temporary());
        Ok(())
    }

    #[test]
    fn test_place_remove() -> Result<()> {
        let mut board = Board::default();
        assert!(board.is_empty());
        board.place(tile('Q'), 0, 8)?;
        assert_eq!(board.tile_count(), 1);
        assert_eq!(board.temporary_tiles(), vec![(Position::new(0, 8), tile('Q'))]);
        assert_eq!(board.remove(0, 8), Some(tile('Q')));
        assert_eq!(board.remove(0, 8), None);
        assert_eq!(board.remove(10, 8), None);
        assert!(board.is_empty());
        Ok(())
    }

    #[test]
    fn test_place_occupied_keeps_board() -> Result<()> {
        let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
        let before = board.clone();
        assert!(matches!(
            board.place(tile('E'), 2, 1),
            Err(Error::OccupiedCell { row: 2, col: 1 })
        ));
        assert!(matches!(
            board.place(tile('E'), 9, 1),
            Err(Error::OutOfBounds { row: 9, col: 1 })
        ));
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn test_is_placement_legal() -> Result<()> {
        let mut board = Board::default();
        // empty board: anywhere on the board
        assert!(board.is_placement_legal(0, 0));
        assert!(board.is_placement_legal(8, 3));
        assert!(!board.is_placement_legal(9, 3));
        board.place(tile('A'), 4, 4)?;
        assert!(board.is_placement_legal(3, 4));
        assert!(board.is_placement_legal(4, 5));
        assert!(!board.is_placement_legal(5, 5));
        assert!(!board.is_placement_legal(0, 0));
        Ok(())
    }

    #[test]
    fn test_finalize() -> Result<()> {
        let mut board = Board::default();
        board.place(tile('A'), 4, 4)?;
        board.place(tile('T'), 4, 5)?;
        board.finalize(vec![Position::new(4, 4)]);
        assert_eq!(board.temporary_tiles().len(), 1);
        assert!(!board.tile_at(4, 4).unwrap().is_temporary());
        Ok(())
    }

    #[test]
    fn test_square() {
        let board = Board::default();
        assert_eq!(board.square(4, 4).unwrap().premium(), Premium::Center);
        assert_eq!(board.square(4, 9), None);
        assert_eq!(board.cell(4, 4), Some(Cell::EMPTY));
    }
}
