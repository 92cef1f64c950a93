//! Scoring of the words formed by a move.
//!
//! A word is scored by adding the letter values, with one extra letter value for a tile
//! on a double letter square and two extra for a triple letter square. The sum is then
//! multiplied by 2 for every tile on a double word square and by 3 for every tile on a
//! triple word square. A premium square is consumed the first time it is scored, and
//! after that it counts as a plain square.
use crate::board::WordRun;
use crate::grid::Grid;
use log::debug;
use std::collections::HashSet;

/// Total score of a move, and the words that were scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveScore {
    pub total: u32,
    pub words: Vec<String>,
}

/// Select the runs that count as words for the current move, horizontal runs first.
///
/// A run counts if it has at least two tiles, contains a temporary tile, and the same
/// word was not selected before. Square state is not touched.
pub fn qualifying_runs(horizontal: &[WordRun], vertical: &[WordRun]) -> Vec<WordRun> {
    let mut seen = HashSet::new();
    horizontal
        .iter()
        .chain(vertical)
        .filter(|run| run.len() >= 2 && run.has_temporary())
        .filter(|run| seen.insert(run.word()))
        .cloned()
        .collect()
}

/// Score a single run, consuming the premium squares it uses.
pub fn score_run(grid: &mut Grid, run: &WordRun) -> u32 {
    let mut score = 0;
    for &(pos, tile) in run.tiles() {
        let square = &mut grid[pos.row][pos.col];
        let points = tile.points();
        let bonus = square.bonus().letter_bonus();
        if bonus > 0 {
            debug!("{} on {} at {}", tile, square.premium(), pos);
            square.consume();
        }
        score += points + bonus * points;
    }
    for &(pos, tile) in run.tiles() {
        let square = &mut grid[pos.row][pos.col];
        let multiplier = square.bonus().word_multiplier();
        if multiplier > 1 {
            debug!("{} on {} at {}", tile, square.premium(), pos);
            square.consume();
        }
        score *= multiplier;
    }
    score
}

/// Score runs that have already been selected with [`qualifying_runs`].
pub fn score_runs(grid: &mut Grid, runs: &[WordRun]) -> MoveScore {
    runs.iter().fold(MoveScore::default(), |mut acc, run| {
        acc.total += score_run(grid, run);
        acc.words.push(run.word());
        acc
    })
}

/// Score all words of the current move.
pub fn score_move(grid: &mut Grid, horizontal: &[WordRun], vertical: &[WordRun]) -> MoveScore {
    score_runs(grid, &qualifying_runs(horizontal, vertical))
}
