//! The tile distribution and the point value of each letter.
/// label, count, points
type TileInfo = (char, u32, u32);

/// Label used for the blank tile.
pub const BLANK_LABEL: char = '*';

/// The tile distribution used in the game: 100 tiles, including two blanks.
/// Point values follow the official Scrabble table.
pub const TILESET: &[TileInfo] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK_LABEL, 2, 0),
];

fn info(label: char) -> Option<&'static TileInfo> {
    TILESET.iter().find(|&&(l, _, _)| l == label)
}

/// Return the points for `label`, or 0 if not found
pub fn points(label: char) -> u32 {
    info(label).map_or(0, |&(_, _, points)| points)
}

/// Return the number of tiles with `label` in the bag, or 0 if not found
pub fn count(label: char) -> u32 {
    info(label).map_or(0, |&(_, count, _)| count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_count() {
        let total: u32 = TILESET.iter().map(|&(_, count, _)| count).sum();
        assert_eq!(total, 100);
        assert_eq!(count('E'), 12);
        assert_eq!(count(BLANK_LABEL), 2);
    }

    #[test]
    fn test_points() {
        assert_eq!(points('C'), 3);
        assert_eq!(points('Q'), 10);
        assert_eq!(points('K'), 5);
        assert_eq!(points(BLANK_LABEL), 0);
        assert_eq!(points('!'), 0);
    }
}
