use super::Letter;
use crate::error::Error;
use crate::tilebag::TileBag;
use rand::Rng;
use std::fmt;
use tinyvec::ArrayVec;

/// Number of slots on a rack
pub const RACK_SIZE: usize = 7;

/// The letters of one player, in fixed slots.
///
/// A letter taken from a slot for a move goes back to the same slot when the move is
/// taken back or rejected.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack([Option<Letter>; RACK_SIZE]);

impl Rack {
    /// An empty rack
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Get the letter in `slot`, or None if the slot is empty or does not exist.
    pub fn get(&self, slot: usize) -> Option<Letter> {
        self.0.get(slot).copied().flatten()
    }

    /// Take the letter from `slot`, leaving it empty.
    /// ## Errors
    /// [`EmptySlot`](Error::EmptySlot) if there is no letter in `slot`.
    pub fn take(&mut self, slot: usize) -> Result<Letter, Error> {
        self.0
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or(Error::EmptySlot(slot))
    }

    /// Put `letter` back in `slot`. If that slot is taken, the first free slot is used.
    pub fn put_back(&mut self, slot: usize, letter: Letter) {
        let free = match self.0.get(slot) {
            Some(None) => Some(slot),
            _ => self.0.iter().position(Option::is_none),
        };
        if let Some(free) = free {
            self.0[free] = Some(letter);
        }
    }

    /// The letters on the rack, left to right.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.letters().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move all letters to the left.
    pub fn compact(&mut self) {
        let letters: ArrayVec<[Letter; RACK_SIZE]> = self.letters().collect();
        self.0 = [None; RACK_SIZE];
        for (slot, letter) in self.0.iter_mut().zip(letters) {
            *slot = Some(letter);
        }
    }

    /// Compact the rack and fill the free slots from `bag`.
    /// Returns the number of letters drawn.
    pub fn refill<R: Rng>(&mut self, bag: &mut TileBag, rng: &mut R) -> usize {
        self.compact();
        let mut drawn = 0;
        for slot in self.0.iter_mut().filter(|s| s.is_none()) {
            match bag.draw(rng) {
                Some(letter) => {
                    *slot = Some(letter);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }
}

/// Empty slots show as "_"
impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{}", letter)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::convert::TryFrom;

    fn letter(ch: char) -> Letter {
        Letter::try_from(ch).unwrap()
    }

    #[test]
    fn test_take_put_back() -> Result<(), Error> {
        let mut rack = Rack::new();
        rack.put_back(2, letter('C'));
        rack.put_back(4, letter('A'));
        assert_eq!(rack.to_string(), "__C_A__");
        assert_eq!(rack.take(2)?, letter('C'));
        assert_eq!(rack.get(2), None);
        rack.put_back(2, letter('C'));
        assert_eq!(rack.to_string(), "__C_A__");
        // slot taken: first free slot
        rack.put_back(4, letter('T'));
        assert_eq!(rack.to_string(), "T_C_A__");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "EmptySlot(9)")]
    fn test_take_empty() {
        Rack::new().take(9).unwrap();
    }

    #[test]
    fn test_refill() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bag = TileBag::from(&[letter('X'), letter('Y')]);
        let mut rack = Rack::new();
        rack.put_back(5, letter('Q'));
        assert_eq!(rack.refill(&mut bag, &mut rng), 2);
        assert_eq!(rack.len(), 3);
        assert_eq!(rack.get(0), Some(letter('Q')));
        assert!(bag.is_empty());
        assert_eq!(rack.refill(&mut bag, &mut rng), 0);
    }
}
