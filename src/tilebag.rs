use crate::tileset::TILESET;
use crate::Letter;
use multiset::HashMultiSet;
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Deref;

/// Keeps track of the tiles that have not been drawn yet.
///
/// Tiles are drawn without replacement, using the random source passed to
/// [`draw`](TileBag::draw). With a seeded generator the draws are reproducible.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::full()
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A bag with the full tile distribution: 100 tiles including two blanks.
    pub fn full() -> Self {
        let mut bag = HashMultiSet::new();
        for &(label, count, _points) in TILESET {
            if let Ok(letter) = Letter::try_from(label) {
                bag.insert_times(letter, count as usize);
            }
        }
        Self(bag)
    }

    fn from_letters<T: AsRef<[Letter]>>(letters: T) -> TileBag {
        let mut bag = HashMultiSet::new();
        for &letter in letters.as_ref() {
            bag.insert(letter);
        }
        Self(bag)
    }

    /// Draw a random letter, or None if the bag is empty.
    ///
    /// Letters are visited in sorted order, so the result only depends on the state of `rng`.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Letter> {
        let total = self.0.len();
        if total == 0 {
            return None;
        }
        let mut k = rng.gen_range(0..total);
        let mut letters: Vec<Letter> = self.0.distinct_elements().copied().collect();
        letters.sort_unstable();
        for letter in letters {
            let count = self.0.count_of(&letter);
            if k < count {
                self.0.remove(&letter);
                return Some(letter);
            }
            k -= count;
        }
        None
    }

    /// Put a letter back in the bag.
    pub fn put(&mut self, letter: Letter) {
        self.0.insert(letter);
    }
}

impl<T> From<T> for TileBag
where
    T: AsRef<[Letter]>,
{
    fn from(letters: T) -> Self {
        TileBag::from_letters(letters)
    }
}
