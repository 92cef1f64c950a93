use crate::Error;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs::read_to_string;

/// A node in the search tree. Children are indices into [`Dictionary::nodes`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    word: String,
    left: Option<u32>,
    right: Option<u32>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A balanced binary search tree that holds all the valid words.
///
/// The tree is built once from a sorted word list by repeated bisection: the middle word
/// of a range becomes the root, the left half the left subtree and the right half the
/// right subtree. For N words the depth of the tree is ⌈log2(N+1)⌉.
/// Words are stored in upper case.
pub struct Dictionary {
    nodes: Vec<Node>,
    root: Option<u32>,
    depth: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, depth {} from '{}'>",
            self.len(),
            self.depth,
            self.wordfile
        )
    }
}

/// Build the subtree for `words`, pushing nodes on `nodes`.
/// Returns the index of the subtree root and its depth.
fn build(words: &mut [String], nodes: &mut Vec<Node>) -> (Option<u32>, usize) {
    if words.is_empty() {
        return (None, 0);
    }
    let middle = (words.len() - 1) / 2;
    let index = nodes.len();
    nodes.push(Node {
        word: std::mem::take(&mut words[middle]),
        left: None,
        right: None,
    });
    let (lower, upper) = words.split_at_mut(middle);
    let (left, left_depth) = build(lower, nodes);
    let (right, right_depth) = build(&mut upper[1..], nodes);
    nodes[index].left = left;
    nodes[index].right = right;
    (Some(index as u32), 1 + left_depth.max(right_depth))
}

impl Dictionary {
    /// Build a dictionary from numbered lines. Lines are trimmed and upper cased,
    /// blank lines are skipped.
    fn from_lines<'a, I>(lines: I) -> Result<Dictionary, Error>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut words: Vec<String> = Vec::new();
        for (line, word) in lines {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_ascii_uppercase();
            if let Some(previous) = words.last() {
                if *previous >= word {
                    return Err(Error::DictionaryNotSorted { line, word });
                }
            }
            words.push(word);
        }
        let mut nodes = Vec::with_capacity(words.len());
        let (root, depth) = build(&mut words, &mut nodes);
        Ok(Dictionary {
            nodes,
            root,
            depth,
            wordfile: String::new(),
        })
    }

    /// Build a dictionary from a sorted list of words.
    ///
    /// The words must be strictly ascending (sorted and without duplicates) after
    /// upper casing.
    /// ## Errors
    /// [`DictionaryNotSorted`](Error::DictionaryNotSorted) if a word is not greater than
    /// the word before it.
    /// ## Examples
    /// ```
    /// # use wordgrid::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "dog", "emu"])?;
    /// assert!(dictionary.contains("DOG"));
    /// assert!(!dictionary.contains("cow"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        Dictionary::from_lines(
            words
                .iter()
                .enumerate()
                .map(|(i, word)| (i + 1, word.as_ref())),
        )
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8, have one word
    /// per line and be sorted.
    /// ## Errors
    /// - [`ReadError`](Error::ReadError) if the file can not be read.
    /// - [`DictionaryNotSorted`](Error::DictionaryNotSorted) if the words are not sorted.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary =
            Dictionary::from_lines(contents.lines().enumerate().map(|(i, l)| (i + 1, l)))?;
        dictionary.wordfile = String::from(wordfile);
        info!("loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DictionaryDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        info!("loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Write the dictionary to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::WriteError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::DictionaryDeserializeError(String::from(path)))
    }

    /// Returns true if `word` is in the dictionary. Case insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        let mut next = self.root;
        while let Some(i) = next {
            let node = &self.nodes[i as usize];
            next = match word.as_str().cmp(node.word.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// The number of words in the dictionary
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of levels in the search tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate over the words in sorted order.
    pub fn iter(&self) -> Words {
        let mut words = Words {
            dictionary: self,
            stack: Vec::with_capacity(self.depth),
        };
        words.push_left(self.root);
        words
    }
}

/// In-order iterator over the words of a [`Dictionary`].
pub struct Words<'a> {
    dictionary: &'a Dictionary,
    stack: Vec<u32>,
}

impl<'a> Words<'a> {
    fn push_left(&mut self, mut next: Option<u32>) {
        while let Some(i) = next {
            self.stack.push(i);
            next = self.dictionary.nodes[i as usize].left;
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let node = &self.dictionary.nodes[i as usize];
        self.push_left(node.right);
        Some(node.word.as_str())
    }
}
