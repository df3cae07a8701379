use crate::draw::Draw;
use rand::distr::Distribution;
use rand::Rng;
use std::fmt;

/// Number of times each letter is repeated in the pool.
const LETTER_WEIGHT: usize = 4;

/// Largest integer literal in the pool.
const MAX_NUMBER: u8 = 100;

/// The smallest unit of a term: a lowercase letter or an integer literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Atom {
    /// A variable name in `a..=z`.
    Letter(char),
    /// An integer literal in `0..=100`.
    Number(u8),
}

impl Atom {
    /// Checks if this atom is a letter.
    pub const fn is_letter(self) -> bool {
        matches!(self, Self::Letter(_))
    }

    /// Returns the number of characters this atom occupies in a term.
    pub fn width(self) -> usize {
        match self {
            Self::Letter(_) => 1,
            Self::Number(n) if n < 10 => 1,
            Self::Number(n) if n < 100 => 2,
            Self::Number(_) => 3,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => fmt::Display::fmt(c, f),
            Self::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// The weighted selection pool atoms are drawn from.
///
/// The pool holds every lowercase letter four times followed by the integers
/// 0 through 100 once each, 205 entries in total. Each draw picks one entry
/// uniformly, so a letter comes up with probability 104/205.
///
/// # Examples
///
/// ```
/// use rand::Rng;
///
/// let pool = termgen::AtomPool::new();
/// assert_eq!(pool.len(), 205);
/// let atom: termgen::Atom = rand::rng().sample(&pool);
/// assert!(atom.width() <= 3);
/// ```
#[derive(Clone, Debug)]
pub struct AtomPool {
    entries: Box<[Atom]>,
}

impl Default for AtomPool {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomPool {
    /// Builds the pool.
    pub fn new() -> Self {
        let letters = ('a'..='z').map(Atom::Letter);
        let mut entries = Vec::with_capacity(26 * LETTER_WEIGHT + usize::from(MAX_NUMBER) + 1);
        for _ in 0..LETTER_WEIGHT {
            entries.extend(letters.clone());
        }
        entries.extend((0..=MAX_NUMBER).map(Atom::Number));
        Self {
            entries: entries.into_boxed_slice(),
        }
    }

    /// Returns the number of entries in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the pool is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks one entry uniformly.
    pub fn pick<D: Draw + ?Sized>(&self, source: &mut D) -> Atom {
        self.entries[source.draw(0, self.entries.len() - 1)]
    }
}

impl Distribution<Atom> for AtomPool {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Atom {
        self.pick(rng)
    }
}
