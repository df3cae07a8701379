use crate::atom::AtomPool;
use crate::draw::Draw;
use rand::distr::Distribution;
use rand::Rng;
use tracing::trace;

/// Upper bound (inclusive) of the draw deciding how a term grows.
const CHOICE_MAX: usize = 101;
/// Draws below this wrap the term in parentheses.
const PAREN_BELOW: usize = 25;
/// Draws below this (and not below the previous) append `+`.
const PLUS_BELOW: usize = 45;
/// Draws below this append `-`; everything else appends `*`.
const MINUS_BELOW: usize = 75;

/// Generates random arithmetic terms.
///
/// A term starts as a single atom and grows until it is at least as long as
/// the requested target, either by being wrapped in parentheses or by having
/// an operator and a recursively generated sub-term appended. The sub-term's
/// own target is drawn from `1..=remaining` where `remaining` is how many
/// characters the term still lacks.
///
/// Termination is only probabilistic. Use [`with_max_depth()`] to bound the
/// recursion, at the cost of changing the output distribution.
///
/// [`with_max_depth()`]: TermGenerator::with_max_depth
///
/// # Examples
///
/// ```
/// use rand::Rng;
///
/// let gen = termgen::TermGenerator::new(40);
/// for term in rand::rng().sample_iter::<String, _>(&gen).take(3) {
///     assert!(term.len() >= 40);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TermGenerator {
    atoms: AtomPool,
    target_length: usize,
    max_depth: Option<usize>,
}

impl TermGenerator {
    /// Creates a generator of terms at least `target_length` characters long.
    ///
    /// A zero target behaves like a target of 1: every term is at least one
    /// atom.
    pub fn new(target_length: usize) -> Self {
        Self {
            atoms: AtomPool::new(),
            target_length,
            max_depth: None,
        }
    }

    /// Limits how deeply sub-terms may nest.
    ///
    /// Sub-terms nested more than `max_depth` levels below the top-level term
    /// are a single atom regardless of their target length. Top-level terms
    /// still reach the requested length while nested ones may fall short.
    /// `None` removes the limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the length every generated term reaches.
    pub const fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the recursion limit, if any.
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Generates one term using the given source of randomness.
    pub fn generate<D: Draw + ?Sized>(&self, source: &mut D) -> String {
        self.build(source, self.target_length, 0)
    }

    fn build<D: Draw + ?Sized>(&self, source: &mut D, length: usize, depth: usize) -> String {
        let mut term = self.atoms.pick(source).to_string();

        if self.max_depth.is_some_and(|max| depth > max) {
            return term;
        }

        while term.len() < length {
            let choice = source.draw(0, CHOICE_MAX);
            if choice < PAREN_BELOW {
                term.insert(0, '(');
                term.push(')');
                continue;
            }

            let op = if choice < PLUS_BELOW {
                '+'
            } else if choice < MINUS_BELOW {
                '-'
            } else {
                '*'
            };
            let sub_length = source.draw(1, length - term.len());
            trace!(depth, sub_length, %op, "expanding sub-term");
            let sub = self.build(source, sub_length, depth + 1);
            term.push(op);
            term.push_str(&sub);
        }

        term
    }
}

impl Distribution<String> for TermGenerator {
    /// Samples a term of at least [`target_length()`](TermGenerator::target_length)
    /// characters.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.generate(rng)
    }
}

/// Checks that every `(` in `term` is closed by a later `)` and vice versa.
pub fn is_balanced(term: &str) -> bool {
    let mut open = 0_usize;
    for b in term.bytes() {
        match b {
            b'(' => open += 1,
            b')' => match open.checked_sub(1) {
                Some(rest) => open = rest,
                None => return false,
            },
            _ => {}
        }
    }
    open == 0
}
