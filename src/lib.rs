#![warn(missing_docs, clippy::pedantic)]

//! Generates random arithmetic terms built from letters, small integers,
//! `+`, `-`, `*` and parentheses.
//!
//! The output of the `termgenerator` binary is meant as input for the
//! LazyMathInstructor program: a line holding the number of term pairs,
//! followed by the terms themselves.
//!
//! ```
//! use rand::{Rng, SeedableRng};
//!
//! let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(0);
//!
//! // every term is at least 30 characters long
//! let gen = termgen::TermGenerator::new(30);
//! let terms = (&mut rng).sample_iter(&gen).take(4).collect::<Vec<String>>();
//! for term in &terms {
//!     assert!(term.len() >= 30);
//!     assert!(termgen::is_balanced(term));
//! }
//!
//! // the same seed replays the same terms
//! let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(0);
//! assert_eq!(terms, rng.sample_iter(&gen).take(4).collect::<Vec<String>>());
//! ```

#![allow(clippy::must_use_candidate)]

mod atom;
mod config;
mod draw;
mod output;
mod term;

pub use crate::atom::{Atom, AtomPool};
pub use crate::config::{
    Config, ConfigError, DEFAULT_TARGET_LENGTH, DEFAULT_TERM_COUNT, MAX_DEPTH_VAR, USAGE,
};
pub use crate::draw::Draw;
pub use crate::output::write_terms;
pub use crate::term::{is_balanced, TermGenerator};
