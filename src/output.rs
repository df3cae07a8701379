use crate::config::Config;
use crate::draw::Draw;
use crate::term::TermGenerator;
use std::io::{self, Write};
use tracing::debug;

/// Writes a complete document: the number of term pairs on the first line,
/// followed by `config.term_count` freshly generated terms, one per line.
///
/// # Errors
///
/// Returns any error reported by `out`.
///
/// # Examples
///
/// ```
/// let config = termgen::Config::from_args(["4", "10"]).unwrap();
/// let mut out = Vec::new();
/// termgen::write_terms(&mut out, &mut rand::rng(), &config).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("2"));
/// assert_eq!(lines.count(), 4);
/// ```
pub fn write_terms<W, D>(out: &mut W, source: &mut D, config: &Config) -> io::Result<()>
where
    W: Write + ?Sized,
    D: Draw + ?Sized,
{
    let gen = TermGenerator::new(config.target_length).with_max_depth(config.max_depth);
    writeln!(out, "{}", config.pair_count())?;
    for index in 0..config.term_count {
        let term = gen.generate(source);
        debug!(index, len = term.len(), "generated term");
        writeln!(out, "{}", term)?;
    }
    out.flush()
}
