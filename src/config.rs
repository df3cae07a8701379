use std::num::ParseIntError;
use thiserror::Error;

/// Number of terms generated when no arguments are given.
pub const DEFAULT_TERM_COUNT: usize = 20;

/// Target term length used when no arguments are given.
pub const DEFAULT_TARGET_LENGTH: usize = 250;

/// Environment variable holding the optional recursion limit.
pub const MAX_DEPTH_VAR: &str = "TERMGEN_MAX_DEPTH";

/// Text printed whenever the command line is rejected.
pub const USAGE: &str = "
Usage: termgenerator.py N LENGTH
where
  N:      Number of terms to generate (must be even)
  LENGTH: Approximate length of each generated term
The output of this script can be used as input for the LazyMathInstructor program.";

/// Error returned by [`Config::from_args()`] and [`Config::with_max_depth_var()`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither zero nor two arguments were given.
    #[error("expected 0 or 2 arguments, got {0}")]
    Arity(usize),

    /// An argument is not an integer.
    #[error("{name} is not an integer: {value:?}")]
    NotAnInteger {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected text.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },

    /// An argument is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The term count is odd.
    #[error("N must be even, got {0}")]
    OddTermCount(usize),

    /// The recursion limit in the environment is not a non-negative integer.
    #[error("TERMGEN_MAX_DEPTH is not a non-negative integer: {value:?}")]
    InvalidMaxDepth {
        /// The rejected text.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },
}

impl ConfigError {
    /// Checks if this error comes from the positional arguments, in which
    /// case the usage text is the appropriate response.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::InvalidMaxDepth { .. })
    }
}

/// Validated settings of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of terms to generate. Always positive and even.
    pub term_count: usize,
    /// Approximate length of each term. Always positive.
    pub target_length: usize,
    /// Optional limit on sub-term nesting.
    pub max_depth: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term_count: DEFAULT_TERM_COUNT,
            target_length: DEFAULT_TARGET_LENGTH,
            max_depth: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the command line arguments, excluding the
    /// program name.
    ///
    /// # Errors
    ///
    /// Returns an error unless there are no arguments, or exactly two positive
    /// integers of which the first is even.
    ///
    /// # Examples
    ///
    /// ```
    /// let config = termgen::Config::from_args(["4", "30"]).unwrap();
    /// assert_eq!((config.term_count, config.target_length), (4, 30));
    ///
    /// assert!(termgen::Config::from_args(["3", "30"]).is_err());
    /// ```
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<I::Item> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(Self::default()),
            [count, length] => {
                let term_count = parse_positive("N", count.as_ref())?;
                let target_length = parse_positive("LENGTH", length.as_ref())?;
                if term_count % 2 != 0 {
                    return Err(ConfigError::OddTermCount(term_count));
                }
                Ok(Self {
                    term_count,
                    target_length,
                    max_depth: None,
                })
            }
            other => Err(ConfigError::Arity(other.len())),
        }
    }

    /// Applies the recursion limit read from [`MAX_DEPTH_VAR`], if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a non-negative integer.
    pub fn with_max_depth_var(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        self.max_depth = value
            .map(|value| {
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidMaxDepth {
                        value: value.to_owned(),
                        source,
                    })
            })
            .transpose()?;
        Ok(self)
    }

    /// Number of term pairs announced in the output header.
    pub const fn pair_count(&self) -> usize {
        self.term_count / 2
    }
}

fn parse_positive(name: &'static str, text: &str) -> Result<usize, ConfigError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|source| ConfigError::NotAnInteger {
            name,
            value: text.to_owned(),
            source,
        })?;
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::NotPositive { name, value }),
    }
}
