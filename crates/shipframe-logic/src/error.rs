//! Error taxonomy for blueprint generation.
//!
//! Generation is all-or-nothing: any error aborts with no partial blueprint.
//! There are no retries — the pipeline is deterministic per seed, so a
//! failure reproduces identically; recovery means different settings or a
//! different seed.

use std::fmt;

/// A settings problem: unknown option, bad value kind, or inconsistent bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Option name not in the recognized set.
    UnknownOption(String),
    /// Option exists but the supplied value has the wrong kind.
    WrongKind {
        option: String,
        expected: &'static str,
    },
    /// A min bound exceeds its max counterpart.
    BoundsReversed {
        option: &'static str,
        min: f64,
        max: f64,
    },
    /// Ring distances must be strictly positive.
    NonPositiveDistance(f64),
    /// At least one ring is required.
    NoCircles,
    /// Key pool too small to guarantee thruster coverage.
    KeyPoolTooSmall(usize),
    /// Key pool contains a repeated symbol.
    DuplicateKeySymbol(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(name) => write!(f, "Unknown option: {}", name),
            ConfigError::WrongKind { option, expected } => {
                write!(f, "Option {} expects a {} value", option, expected)
            }
            ConfigError::BoundsReversed { option, min, max } => {
                write!(f, "Option {}: min {} exceeds max {}", option, min, max)
            }
            ConfigError::NonPositiveDistance(d) => {
                write!(f, "Circle distance must be positive, got {}", d)
            }
            ConfigError::NoCircles => write!(f, "At least one circle is required"),
            ConfigError::KeyPoolTooSmall(n) => {
                write!(f, "Key pool needs at least 4 symbols, got {}", n)
            }
            ConfigError::DuplicateKeySymbol(c) => {
                write!(f, "Key pool repeats symbol '{}'", c)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The random source was queried with an empty range (`hi < lo`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeError {
    pub lo: f64,
    pub hi: f64,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Empty random range: lo {} exceeds hi {}", self.lo, self.hi)
    }
}

impl std::error::Error for RangeError {}

/// Any failure of a generation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    Config(ConfigError),
    Range(RangeError),
    /// Hull input had fewer than 3 distinct points, or all points collinear.
    DegenerateHull { distinct_points: usize },
}

impl From<ConfigError> for GenError {
    fn from(e: ConfigError) -> Self {
        GenError::Config(e)
    }
}

impl From<RangeError> for GenError {
    fn from(e: RangeError) -> Self {
        GenError::Range(e)
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Config(e) => write!(f, "Configuration error: {}", e),
            GenError::Range(e) => write!(f, "Range error: {}", e),
            GenError::DegenerateHull { distinct_points } => {
                write!(
                    f,
                    "Degenerate hull input: {} distinct points",
                    distinct_points
                )
            }
        }
    }
}

impl std::error::Error for GenError {}
