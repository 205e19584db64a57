//! Types shared by the scanner and its consumers, mostly in an auxiliary
//! fashion to support (better) error reporting.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A Location simply consists of a line and column position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_structs,
    reason = "Locations are always line+col - if we ever switch to offset-based locations, this is a breaking change."
)]
pub struct Location {
    /// Line of the location, 1-indexed.
    pub line: usize,
    /// Column of the location, 1-indexed and counted in characters.
    pub col: usize,
}

impl Location {
    /// The position of the very first character of any source text.
    pub const START: Location = Location { line: 1, col: 1 };
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Source Spans define locations of elements in the source code.
/// `start` is the location of the first character, `end` the location
/// directly after the last one, so an empty span has `start == end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive] // Filename might be added.
pub struct Span {
    /// Start of the Span
    pub start: Location,
    /// End of the Span
    pub end: Location,
}

impl Span {
    /// Construct a source span from given start and end positions
    #[must_use]
    pub const fn from(start: Location, end: Location) -> Self {
        Span { start, end }
    }

    /// A zero-width span at the given location.
    #[must_use]
    pub const fn empty(at: Location) -> Self {
        Span { start: at, end: at }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// The decoded payload of a literal token.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum Literal {
    /// The body of a string literal, quotes stripped. No escape sequences
    /// are processed, the text is taken verbatim.
    String(String),
    /// A number, represented as a double-precision floating point number.
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Literal::String(ref value) => f.write_str(value),
            // Always fixed-point, whole numbers get a `.0` appended.
            Literal::Number(value) => {
                write!(f, "{value}")?;
                if value.is_finite() && value.fract() == 0.0 {
                    f.write_str(".0")?;
                }
                Ok(())
            }
        }
    }
}
