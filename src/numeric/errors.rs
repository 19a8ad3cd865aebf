// ============================================================================
// Numeric Errors
// Error types for reading complex numbers from text
// ============================================================================

use std::fmt;
use std::io;

/// Position of a token within the `re im marker` input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// First token, the real part
    Real,
    /// Second token, the imaginary part
    Imaginary,
    /// Third token, read and discarded
    Marker,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Real => write!(f, "real part"),
            Part::Imaginary => write!(f, "imaginary part"),
            Part::Marker => write!(f, "marker token"),
        }
    }
}

/// Errors that can occur while parsing a complex number.
///
/// Arithmetic never fails; division by zero and overflow follow IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input ended before the given token was read
    MissingToken(Part),
    /// Token was present but is not a number
    InvalidNumber(Part),
    /// Extra tokens after the marker (whole-string parsing only)
    TrailingInput,
    /// Underlying reader failed
    Io(io::ErrorKind),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingToken(part) => {
                write!(f, "unexpected end of input: missing {}", part)
            },
            ParseError::InvalidNumber(part) => {
                write!(f, "invalid input: {} is not a number", part)
            },
            ParseError::TrailingInput => {
                write!(f, "invalid input: unexpected tokens after marker")
            },
            ParseError::Io(kind) => write!(f, "read failed: {}", kind),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err.kind())
    }
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
