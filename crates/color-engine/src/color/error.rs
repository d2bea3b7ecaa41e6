//! Error types for color parsing
//!
//! A single error kind covers every malformed input the codec can see:
//! bad hex strings and bad `rgb(r,g,b)` literals. All other numeric
//! operations in the engine are total (out-of-range arithmetic saturates
//! instead of failing).

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing color strings.
///
/// Returned when a hex string or an `rgb(r,g,b)` literal fails to parse.
/// Always caused by an external, untrusted string; callers recover by
/// falling back to name search or reporting no match.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// Text does not match the `rgb(r, g, b)` pattern
    InvalidRgbLiteral,
    /// An `rgb(...)` channel is outside the displayable 0..=255 range
    ChannelOutOfRange {
        /// Which channel failed ("red", "green" or "blue")
        channel: &'static str,
        /// The offending value as written
        value: i64,
    },
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::InvalidRgbLiteral => {
                write!(f, "expected an rgb(r, g, b) literal")
            }
            ParseColorError::ChannelOutOfRange { channel, value } => {
                write!(f, "{} channel {} is outside 0..=255", channel, value)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}
