//! Free-text query classification
//!
//! Decides what a user's search text means before it reaches the
//! catalog: a hex literal, an `rgb(...)` literal, a name substring, or
//! nothing at all. Classification is ordered -- hex wins over rgb wins
//! over name -- and a recognized-but-malformed literal is an error, not
//! a fallthrough to name search (the caller chooses whether to fall
//! back).

use crate::color::{ParseColorError, Rgb};

/// A classified search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The text was a hex color literal.
    Hex(Rgb),
    /// The text was an `rgb(r, g, b)` literal.
    RgbLiteral(Rgb),
    /// Free text, to be matched case-insensitively against catalog names.
    Name(String),
    /// Empty input: no filter at all. Distinct from `Name("")`, which
    /// would substring-match everything for a different reason.
    All,
}

/// Classify free-form search text.
///
/// Rules, in order, on the trimmed text:
///
/// 1. Empty -> [`Query::All`].
/// 2. Starts with `#`, or is exactly 6 ASCII hex digits -> hex literal
///    (the bare form gets its `#` implied). A malformed hex literal is a
///    [`ParseColorError`], not a name query.
/// 3. Starts with `rgb` (case-insensitive) -> `rgb(...)` literal,
///    likewise failing loudly if malformed.
/// 4. Anything else -> a name substring query.
///
/// # Example
///
/// ```
/// use color_engine::{classify, Query, Rgb};
///
/// assert_eq!(classify("#ff0000").unwrap(), Query::Hex(Rgb::new(255, 0, 0)));
/// assert_eq!(classify("red").unwrap(), Query::Name("red".into()));
/// assert_eq!(classify("  ").unwrap(), Query::All);
/// ```
pub fn classify(text: &str) -> Result<Query, ParseColorError> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(Query::All);
    }

    let bare_hex = t.len() == 6 && t.bytes().all(|b| b.is_ascii_hexdigit());
    if t.starts_with('#') || bare_hex {
        return Ok(Query::Hex(t.parse()?));
    }

    if matches!(t.get(..3), Some(prefix) if prefix.eq_ignore_ascii_case("rgb")) {
        return Ok(Query::RgbLiteral(Rgb::parse_rgb_literal(t)?));
    }

    Ok(Query::Name(t.to_string()))
}
