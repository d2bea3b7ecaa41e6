//! RGB color type
//!
//! `Rgb` is the canonical color value for the engine: three 8-bit channels.
//! Hex strings and `rgb(r,g,b)` literals are parsed into it; every other
//! representation is derived from it.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color as three 8-bit RGB channels.
///
/// This is the storage form of every color in the engine. Values are
/// immutable; conversions and blends always construct a fresh `Rgb`.
///
/// # Example
///
/// ```
/// use color_engine::Rgb;
///
/// let c: Rgb = "#ff8800".parse().unwrap();
/// assert_eq!(c, Rgb::new(255, 136, 0));
/// assert_eq!(c.to_hex(), "#ff8800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// Pure white, `#ffffff`.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from arbitrary integer channel math, saturating each
    /// channel to 0..=255.
    ///
    /// This is the single funnel through which all arithmetic results pass:
    /// out-of-range values are clamped to the nearest displayable value,
    /// never rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use color_engine::Rgb;
    ///
    /// assert_eq!(Rgb::from_clamped(300, -4, 128), Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Format as a lowercase 6-digit hex string with a `#` prefix.
    ///
    /// This is the only hex form the engine emits; shorthand input is
    /// expanded on parse and never round-trips back to 3 digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse an `rgb(r, g, b)` literal.
    ///
    /// The `rgb` prefix is case-insensitive and whitespace is allowed
    /// around each number. Channels must be integers in 0..=255; a value
    /// outside that range is an error here (unlike arithmetic results,
    /// which saturate) because the text is untrusted user input.
    ///
    /// # Example
    ///
    /// ```
    /// use color_engine::Rgb;
    ///
    /// let c = Rgb::parse_rgb_literal("rgb(10, 20, 30)").unwrap();
    /// assert_eq!(c, Rgb::new(10, 20, 30));
    /// assert!(Rgb::parse_rgb_literal("rgb(300, 0, 0)").is_err());
    /// ```
    pub fn parse_rgb_literal(text: &str) -> Result<Self, ParseColorError> {
        let t = text.trim();
        let rest = match t.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("rgb") => &t[3..],
            _ => return Err(ParseColorError::InvalidRgbLiteral),
        };
        let inner = rest
            .trim_start()
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or(ParseColorError::InvalidRgbLiteral)?;

        let mut parts = inner.split(',');
        let mut channels = [0u8; 3];
        for (slot, name) in channels.iter_mut().zip(["red", "green", "blue"]) {
            let part = parts.next().ok_or(ParseColorError::InvalidRgbLiteral)?;
            let value: i64 = part
                .trim()
                .parse()
                .map_err(|_| ParseColorError::InvalidRgbLiteral)?;
            if !(0..=255).contains(&value) {
                return Err(ParseColorError::ChannelOutOfRange {
                    channel: name,
                    value,
                });
            }
            *slot = value as u8;
        }
        if parts.next().is_some() {
            return Err(ParseColorError::InvalidRgbLiteral);
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_engine::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::WHITE);
    ///
    /// let red: Rgb = "#f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // The pair slicing below indexes by byte; a multi-byte character
        // whose encoding happens to span 3 or 6 bytes must fail here, not
        // at a char boundary
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        // from_str_radix tolerates a leading sign; the hex grammar does not
        if let Some(i) = s.find(['+', '-']) {
            return Err(match u8::from_str_radix(&s[i..=i], 16) {
                Err(e) => ParseColorError::InvalidHex(e),
                Ok(_) => ParseColorError::InvalidLength,
            });
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
