//! Hex color parsing and formatting.
//!
//! Colors arrive from the hub as `#RRGGBB` strings. [`parse_hex_color`] keeps
//! the permissive behavior of the sketch libraries this crate replaces: it never
//! fails, and a malformed string degrades to whatever a C `strtol` base-16
//! conversion would yield (usually black). [`parse_hex_color_strict`] is the
//! validating alternative used by [`ColorPolicy::Strict`](crate::ColorPolicy).

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

/// Length of a well-formed `#RRGGBB` color string.
pub const HEX_COLOR_LEN: usize = 7;

/// Color validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// The string is not `#` followed by exactly six hex digits.
    InvalidColorFormat,

    /// The string does not fit the stored color buffer.
    ColorTooLong,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::InvalidColorFormat => {
                write!(f, "invalid color format, expected #RRGGBB")
            }
            ColorError::ColorTooLong => {
                write!(f, "color exceeds {} bytes", crate::config::MAX_COLOR_LEN)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Parses a `#RRGGBB` string into 8-bit channels without validation.
///
/// The first byte is skipped unconditionally (it is normally `#`). The
/// rest is read like `strtol(s, NULL, 16)` on a 32-bit `long`: leading
/// whitespace, an optional sign and an optional `0x` prefix are accepted,
/// digits are consumed up to the first non-hex character, and overflow
/// saturates. Channels are taken from bits 16-23, 8-15 and 0-7.
pub fn parse_hex_color(s: &str) -> Srgb<u8> {
    let number = strtol_hex(s.as_bytes().get(1..).unwrap_or_default());

    Srgb::new((number >> 16) as u8, (number >> 8) as u8, number as u8)
}

/// Parses a `#RRGGBB` string, rejecting anything else.
pub fn parse_hex_color_strict(s: &str) -> Result<Srgb<u8>, ColorError> {
    let digits = s
        .strip_prefix('#')
        .filter(|d| d.len() == HEX_COLOR_LEN - 1)
        .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or(ColorError::InvalidColorFormat)?;

    // All six bytes are ASCII hex digits, so the radix parse cannot fail.
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

    Ok(Srgb::new(channel(0), channel(2), channel(4)))
}

/// Formats a color as an uppercase `#RRGGBB` string.
pub fn format_hex_color(color: Srgb<u8>) -> String<HEX_COLOR_LEN> {
    let mut out = String::new();
    // Seven bytes always fit.
    let _ = write!(out, "#{:02X}{:02X}{:02X}", color.red, color.green, color.blue);
    out
}

fn strtol_hex(s: &[u8]) -> i32 {
    let start = s
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(s.len());
    let mut bytes = &s[start..];

    let negative = match bytes.first() {
        Some(b'-') => {
            bytes = &bytes[1..];
            true
        }
        Some(b'+') => {
            bytes = &bytes[1..];
            false
        }
        _ => false,
    };

    // A bare "0x" with no digits after it parses as the single digit 0.
    if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        bytes = &bytes[2..];
    }

    let mut magnitude: u32 = 0;
    let mut overflow = false;
    for digit in bytes.iter().map_while(|b| (*b as char).to_digit(16)) {
        match magnitude.checked_mul(16).and_then(|m| m.checked_add(digit)) {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
    }

    if negative {
        if overflow || magnitude > i32::MAX as u32 + 1 {
            i32::MIN
        } else {
            (magnitude as i64).wrapping_neg() as i32
        }
    } else if overflow || magnitude > i32::MAX as u32 {
        i32::MAX
    } else {
        magnitude as i32
    }
}
