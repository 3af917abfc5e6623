//! Colors written as hexadecimal bytes.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{
    color::{Alpha, Color, HasModel, Model},
    error::FormatError,
    parse::{hex_byte, hex_digits, strip_spaces},
    Rgb,
};

bitflags! {
    /// Describes how a [`Hex`] color was written.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HexFlags : u8 {
        /// The digits were prefixed with `#`.
        const HASH = 1 << 0;
        /// One digit per channel (`#rgb` or `#rgba`).
        const SHORT = 1 << 1;
        /// The notation includes an alpha channel.
        const ALPHA = 1 << 2;
    }
}

/// A color written in hexadecimal notation.
///
/// The original text is kept as is and is what [`fmt::Display`] prints. The
/// decoded bytes and opacity are derived from it once, at parse time.
#[derive(Clone, Debug, PartialEq)]
pub struct Hex {
    text: String,
    rgb: Rgb,
    alpha: Alpha,
    flags: HexFlags,
}

impl Hex {
    /// The text this color was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The decoded red, green and blue bytes, before opacity is applied.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The decoded opacity, `1.0` when the notation has no alpha digits.
    pub const fn alpha(&self) -> Alpha {
        self.alpha
    }

    /// How the color was written.
    pub const fn flags(&self) -> HexFlags {
        self.flags
    }

    /// Whether the notation carries alpha digits.
    pub const fn has_alpha(&self) -> bool {
        self.flags.contains(HexFlags::ALPHA)
    }
}

/// Decode 3, 4, 6 or 8 hex digits into bytes. The short forms are expanded
/// by duplicating each digit.
fn decode(digits: &str) -> Result<([u8; 4], HexFlags), FormatError> {
    if !digits.is_ascii() {
        return Err(FormatError::HexDigit {
            token: digits.to_string(),
        });
    }

    let (expanded, mut flags) = match digits.len() {
        3 | 4 => (
            digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            HexFlags::SHORT,
        ),
        6 | 8 => (digits.to_string(), HexFlags::empty()),
        _ => {
            log::debug!("rejected hex notation: {digits:?}");
            return Err(FormatError::HexLength {
                found: digits.to_string(),
            });
        }
    };

    let mut bytes = [0, 0, 0, 255];
    for (byte, pair) in bytes.iter_mut().zip(expanded.as_bytes().chunks(2)) {
        // ASCII was checked above, so every pair is valid UTF-8.
        let pair = std::str::from_utf8(pair).map_err(|_| FormatError::HexDigit {
            token: digits.to_string(),
        })?;
        *byte = hex_byte(pair)?;
    }

    if expanded.len() == 8 {
        flags |= HexFlags::ALPHA;
    }

    Ok((bytes, flags))
}

impl FromStr for Hex {
    type Err = FormatError;

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional
    /// and the digits are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = strip_spaces(s);
        let (digits, hash) = match stripped.strip_prefix('#') {
            Some(digits) => (digits, HexFlags::HASH),
            None => (stripped.as_str(), HexFlags::empty()),
        };

        let ([red, green, blue, alpha], flags) = decode(digits)?;

        Ok(Self {
            text: s.to_string(),
            rgb: Rgb::new(red, green, blue),
            alpha: alpha as Alpha / 255.0,
            flags: flags | hash,
        })
    }
}

impl From<Rgb> for Hex {
    /// Write the color as `#rrggbb` in lowercase, fully opaque.
    fn from(rgb: Rgb) -> Self {
        let text = format!(
            "#{}{}{}",
            hex_digits(rgb.red),
            hex_digits(rgb.green),
            hex_digits(rgb.blue)
        );
        Self {
            text,
            rgb,
            alpha: 1.0,
            flags: HexFlags::HASH,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<&str> for Hex {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl HasModel for Hex {
    const MODEL: Model = Model::Hex;
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}
