//! A [`Color`] holds a value of any of the supported color models.

use std::fmt;
use std::str::FromStr;

use crate::{
    error::FormatError, parse::strip_spaces, Cmyk, Hex, Hsl, Hsla, Hsv, Rgb, Rgba,
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that opacity is stored as.
pub type Alpha = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that opacity is stored as.
pub type Alpha = f64;

/// The color models that have a textual notation in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Model {
    /// Red, green and blue bytes: `rgb(R,G,B)`.
    Rgb = 0,
    /// RGB with an opacity fraction: `rgba(R,G,B,A)`.
    Rgba = 1,
    /// Hexadecimal bytes: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    Hex = 2,
    /// Hue, saturation and lightness: `hsl(H,S%,L%)`.
    Hsl = 3,
    /// HSL with an opacity fraction: `hsla(H,S%,L%,A)`.
    Hsla = 4,
    /// Hue, saturation and value: `hsv(H,S,V)`.
    Hsv = 5,
    /// Subtractive cyan, magenta, yellow and key: `cmyk(C%,M%,Y%,K%)`.
    Cmyk = 6,
}

impl Model {
    /// All the models, in declaration order.
    pub const ALL: [Model; 7] = [
        Model::Rgb,
        Model::Rgba,
        Model::Hex,
        Model::Hsl,
        Model::Hsla,
        Model::Hsv,
        Model::Cmyk,
    ];

    /// The lowercase name of the model, which is also the function name used
    /// by its notation (except for hex).
    pub const fn name(&self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Rgba => "rgba",
            Model::Hex => "hex",
            Model::Hsl => "hsl",
            Model::Hsla => "hsla",
            Model::Hsv => "hsv",
            Model::Cmyk => "cmyk",
        }
    }

    /// Whether values of this model carry an opacity.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Model::Rgba | Model::Hsla)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every value type to name the model it represents.
pub trait HasModel {
    /// The model of the implementing type.
    const MODEL: Model;
}

/// A color value in any of the supported models.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// An [`Rgb`] value.
    Rgb(Rgb),
    /// An [`Rgba`] value.
    Rgba(Rgba),
    /// A [`Hex`] value.
    Hex(Hex),
    /// An [`Hsl`] value.
    Hsl(Hsl),
    /// An [`Hsla`] value.
    Hsla(Hsla),
    /// An [`Hsv`] value.
    Hsv(Hsv),
    /// A [`Cmyk`] value.
    Cmyk(Cmyk),
}

impl Color {
    /// Return the model of the value held by this color.
    pub fn model(&self) -> Model {
        match self {
            Color::Rgb(_) => Rgb::MODEL,
            Color::Rgba(_) => Rgba::MODEL,
            Color::Hex(_) => Hex::MODEL,
            Color::Hsl(_) => Hsl::MODEL,
            Color::Hsla(_) => Hsla::MODEL,
            Color::Hsv(_) => Hsv::MODEL,
            Color::Cmyk(_) => Cmyk::MODEL,
        }
    }

    /// Parse `text` with the grammar of the given model, ignoring the prefix
    /// based detection done by [`FromStr`].
    pub fn parse_as(model: Model, text: &str) -> Result<Self, FormatError> {
        Ok(match model {
            Model::Rgb => text.parse::<Rgb>()?.into(),
            Model::Rgba => text.parse::<Rgba>()?.into(),
            Model::Hex => text.parse::<Hex>()?.into(),
            Model::Hsl => text.parse::<Hsl>()?.into(),
            Model::Hsla => text.parse::<Hsla>()?.into(),
            Model::Hsv => text.parse::<Hsv>()?.into(),
            Model::Cmyk => text.parse::<Cmyk>()?.into(),
        })
    }

    /// Detect the model of a notation from its function name. Anything
    /// without a known function name is treated as hex.
    pub fn detect_model(text: &str) -> Model {
        let text = strip_spaces(text);

        // Longer names first, "rgba(" also starts with "rgb".
        [
            Model::Rgba,
            Model::Rgb,
            Model::Hsla,
            Model::Hsl,
            Model::Hsv,
            Model::Cmyk,
        ]
        .into_iter()
        .find(|model| {
            text.strip_prefix(model.name())
                .is_some_and(|rest| rest.starts_with('('))
        })
        .unwrap_or(Model::Hex)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_as(Self::detect_model(s), s)
    }
}

impl TryFrom<&str> for Color {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => c.fmt(f),
            Color::Rgba(c) => c.fmt(f),
            Color::Hex(c) => c.fmt(f),
            Color::Hsl(c) => c.fmt(f),
            Color::Hsla(c) => c.fmt(f),
            Color::Hsv(c) => c.fmt(f),
            Color::Cmyk(c) => c.fmt(f),
        }
    }
}
