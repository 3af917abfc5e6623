//! Colors specified with red, green and blue bytes, with or without opacity.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Alpha, Color, HasModel, Model},
    error::FormatError,
    parse::{fraction, function_args, integer},
};

tinct_macros::gen_model! {
    /// A color specified with red, green and blue bytes.
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl FromStr for Rgb {
    type Err = FormatError;

    /// Parse the `rgb(R,G,B)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Rgb, 3)?;
        Ok(Self::new(
            integer(&args[0], Model::Rgb)?,
            integer(&args[1], Model::Rgb)?,
            integer(&args[2], Model::Rgb)?,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An [`Rgb`] color with an opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The color channels.
    pub rgb: Rgb,
    /// The opacity of the color in [0, 1].
    pub alpha: Alpha,
}

impl Rgba {
    /// Create a new color from an [`Rgb`] and an opacity.
    pub const fn new(rgb: Rgb, alpha: Alpha) -> Self {
        Self { rgb, alpha }
    }

    /// The red channel of the color.
    pub const fn red(&self) -> u8 {
        self.rgb.red
    }

    /// The green channel of the color.
    pub const fn green(&self) -> u8 {
        self.rgb.green
    }

    /// The blue channel of the color.
    pub const fn blue(&self) -> u8 {
        self.rgb.blue
    }
}

impl HasModel for Rgba {
    const MODEL: Model = Model::Rgba;
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Color::Rgba(value)
    }
}

impl FromStr for Rgba {
    type Err = FormatError;

    /// Parse the `rgba(R,G,B,A)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Rgba, 4)?;
        let rgb = Rgb::new(
            integer(&args[0], Model::Rgba)?,
            integer(&args[1], Model::Rgba)?,
            integer(&args[2], Model::Rgba)?,
        );
        Ok(Self::new(rgb, fraction(&args[3], Model::Rgba)?))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.2})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha
        )
    }
}

impl TryFrom<&str> for Rgba {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
