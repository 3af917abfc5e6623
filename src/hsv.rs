//! Model a color with the HSV notation.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::Model,
    error::FormatError,
    parse::{bare_percent, function_args, integer},
};

tinct_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue of the color in degrees.
        hue: u32,
        /// The saturation of the color in percent.
        saturation: u32,
        /// The value (brightness) of the color in percent.
        value: u32,
    }
}

impl FromStr for Hsv {
    type Err = FormatError;

    /// Parse the `hsv(H,S,V)` notation. Saturation and value are written
    /// without a `%` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Hsv, 3)?;
        Ok(Self::new(
            integer(&args[0], Model::Hsv)?,
            bare_percent(&args[1], Model::Hsv)?,
            bare_percent(&args[2], Model::Hsv)?,
        ))
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({},{},{})", self.hue, self.saturation, self.value)
    }
}

impl TryFrom<&str> for Hsv {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
