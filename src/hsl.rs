//! Model a color with the HSL notation, with or without opacity.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Alpha, Color, HasModel, Model},
    error::FormatError,
    parse::{fraction, function_args, integer, percent},
};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue of the color in degrees. Not wrapped, anything from 360
        /// up is kept as is.
        hue: u32,
        /// The saturation of the color in percent.
        saturation: u32,
        /// The lightness of the color in percent.
        lightness: u32,
    }
}

impl FromStr for Hsl {
    type Err = FormatError;

    /// Parse the `hsl(H,S%,L%)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Hsl, 3)?;
        Ok(Self::new(
            integer(&args[0], Model::Hsl)?,
            percent(&args[1], Model::Hsl)?,
            percent(&args[2], Model::Hsl)?,
        ))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl TryFrom<&str> for Hsl {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An [`Hsl`] color with an opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    /// The color channels.
    pub hsl: Hsl,
    /// The opacity of the color in [0, 1].
    pub alpha: Alpha,
}

impl Hsla {
    /// Create a new color from an [`Hsl`] and an opacity.
    pub const fn new(hsl: Hsl, alpha: Alpha) -> Self {
        Self { hsl, alpha }
    }

    /// The hue of the color in degrees.
    pub const fn hue(&self) -> u32 {
        self.hsl.hue
    }

    /// The saturation of the color in percent.
    pub const fn saturation(&self) -> u32 {
        self.hsl.saturation
    }

    /// The lightness of the color in percent.
    pub const fn lightness(&self) -> u32 {
        self.hsl.lightness
    }
}

impl HasModel for Hsla {
    const MODEL: Model = Model::Hsla;
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Color::Hsla(value)
    }
}

impl FromStr for Hsla {
    type Err = FormatError;

    /// Parse the `hsla(H,S%,L%,A)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Hsla, 4)?;
        let hsl = Hsl::new(
            integer(&args[0], Model::Hsla)?,
            percent(&args[1], Model::Hsla)?,
            percent(&args[2], Model::Hsla)?,
        );
        Ok(Self::new(hsl, fraction(&args[3], Model::Hsla)?))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {:.2})",
            self.hue(),
            self.saturation(),
            self.lightness(),
            self.alpha
        )
    }
}

impl TryFrom<&str> for Hsla {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_alpha_eq;

    #[test]
    fn parse_hsl() {
        assert_eq!("hsl(0,100%,50%)".parse::<Hsl>(), Ok(Hsl::new(0, 100, 50)));
        assert_eq!(
            "hsl(120, 100%, 50%)".parse::<Hsl>(),
            Ok(Hsl::new(120, 100, 50))
        );
        // Hue is not wrapped.
        assert_eq!("hsl(400,0%,0%)".parse::<Hsl>(), Ok(Hsl::new(400, 0, 0)));
    }

    #[test]
    fn reject_bad_hsl() {
        assert!("hsl(0,100,50)".parse::<Hsl>().is_err());
        assert!("hsl(0,100%)".parse::<Hsl>().is_err());
        assert!("hsl(0,101%,50%)".parse::<Hsl>().is_err());
        assert!("hsl(-10,10%,50%)".parse::<Hsl>().is_err());
        assert_eq!(
            "hsv(0,100%,50%)".parse::<Hsl>(),
            Err(FormatError::Notation {
                model: Model::Hsl,
                found: "hsv(0,100%,50%)".to_string()
            })
        );
    }

    #[test]
    fn format_hsl() {
        assert_eq!(Hsl::new(120, 100, 50).to_string(), "hsl(120, 100%, 50%)");
    }

    #[test]
    fn hsl_round_trip() {
        for hue in (0..360).step_by(7) {
            for saturation in (0..=100).step_by(10) {
                for lightness in [0, 1, 49, 50, 99, 100] {
                    let hsl = Hsl::new(hue, saturation, lightness);
                    assert_eq!(hsl.to_string().parse::<Hsl>(), Ok(hsl));
                }
            }
        }
    }

    #[test]
    fn parse_hsla() {
        let hsla: Hsla = "hsla(120,100%,50%,0.5)".parse().unwrap();
        assert_eq!(hsla.hsl, Hsl::new(120, 100, 50));
        assert_alpha_eq!(hsla.alpha, 0.5);

        assert!("hsla(120,100%,50%)".parse::<Hsla>().is_err());
        assert!("hsla(120,100%,50%,50%)".parse::<Hsla>().is_err());
    }

    #[test]
    fn format_hsla() {
        let hsla = Hsla::new(Hsl::new(0, 100, 50), 0.75);
        assert_eq!(hsla.to_string(), "hsla(0, 100%, 50%, 0.75)");
    }

    #[test]
    fn hsla_round_trip() {
        let hsla = Hsla::new(Hsl::new(200, 40, 60), 0.25);
        let parsed: Hsla = hsla.to_string().parse().unwrap();
        assert_eq!(parsed.hsl, hsla.hsl);
        assert_alpha_eq!(parsed.alpha, hsla.alpha);
    }

    #[test]
    fn forwarded_channels() {
        let hsla = Hsla::new(Hsl::new(10, 20, 30), 1.0);
        assert_eq!(
            (hsla.hue(), hsla.saturation(), hsla.lightness()),
            (10, 20, 30)
        );
    }
}
