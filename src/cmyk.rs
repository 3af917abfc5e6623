//! Model a color with subtractive cyan, magenta, yellow and key (black) inks.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::Model,
    error::FormatError,
    parse::{function_args, percent},
};

tinct_macros::gen_model! {
    /// A color specified with the CMYK notation. Every channel is an ink
    /// coverage in percent.
    pub struct Cmyk {
        /// The cyan channel.
        cyan: u8,
        /// The magenta channel.
        magenta: u8,
        /// The yellow channel.
        yellow: u8,
        /// The key (black) channel.
        key: u8,
    }
}

impl FromStr for Cmyk {
    type Err = FormatError;

    /// Parse the `cmyk(C%,M%,Y%,K%)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = function_args(s, Model::Cmyk, 4)?;
        Ok(Self::new(
            percent(&args[0], Model::Cmyk)?,
            percent(&args[1], Model::Cmyk)?,
            percent(&args[2], Model::Cmyk)?,
            percent(&args[3], Model::Cmyk)?,
        ))
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%,{}%,{}%,{}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

impl TryFrom<&str> for Cmyk {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            "cmyk(100%,0%,0%,0%)".parse::<Cmyk>(),
            Ok(Cmyk::new(100, 0, 0, 0))
        );
        assert_eq!(
            "cmyk( 1% , 2% , 3% , 4% )".parse::<Cmyk>(),
            Ok(Cmyk::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn reject() {
        assert!("cmyk(100,0,0,0)".parse::<Cmyk>().is_err());
        assert!("cmyk(100%,0%,0%)".parse::<Cmyk>().is_err());
        assert_eq!(
            "cmyk(0%,0%,0%,200%)".parse::<Cmyk>(),
            Err(FormatError::Component {
                model: Model::Cmyk,
                token: "200%".to_string()
            })
        );
    }

    #[test]
    fn format() {
        assert_eq!(Cmyk::new(0, 100, 100, 0).to_string(), "cmyk(0%,100%,100%,0%)");
    }

    #[test]
    fn round_trip() {
        for cyan in (0..=100).step_by(20) {
            for magenta in (0..=100).step_by(25) {
                for yellow in [0, 33, 100] {
                    for key in [0, 1, 50, 100] {
                        let cmyk = Cmyk::new(cyan, magenta, yellow, key);
                        assert_eq!(cmyk.to_string().parse::<Cmyk>(), Ok(cmyk));
                    }
                }
            }
        }
    }

    #[test]
    fn channels() {
        assert_eq!(Cmyk::from([1, 2, 3, 4]).to_channels(), [1, 2, 3, 4]);
    }
}
