//! tinct represents colors in the RGB, RGBA, HEX, HSL, HSLA, HSV and CMYK
//! models, parses and prints the textual notation of each model, and
//! converts between any pair of them.
//!
//! ```rust
//! use tinct::{Color, Convert, Model};
//!
//! let color: Color = "hsla(240, 100%, 50%, 0.8)".parse().unwrap();
//! assert_eq!(color.to_rgb().to_string(), "rgb(51,51,255)");
//! assert_eq!(color.to_model(Model::Cmyk).to_string(), "cmyk(80%,80%,0%,0%)");
//! ```

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod error;
mod hex;
mod hsl;
mod hsv;
mod math;
mod parse;
mod rgb;
#[cfg(feature = "serde")]
mod serialize;

pub use cmyk::Cmyk;
pub use color::{Alpha, Color, HasModel, Model};
pub use convert::Convert;
pub use error::FormatError;
pub use hex::{Hex, HexFlags};
pub use hsl::{Hsl, Hsla};
pub use hsv::Hsv;
pub use rgb::{Rgb, Rgba};
