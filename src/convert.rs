//! Conversions between the color models.
//!
//! Only RGB has direct formulas to and from HSL, HSV and CMYK. Every other
//! pair of models pivots through RGB, so HSL and HSV never convert to each
//! other directly.
//!
//! Opacity is resolved in one way only: when a color with an opacity is
//! converted to a model without one, its channels are composited over an
//! opaque white backdrop. Converting between models that both carry an
//! opacity keeps it unchanged.
//!
//! ```rust
//! use tinct::{Convert, Hsl, Rgb};
//! let hsl = Rgb::new(255, 0, 0).to_hsl();
//! assert_eq!(hsl, Hsl::new(0, 100, 50));
//! assert_eq!(hsl.to_hex().to_string(), "#ff0000");
//! ```

use crate::{
    color::{Color, Model},
    Cmyk, Hex, Hsl, Hsla, Hsv, Rgb, Rgba,
};

/// Conversion of a color value to each of the supported models.
///
/// Only [`Convert::to_rgb`] is required; the other conversions pivot
/// through RGB unless a model overrides them.
pub trait Convert {
    /// Convert to RGB, compositing over white if the color has an opacity.
    fn to_rgb(&self) -> Rgb;

    /// Convert to RGBA.
    fn to_rgba(&self) -> Rgba {
        Rgba::new(self.to_rgb(), 1.0)
    }

    /// Convert to the `#rrggbb` hex notation.
    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    /// Convert to HSL.
    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert to HSLA.
    fn to_hsla(&self) -> Hsla {
        self.to_rgba().to_hsla()
    }

    /// Convert to HSV.
    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    /// Convert to CMYK.
    fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }
}

impl Convert for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self).into()
    }

    fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(self).into()
    }

    fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(self).into()
    }
}

impl Convert for Rgba {
    fn to_rgb(&self) -> Rgb {
        util::blend_toward_white(&self.rgb, self.alpha)
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }

    /// The unblended channels are converted and the opacity is kept.
    fn to_hsla(&self) -> Hsla {
        Hsla::new(self.rgb.to_hsl(), self.alpha)
    }
}

impl Convert for Hex {
    /// The decoded bytes composited over white with the decoded opacity.
    fn to_rgb(&self) -> Rgb {
        util::blend_toward_white(&self.rgb(), self.alpha())
    }

    /// The opacity is resolved by [`Convert::to_rgb`], so the result is
    /// always fully opaque.
    fn to_rgba(&self) -> Rgba {
        Rgba::new(self.to_rgb(), 1.0)
    }

    fn to_hex(&self) -> Hex {
        self.clone()
    }
}

impl Convert for Hsl {
    fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(self).into()
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

impl Convert for Hsla {
    fn to_rgb(&self) -> Rgb {
        util::blend_toward_white(&self.hsl.to_rgb(), self.alpha)
    }

    /// The channels are composited over white and the opacity is kept.
    fn to_rgba(&self) -> Rgba {
        Rgba::new(self.to_rgb(), self.alpha)
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }
}

impl Convert for Hsv {
    fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(self).into()
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }
}

impl Convert for Cmyk {
    fn to_rgb(&self) -> Rgb {
        util::cmyk_to_rgb(self).into()
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }
}

macro_rules! dispatch {
    ($color:expr, $method:ident) => {{
        match $color {
            Color::Rgb(c) => c.$method(),
            Color::Rgba(c) => c.$method(),
            Color::Hex(c) => c.$method(),
            Color::Hsl(c) => c.$method(),
            Color::Hsla(c) => c.$method(),
            Color::Hsv(c) => c.$method(),
            Color::Cmyk(c) => c.$method(),
        }
    }};
}

impl Convert for Color {
    fn to_rgb(&self) -> Rgb {
        dispatch!(self, to_rgb)
    }

    fn to_rgba(&self) -> Rgba {
        dispatch!(self, to_rgba)
    }

    fn to_hex(&self) -> Hex {
        dispatch!(self, to_hex)
    }

    fn to_hsl(&self) -> Hsl {
        dispatch!(self, to_hsl)
    }

    fn to_hsla(&self) -> Hsla {
        dispatch!(self, to_hsla)
    }

    fn to_hsv(&self) -> Hsv {
        dispatch!(self, to_hsv)
    }

    fn to_cmyk(&self) -> Cmyk {
        dispatch!(self, to_cmyk)
    }
}

impl Color {
    /// Convert this color from its current model to the specified model.
    pub fn to_model(&self, model: Model) -> Self {
        if self.model() == model {
            return self.clone();
        }

        log::trace!("converting {} to {model}", self.model());

        match model {
            Model::Rgb => self.to_rgb().into(),
            Model::Rgba => self.to_rgba().into(),
            Model::Hex => self.to_hex().into(),
            Model::Hsl => self.to_hsl().into(),
            Model::Hsla => self.to_hsla().into(),
            Model::Hsv => self.to_hsv().into(),
            Model::Cmyk => self.to_cmyk().into(),
        }
    }
}

mod util {
    use num_traits::clamp;

    use crate::{
        color::Alpha,
        math::{self, round_half_up, to_percent, Channels},
        Cmyk, Hsl, Hsv, Rgb,
    };

    pub fn blend_toward_white(rgb: &Rgb, alpha: Alpha) -> Rgb {
        Rgb::new(
            math::blend_toward_white(rgb.red, alpha),
            math::blend_toward_white(rgb.green, alpha),
            math::blend_toward_white(rgb.blue, alpha),
        )
    }

    /// Calculate the hue in degrees from normalized RGB channels and return
    /// it along with the min and max channel values.
    fn rgb_to_hue_with_min_max(from: &Channels) -> (f64, f64, f64) {
        let Channels(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * (((green - blue) / delta) % 6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        (hue, min, max)
    }

    /// Pick the unscaled (red, green, blue) for the 60 degree sextant the hue
    /// falls in. Hues of 360 and above fall through to black.
    fn sextant(hue: u32, c: f64, x: f64) -> Channels {
        match hue {
            0..=59 => Channels(c, x, 0.0),
            60..=119 => Channels(x, c, 0.0),
            120..=179 => Channels(0.0, c, x),
            180..=239 => Channels(0.0, x, c),
            240..=299 => Channels(x, 0.0, c),
            300..=359 => Channels(c, 0.0, x),
            _ => Channels(0.0, 0.0, 0.0),
        }
    }

    /// Round a computed hue to whole degrees. Hues just under 360 round up to
    /// 360 and wrap to 0.
    fn round_hue(hue: f64) -> u32 {
        round_half_up(hue) as u32 % 360
    }

    /// The second largest channel of a hue sextant.
    fn intermediate(hue: u32, chroma: f64) -> f64 {
        chroma * (1.0 - ((hue as f64 / 60.0) % 2.0 - 1.0).abs())
    }

    pub fn rgb_to_hsl(from: &Rgb) -> [u32; 3] {
        let channels = Channels::from_bytes(from.red, from.green, from.blue);
        let (hue, min, max) = rgb_to_hue_with_min_max(&channels);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        [
            round_hue(hue),
            to_percent(saturation),
            to_percent(lightness),
        ]
    }

    /// Out of range results are not clamped, the float to byte cast
    /// saturates them.
    pub fn hsl_to_rgb(from: &Hsl) -> [u8; 3] {
        let saturation = from.saturation as f64 / 100.0;
        let lightness = from.lightness as f64 / 100.0;

        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = intermediate(from.hue, c);
        let m = lightness - c / 2.0;

        let Channels(red, green, blue) = sextant(from.hue, c, x).map(|v| (v + m) * 255.0);

        [
            round_half_up(red) as u8,
            round_half_up(green) as u8,
            round_half_up(blue) as u8,
        ]
    }

    pub fn rgb_to_hsv(from: &Rgb) -> [u32; 3] {
        let channels = Channels::from_bytes(from.red, from.green, from.blue);
        let (hue, min, max) = rgb_to_hue_with_min_max(&channels);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [round_hue(hue), to_percent(saturation), to_percent(max)]
    }

    /// Red and green are truncated, blue is rounded.
    pub fn hsv_to_rgb(from: &Hsv) -> [u8; 3] {
        let saturation = from.saturation as f64 / 100.0;
        let value = from.value as f64 / 100.0;

        let c = value * saturation;
        let x = intermediate(from.hue, c);
        let m = value - c;

        let Channels(red, green, blue) = sextant(from.hue, c, x).map(|v| (v + m) * 255.0);

        [red as u8, green as u8, round_half_up(blue) as u8]
    }

    pub fn rgb_to_cmyk(from: &Rgb) -> [u8; 4] {
        let channels = Channels::from_bytes(from.red, from.green, from.blue);
        let Channels(red, green, blue) = channels;

        let key = 1.0 - channels.max();

        let Channels(cyan, magenta, yellow) = if key == 1.0 {
            Channels(0.0, 0.0, 0.0)
        } else {
            Channels(
                (1.0 - red - key) / (1.0 - key),
                (1.0 - green - key) / (1.0 - key),
                (1.0 - blue - key) / (1.0 - key),
            )
        };

        [cyan, magenta, yellow, key].map(|v| to_percent(v) as u8)
    }

    /// Results are clamped into the byte range after rounding.
    pub fn cmyk_to_rgb(from: &Cmyk) -> [u8; 3] {
        let [cyan, magenta, yellow, key] = from.to_channels().map(|v| v as f64 / 100.0);
        let t = 1.0 - key;

        [cyan, magenta, yellow].map(|v| clamp(round_half_up((1.0 - v) * t * 255.0), 0.0, 255.0) as u8)
    }
}
