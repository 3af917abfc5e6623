//! Math utility functions.

use num_traits::{clamp, Float};

use crate::color::Alpha;

/// Three normalized channel values, usually red, green and blue in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels(pub f64, pub f64, pub f64);

impl Channels {
    /// Normalize bytes into [0, 1].
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self(r as f64, g as f64, b as f64).map(|v| v / 255.0)
    }

    /// Return new channels with each channel mapped with the given function.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three channels.
    pub fn max(&self) -> f64 {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three channels.
    pub fn min(&self) -> f64 {
        self.0.min(self.1).min(self.2)
    }
}

/// Round to the nearest integer with halves going up (`2.5` -> `3`).
pub fn round_half_up<T: Float>(value: T) -> T {
    (value + T::from(0.5).unwrap_or_else(T::zero)).floor()
}

/// Scale a normalized value to an integer percent, rounding half up.
pub fn to_percent(value: f64) -> u32 {
    round_half_up(value * 100.0) as u32
}

/// Clamp into the byte range and round half up by adding `0.5` before
/// truncating.
pub fn clamp_to_u8<T: Float>(value: T) -> u8 {
    let max = T::from(255.0).unwrap_or_else(T::max_value);
    let value = clamp(value, T::zero(), max);
    (value + T::from(0.5).unwrap_or_else(T::zero))
        .to_u8()
        .unwrap_or(u8::MAX)
}

/// Composite a channel with the given opacity over an opaque white
/// backdrop.
pub fn blend_toward_white(channel: u8, alpha: Alpha) -> u8 {
    let channel = channel as Alpha;
    clamp_to_u8(channel * alpha + 255.0 * (1.0 - alpha))
}
