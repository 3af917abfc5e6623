//! Serde support. Every value is written as its canonical notation string
//! and read back with the parser of its model.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cmyk, Color, Hex, Hsl, Hsla, Hsv, Rgb, Rgba};

macro_rules! impl_serde_as_notation {
    ($($model:ty),* $(,)?) => {$(
        impl Serialize for $model {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $model {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let string = String::deserialize(deserializer)?;
                Self::from_str(&string).map_err(serde::de::Error::custom)
            }
        }
    )*};
}

impl_serde_as_notation!(Rgb, Rgba, Hex, Hsl, Hsla, Hsv, Cmyk, Color);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_as_notation() {
        let json = serde_json::to_string(&Hsl::new(120, 100, 50)).unwrap();
        assert_eq!(json, r#""hsl(120, 100%, 50%)""#);

        let json = serde_json::to_string(&Cmyk::new(0, 100, 100, 0)).unwrap();
        assert_eq!(json, r#""cmyk(0%,100%,100%,0%)""#);
    }

    #[test]
    fn deserialize_from_notation() {
        let rgb: Rgb = serde_json::from_str(r#""rgb(1, 2, 3)""#).unwrap();
        assert_eq!(rgb, Rgb::new(1, 2, 3));

        let color: Color = serde_json::from_str(r##""#ABC""##).unwrap();
        assert_eq!(color.to_string(), "#ABC");
    }

    #[test]
    fn deserialize_reports_format_errors() {
        let err = serde_json::from_str::<Rgb>(r#""rgb(1,2)""#).unwrap_err();
        assert!(err.to_string().contains("rgb notation takes 3 components"));
    }
}
