//! Helpers shared by the notation parsers.
//!
//! Every notation is matched after all spaces are removed, so
//! `hsl( 120 , 50% , 50% )` and `hsl(120,50%,50%)` are the same.

use std::str::FromStr;

use crate::{color::Alpha, color::Model, error::FormatError};

/// Remove every space from the text.
pub fn strip_spaces(text: &str) -> String {
    text.replace(' ', "")
}

/// Split `name(a,b,c)` into its components, checking the function name of
/// the model and the number of components.
pub fn function_args(text: &str, model: Model, arity: usize) -> Result<Vec<String>, FormatError> {
    let text = strip_spaces(text);

    let args = text
        .strip_prefix(model.name())
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            log::debug!("rejected {model} notation: {text:?}");
            FormatError::Notation {
                model,
                found: text.clone(),
            }
        })?;

    let args = args.split(',').map(str::to_string).collect::<Vec<_>>();
    if args.len() != arity {
        log::debug!(
            "rejected {model} notation: {} components instead of {arity}",
            args.len()
        );
        return Err(FormatError::Arity {
            model,
            expected: arity,
            found: args.len(),
        });
    }

    Ok(args)
}

fn component_error(model: Model, token: &str) -> FormatError {
    log::debug!("rejected {model} component: {token:?}");
    FormatError::Component {
        model,
        token: token.to_string(),
    }
}

/// Read a plain unsigned integer. Signs are not accepted.
pub fn integer<T: FromStr>(token: &str, model: Model) -> Result<T, FormatError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(component_error(model, token));
    }
    token.parse().map_err(|_| component_error(model, token))
}

/// Read an integer percentage in [0, 100] that is written without a `%`
/// suffix.
pub fn bare_percent<T>(token: &str, model: Model) -> Result<T, FormatError>
where
    T: FromStr + PartialOrd + From<u8>,
{
    let value = integer::<T>(token, model)?;
    if value > T::from(100) {
        return Err(component_error(model, token));
    }
    Ok(value)
}

/// Read an integer percentage in [0, 100] followed by `%`.
pub fn percent<T>(token: &str, model: Model) -> Result<T, FormatError>
where
    T: FromStr + PartialOrd + From<u8>,
{
    let digits = token
        .strip_suffix('%')
        .ok_or_else(|| component_error(model, token))?;
    bare_percent(digits, model).map_err(|_| component_error(model, token))
}

/// Read an opacity written as a decimal fraction in [0, 1].
pub fn fraction(token: &str, model: Model) -> Result<Alpha, FormatError> {
    // Rejects the words `inf` and `NaN` that float parsing would accept.
    if !token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return Err(component_error(model, token));
    }

    match token.parse::<Alpha>() {
        Ok(alpha) if (0.0..=1.0).contains(&alpha) => Ok(alpha),
        _ => Err(component_error(model, token)),
    }
}

/// Decode two hex digits into a byte.
pub fn hex_byte(digits: &str) -> Result<u8, FormatError> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        log::debug!("rejected hex component: {digits:?}");
        return Err(FormatError::HexDigit {
            token: digits.to_string(),
        });
    }
    u8::from_str_radix(digits, 16).map_err(|_| FormatError::HexDigit {
        token: digits.to_string(),
    })
}

/// Encode a byte as two lowercase hex digits.
pub fn hex_digits(byte: u8) -> String {
    format!("{byte:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_are_removed() {
        assert_eq!(strip_spaces(" rgb( 1, 2 ,3 ) "), "rgb(1,2,3)");
    }

    #[test]
    fn split_function_args() {
        assert_eq!(
            function_args("rgb(1, 2, 3)", Model::Rgb, 3).unwrap(),
            ["1", "2", "3"]
        );
        assert_eq!(
            function_args("rgba(1,2,3)", Model::Rgb, 3).unwrap_err(),
            FormatError::Notation {
                model: Model::Rgb,
                found: "rgba(1,2,3)".to_string()
            }
        );
        assert_eq!(
            function_args("rgb(1,2", Model::Rgb, 3).unwrap_err().model(),
            Model::Rgb
        );
        assert_eq!(
            function_args("rgb(1,2)", Model::Rgb, 3).unwrap_err(),
            FormatError::Arity {
                model: Model::Rgb,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn integers() {
        assert_eq!(integer::<u8>("255", Model::Rgb), Ok(255));
        assert!(integer::<u8>("256", Model::Rgb).is_err());
        assert!(integer::<u8>("-1", Model::Rgb).is_err());
        assert!(integer::<u8>("+1", Model::Rgb).is_err());
        assert!(integer::<u8>("", Model::Rgb).is_err());
        assert!(integer::<u32>("1.5", Model::Hsl).is_err());
        assert_eq!(integer::<u32>("720", Model::Hsl), Ok(720));
    }

    #[test]
    fn percents() {
        assert_eq!(percent::<u32>("50%", Model::Hsl), Ok(50));
        assert_eq!(percent::<u8>("100%", Model::Cmyk), Ok(100));
        assert_eq!(
            percent::<u8>("101%", Model::Cmyk),
            Err(FormatError::Component {
                model: Model::Cmyk,
                token: "101%".to_string()
            })
        );
        assert!(percent::<u32>("50", Model::Hsl).is_err());
        assert!(percent::<u32>("%", Model::Hsl).is_err());
        assert_eq!(bare_percent::<u32>("100", Model::Hsv), Ok(100));
        assert!(bare_percent::<u32>("100%", Model::Hsv).is_err());
    }

    #[test]
    fn fractions() {
        assert_eq!(fraction("0.5", Model::Rgba), Ok(0.5));
        assert_eq!(fraction("1", Model::Rgba), Ok(1.0));
        assert_eq!(fraction(".25", Model::Rgba), Ok(0.25));
        assert!(fraction("1.5", Model::Rgba).is_err());
        assert!(fraction("-0.1", Model::Rgba).is_err());
        assert!(fraction("NaN", Model::Rgba).is_err());
        assert!(fraction("inf", Model::Rgba).is_err());
        assert!(fraction("", Model::Rgba).is_err());
    }

    #[test]
    fn hex_codec() {
        assert_eq!(hex_byte("ff"), Ok(255));
        assert_eq!(hex_byte("A0"), Ok(160));
        assert_eq!(hex_byte("0f"), Ok(15));
        assert_eq!(
            hex_byte("g0"),
            Err(FormatError::HexDigit {
                token: "g0".to_string()
            })
        );
        assert!(hex_byte("+f").is_err());
        assert_eq!(hex_digits(0), "00");
        assert_eq!(hex_digits(171), "ab");
    }
}
