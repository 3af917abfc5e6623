//! Errors returned when a notation can not be parsed.

use thiserror::Error;

use crate::color::Model;

/// The text given to a parser does not follow the notation of its model.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The function name or the surrounding parentheses are wrong.
    #[error("expected {model} notation, found \"{found}\"")]
    Notation {
        /// The model whose grammar was used.
        model: Model,
        /// The offending text, with spaces removed.
        found: String,
    },

    /// The notation has the wrong number of components.
    #[error("{model} notation takes {expected} components, found {found}")]
    Arity {
        /// The model whose grammar was used.
        model: Model,
        /// Number of components the notation takes.
        expected: usize,
        /// Number of components found.
        found: usize,
    },

    /// A component is not a number, has the wrong suffix or is out of range.
    #[error("invalid {model} component \"{token}\"")]
    Component {
        /// The model whose grammar was used.
        model: Model,
        /// The offending component.
        token: String,
    },

    /// A hex color does not have 3, 4, 6 or 8 digits.
    #[error("invalid hex color length: \"{found}\"")]
    HexLength {
        /// The digits found, without the `#` prefix.
        found: String,
    },

    /// A hex component is not valid base-16.
    #[error("invalid hex component: \"{token}\"")]
    HexDigit {
        /// The offending pair of digits.
        token: String,
    },
}

impl FormatError {
    /// The model whose grammar rejected the text.
    pub fn model(&self) -> Model {
        match self {
            FormatError::Notation { model, .. }
            | FormatError::Arity { model, .. }
            | FormatError::Component { model, .. } => *model,
            FormatError::HexLength { .. } | FormatError::HexDigit { .. } => Model::Hex,
        }
    }
}
