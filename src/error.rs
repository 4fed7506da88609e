// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::layout::InvalidLayoutError;

/// Application-level error.
///
/// Only two failure classes exist: a bundled asset that cannot be located
/// or decoded at startup (fatal), and degenerate layout input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Asset(String),
    Layout(InvalidLayoutError),
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asset(msg) => write!(f, "Asset Error: {msg}"),
            Error::Layout(err) => write!(f, "Layout Error: {err}"),
            Error::Runtime(msg) => write!(f, "Runtime Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidLayoutError> for Error {
    fn from(err: InvalidLayoutError) -> Self {
        Error::Layout(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_formats_properly() {
        let err = Error::Asset("missing bundled font: fonts/None.ttf".into());
        assert_eq!(
            format!("{}", err),
            "Asset Error: missing bundled font: fonts/None.ttf"
        );
    }

    #[test]
    fn layout_error_wraps_invalid_layout() {
        let err = Error::from(InvalidLayoutError::ZeroTotalWeight);
        assert!(matches!(err, Error::Layout(InvalidLayoutError::ZeroTotalWeight)));
        assert!(format!("{}", err).contains("zero"));
    }
}
