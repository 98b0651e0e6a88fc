//! Validated product barcodes.
//!
//! Only the shape of the code is checked: digits only, EAN-8 or EAN-13
//! length. Check digits are the scanner's concern and are not verified here.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Digit count of an EAN-8 barcode.
pub const EAN8_LENGTH: usize = 8;
/// Digit count of an EAN-13 barcode.
pub const EAN13_LENGTH: usize = 13;

/// A numeric barcode of a supported length.
///
/// # Examples
/// ```
/// use nutriscan_core::Barcode;
///
/// let barcode = Barcode::parse(" 5000112637922 ").expect("valid EAN-13");
/// assert_eq!(barcode.as_str(), "5000112637922");
/// assert!(Barcode::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Barcode(String);

/// Errors returned by [`Barcode::parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    /// The input was empty after trimming whitespace.
    #[error("barcode must not be empty")]
    Empty,
    /// The input contained something other than ASCII digits.
    #[error("barcode {value:?} must contain digits only")]
    NonNumeric {
        /// Trimmed input that failed validation.
        value: String,
    },
    /// The input had an unsupported number of digits.
    #[error("barcode must have 8 or 13 digits, found {length}")]
    InvalidLength {
        /// Number of digits supplied.
        length: usize,
    },
}

impl Barcode {
    /// Validate and construct a [`Barcode`].
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`BarcodeError`] when the input is empty, not numeric, or not
    /// 8 or 13 digits long.
    pub fn parse(input: &str) -> Result<Self, BarcodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BarcodeError::Empty);
        }
        if !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(BarcodeError::NonNumeric {
                value: trimmed.to_owned(),
            });
        }
        match trimmed.len() {
            EAN8_LENGTH | EAN13_LENGTH => Ok(Self(trimmed.to_owned())),
            length => Err(BarcodeError::InvalidLength { length }),
        }
    }

    /// Borrow the digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether `other` names the same product.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim()
    }
}

impl FromStr for Barcode {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
