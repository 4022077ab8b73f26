//! Brazilian postal code (CEP) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Cep`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    /// The input had no digits at all.
    #[error("postal code cannot be empty")]
    Empty,
    /// The input did not have exactly eight digits.
    #[error("postal code must have {expected} digits (got {actual})")]
    InvalidLength {
        /// Required digit count.
        expected: usize,
        /// Digits found in the input.
        actual: usize,
    },
}

/// An eight-digit Brazilian postal code.
///
/// Parsing is lenient about punctuation: `01310-100`, `01310100` and
/// `CEP: 01310-100` all parse to the same value. Only the digits are kept.
///
/// ```
/// use atadiesel_core::Cep;
///
/// let cep = Cep::parse("CEP: 01310-100").unwrap();
/// assert_eq!(cep.digits(), "01310100");
/// assert_eq!(cep.to_string(), "01310-100");
/// assert!(Cep::parse("0131").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// Number of digits in a postal code.
    pub const LENGTH: usize = 8;

    /// Parse a `Cep`, discarding every non-digit character.
    ///
    /// # Errors
    ///
    /// Returns an error if the input holds no digits or a digit count other
    /// than eight.
    pub fn parse(s: &str) -> Result<Self, CepError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(CepError::Empty);
        }

        if digits.len() != Self::LENGTH {
            return Err(CepError::InvalidLength {
                expected: Self::LENGTH,
                actual: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// The eight digits without punctuation, as used in lookup URLs.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.0.split_at(5);
        write!(f, "{head}-{tail}")
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = CepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.to_string()
    }
}
