//! Uppercase hex rendering for byte ranges.

use ::hex::FromHexError;
use thiserror::Error;

/// Errors produced when parsing hex text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Hex text must contain two digits per byte.
    #[error("hex input has odd length {len}")]
    OddLength {
        /// Number of digits supplied.
        len: usize,
    },
    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// Zero-based character offset.
        position: usize,
        /// The offending character.
        digit: char,
    },
}

/// Render `len` bytes starting at `index` as uppercase hex.
///
/// # Panics
///
/// Panics if `index + len` exceeds `bytes.len()`, including when the sum
/// overflows.
///
/// # Examples
///
/// ```
/// use byteutils::hex::to_hex_string;
///
/// assert_eq!(to_hex_string(&[0x00, 0xAB, 0x1F, 0x02], 1, 2), "AB1F");
/// ```
#[must_use]
pub fn to_hex_string(bytes: &[u8], index: usize, len: usize) -> String {
    to_hex(&bytes[index..][..len])
}

/// Render the whole slice as uppercase hex.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String { ::hex::encode_upper(bytes) }

/// Parse hex text into bytes. Both digit cases are accepted.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] if `text` has an odd number of characters.
/// Otherwise returns [`HexError::InvalidDigit`] for the first character that
/// is not a hex digit.
pub fn from_hex(text: &str) -> Result<Vec<u8>, HexError> {
    ::hex::decode(text).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidDigit {
            position: index,
            digit: c,
        },
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            HexError::OddLength { len: text.len() }
        }
    })
}
