//! BLAKE2b errors.

use core::fmt;

use traits::ResetError;

use super::{MAX_KEY_LEN, MAX_OUTPUT_LEN, PERSONAL_LEN, SALT_LEN};

/// Errors returned by BLAKE2b construction and state transitions.
///
/// Construction errors are raised synchronously before any state exists;
/// nothing is retried. Build a fresh hasher after handling one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// Requested digest length is outside `1..=64`.
  InvalidOutputSize {
    /// The rejected length.
    requested: usize,
  },
  /// Key is longer than 64 bytes.
  KeyTooLarge {
    /// The rejected key length.
    len: usize,
  },
  /// Salt is longer than 16 bytes.
  SaltTooLarge {
    /// The rejected salt length.
    len: usize,
  },
  /// Personalization string is longer than 16 bytes.
  PersonalizationTooLarge {
    /// The rejected personalization length.
    len: usize,
  },
  /// Finalization was attempted on a state whose last-block flag is already set.
  DoubleFinalize,
  /// Reset was requested on a keyed hasher.
  UnsupportedReset,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidOutputSize { requested } => {
        write!(f, "blake2b: output size {requested} is outside 1..={MAX_OUTPUT_LEN}")
      }
      Self::KeyTooLarge { len } => write!(f, "blake2b: key of {len} bytes exceeds {MAX_KEY_LEN}"),
      Self::SaltTooLarge { len } => write!(f, "blake2b: salt of {len} bytes exceeds {SALT_LEN}"),
      Self::PersonalizationTooLarge { len } => {
        write!(f, "blake2b: personalization of {len} bytes exceeds {PERSONAL_LEN}")
      }
      Self::DoubleFinalize => f.write_str("blake2b: tried to finalize but last-block flag already set"),
      Self::UnsupportedReset => f.write_str("blake2b: keyed hasher cannot be reset without the key"),
    }
  }
}

impl core::error::Error for Error {}

impl From<ResetError> for Error {
  #[inline]
  fn from(_: ResetError) -> Self {
    Self::UnsupportedReset
  }
}
