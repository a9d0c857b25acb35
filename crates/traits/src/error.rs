//! Error types shared by hash engines.
//!
//! Both errors are opaque and zero-sized. Engine crates define richer
//! errors for construction and convert from these where needed.

use core::fmt;

/// MAC verification failed.
///
/// Returned when a computed tag does not match the expected one. It carries
/// no detail about where the mismatch occurred.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn check(tag: &[u8], expected: &[u8]) -> Result<(), VerificationError> {
///   if tag == expected { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(check(&[1, 2], &[1, 3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// The hasher cannot be returned to its initial state.
///
/// Keyed engines absorb the key into the chaining state during construction
/// and drop it afterwards, so the keyed initial state cannot be rebuilt.
/// Construct a fresh hasher with the key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ResetError;

impl ResetError {
  /// Create a new reset error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ResetError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ResetError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("keyed hasher cannot be reset: key material is not retained")
  }
}

impl core::error::Error for ResetError {}
