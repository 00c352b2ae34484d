//! Status taxonomy for CRC operations.
//!
//! Every failure is local and recoverable by the caller. Argument and width
//! errors are detected before any state is touched; protocol errors have no
//! side effects.

use core::fmt;

/// Error returned by CRC engine operations.
///
/// The successful status is the `Ok` side of `Result`; each variant maps to a
/// stable numeric status code via [`CrcError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// Generic failure (chunk counter overflow, poisoned session lock).
  Error,
  /// A required argument is absent or empty, or a value does not fit the width.
  InvalidArguments,
  /// The width tag or bit count is outside the supported set.
  InvalidType,
  /// `finalize` was called without an active update sequence.
  UpdateNotStarted,
}

impl CrcError {
  /// Numeric status code. `0` is reserved for success.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u8 {
    match self {
      Self::Error => 1,
      Self::InvalidArguments => 2,
      Self::InvalidType => 3,
      Self::UpdateNotStarted => 4,
    }
  }

  /// Inverse of [`code`](Self::code). Returns `None` for `0` and unknown codes.
  #[inline]
  #[must_use]
  pub const fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(Self::Error),
      2 => Some(Self::InvalidArguments),
      3 => Some(Self::InvalidType),
      4 => Some(Self::UpdateNotStarted),
      _ => None,
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Error => "crc operation failed",
      Self::InvalidArguments => "invalid arguments",
      Self::InvalidType => "unsupported crc width",
      Self::UpdateNotStarted => "update sequence not started",
    }
  }
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl core::error::Error for CrcError {}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  const ALL: [CrcError; 4] = [
    CrcError::Error,
    CrcError::InvalidArguments,
    CrcError::InvalidType,
    CrcError::UpdateNotStarted,
  ];

  #[test]
  fn codes_round_trip() {
    for err in ALL {
      assert_eq!(CrcError::from_code(err.code()), Some(err));
    }
    assert_eq!(CrcError::from_code(0), None);
    assert_eq!(CrcError::from_code(5), None);
  }

  #[test]
  fn codes_are_distinct_and_nonzero() {
    for (i, a) in ALL.iter().enumerate() {
      assert_ne!(a.code(), 0);
      for b in &ALL[i + 1..] {
        assert_ne!(a.code(), b.code());
      }
    }
  }

  #[test]
  fn display_message() {
    assert_eq!(CrcError::UpdateNotStarted.to_string(), "update sequence not started");
    assert_eq!(CrcError::InvalidType.to_string(), "unsupported crc width");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + core::error::Error>() {}
    assert_send_sync::<CrcError>();
  }
}
