//! Supported CRC register widths.

use core::fmt;

use crate::CrcError;

/// CRC register width.
///
/// The discriminant is the enumeration tag used by width-erased callers;
/// tags at or beyond [`CrcWidth::COUNT`] are rejected with
/// [`CrcError::InvalidType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CrcWidth {
  Crc8 = 0,
  Crc16 = 1,
  Crc32 = 2,
  Crc64 = 3,
}

impl CrcWidth {
  /// Number of supported widths.
  pub const COUNT: u8 = 4;

  /// All widths in tag order.
  pub const ALL: [Self; 4] = [Self::Crc8, Self::Crc16, Self::Crc32, Self::Crc64];

  /// Look up a width by its bit count (8, 16, 32 or 64).
  #[inline]
  pub const fn from_bits(bits: u8) -> Result<Self, CrcError> {
    match bits {
      8 => Ok(Self::Crc8),
      16 => Ok(Self::Crc16),
      32 => Ok(Self::Crc32),
      64 => Ok(Self::Crc64),
      _ => Err(CrcError::InvalidType),
    }
  }

  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::Crc8 => 8,
      Self::Crc16 => 16,
      Self::Crc32 => 32,
      Self::Crc64 => 64,
    }
  }

  #[inline]
  #[must_use]
  pub const fn tag(self) -> u8 {
    self as u8
  }

  /// All-ones value of this width, widened to `u64`.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u64 {
    match self {
      Self::Crc64 => u64::MAX,
      _ => (1u64 << self.bits()) - 1,
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crc8 => "crc8",
      Self::Crc16 => "crc16",
      Self::Crc32 => "crc32",
      Self::Crc64 => "crc64",
    }
  }
}

impl TryFrom<u8> for CrcWidth {
  type Error = CrcError;

  #[inline]
  fn try_from(tag: u8) -> Result<Self, CrcError> {
    match tag {
      0 => Ok(Self::Crc8),
      1 => Ok(Self::Crc16),
      2 => Ok(Self::Crc32),
      3 => Ok(Self::Crc64),
      _ => Err(CrcError::InvalidType),
    }
  }
}

impl fmt::Display for CrcWidth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
