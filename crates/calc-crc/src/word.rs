//! Width-specific register words.
//!
//! [`CrcWord`] is implemented for `u8`, `u16`, `u32` and `u64`. It carries the
//! handful of integer operations the table builder and the engine need, so
//! both can be written once and monomorphized per width.

use core::{fmt::Debug, hash::Hash, ops::BitXor};

use crate::{CrcConfig, CrcWidth, WidthConfig};

mod private {
  pub trait Sealed {}
}

/// Unsigned integer type backing a CRC register of a fixed width.
///
/// This trait is sealed; the four supported widths are the only implementors.
pub trait CrcWord:
  Copy + Eq + Hash + Debug + Default + Send + Sync + BitXor<Output = Self> + 'static + private::Sealed
{
  /// Register width represented by this word.
  const WIDTH: CrcWidth;

  /// Truncate a value held in the `u64` accumulator to this width.
  fn from_u64(value: u64) -> Self;

  /// Widen to the `u64` accumulator.
  fn to_u64(self) -> u64;

  /// Reverse the order of all bits in the word.
  fn reflect(self) -> Self;

  #[doc(hidden)]
  fn wrap_config(config: WidthConfig<Self>) -> CrcConfig;

  #[doc(hidden)]
  fn config_ref(config: &CrcConfig) -> Option<&WidthConfig<Self>>;

  #[doc(hidden)]
  fn config_mut(config: &mut CrcConfig) -> Option<&mut WidthConfig<Self>>;

  /// Most significant byte of the register.
  #[inline]
  fn top_byte(self) -> u8 {
    (self.to_u64() >> (Self::WIDTH.bits() - 8)) as u8
  }

  /// Shift the register left by one byte, dropping the bits that leave it.
  #[inline]
  fn shl8(self) -> Self {
    Self::from_u64(self.to_u64() << 8)
  }
}

macro_rules! impl_crc_word {
  ($($ty:ty => $variant:ident),* $(,)?) => {$(
    impl private::Sealed for $ty {}

    impl CrcWord for $ty {
      const WIDTH: CrcWidth = CrcWidth::$variant;

      #[inline]
      fn from_u64(value: u64) -> Self {
        value as $ty
      }

      #[inline]
      fn to_u64(self) -> u64 {
        u64::from(self)
      }

      #[inline]
      fn reflect(self) -> Self {
        self.reverse_bits()
      }

      #[inline]
      fn wrap_config(config: WidthConfig<Self>) -> CrcConfig {
        CrcConfig::$variant(config)
      }

      #[inline]
      fn config_ref(config: &CrcConfig) -> Option<&WidthConfig<Self>> {
        match config {
          CrcConfig::$variant(inner) => Some(inner),
          _ => None,
        }
      }

      #[inline]
      fn config_mut(config: &mut CrcConfig) -> Option<&mut WidthConfig<Self>> {
        match config {
          CrcConfig::$variant(inner) => Some(inner),
          _ => None,
        }
      }
    }
  )*};
}

impl_crc_word! {
  u8 => Crc8,
  u16 => Crc16,
  u32 => Crc32,
  u64 => Crc64,
}
