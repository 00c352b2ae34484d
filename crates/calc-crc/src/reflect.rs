//! Bit reflection.
//!
//! Reflection reverses the bit order of a register-sized value. It is applied
//! to input bytes (`input_reflected`) and to the final register
//! (`output_reflected`); the lookup table itself is never reflected.

use crate::CrcWidth;

/// Reverse the order of the low `width` bits of `value`.
///
/// Bits above the width are discarded before reflecting, so the result always
/// fits the width. For a fixed width this is an involution.
///
/// ```
/// use calc_crc::{CrcWidth, reflect};
///
/// assert_eq!(reflect(0x01, CrcWidth::Crc8), 0x80);
/// assert_eq!(reflect(0x1021, CrcWidth::Crc16), 0x8408);
/// assert_eq!(reflect(reflect(0xDEAD_BEEF, CrcWidth::Crc32), CrcWidth::Crc32), 0xDEAD_BEEF);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, width: CrcWidth) -> u64 {
  match width {
    CrcWidth::Crc8 => (value as u8).reverse_bits() as u64,
    CrcWidth::Crc16 => (value as u16).reverse_bits() as u64,
    CrcWidth::Crc32 => (value as u32).reverse_bits() as u64,
    CrcWidth::Crc64 => value.reverse_bits(),
  }
}

/// Reverse the bit order of a single input byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reference::reflect_bits;

  const SAMPLES: [u64; 8] = [
    0,
    1,
    0x80,
    0xA5,
    0x1021,
    0x04C1_1DB7,
    0x42F0_E1EB_A9EA_3693,
    u64::MAX,
  ];

  #[test]
  fn known_values() {
    assert_eq!(reflect(0x80, CrcWidth::Crc8), 0x01);
    assert_eq!(reflect(0xF0, CrcWidth::Crc8), 0x0F);
    assert_eq!(reflect(0x8005, CrcWidth::Crc16), 0xA001);
    assert_eq!(reflect(0x04C1_1DB7, CrcWidth::Crc32), 0xEDB8_8320);
    assert_eq!(reflect(0x1EDC_6F41, CrcWidth::Crc32), 0x82F6_3B78);
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693, CrcWidth::Crc64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn involution_all_widths() {
    for width in CrcWidth::ALL {
      for value in SAMPLES {
        let value = value & width.mask();
        assert_eq!(reflect(reflect(value, width), width), value, "{width} {value:#x}");
      }
    }
  }

  #[test]
  fn ignores_bits_above_width() {
    assert_eq!(reflect(0xFF01, CrcWidth::Crc8), 0x80);
    assert_eq!(reflect(0x1_0000_0001, CrcWidth::Crc32), 0x8000_0000);
  }

  #[test]
  fn matches_bitwise_loop() {
    for width in CrcWidth::ALL {
      for value in SAMPLES {
        assert_eq!(reflect(value, width), reflect_bits(value & width.mask(), width.bits()));
      }
    }
  }

  #[test]
  fn every_byte_round_trips() {
    for b in 0..=u8::MAX {
      assert_eq!(reflect_byte(reflect_byte(b)), b);
      assert_eq!(u64::from(reflect_byte(b)), reflect(u64::from(b), CrcWidth::Crc8));
    }
  }
}
