//! CRC algorithm parameters.
//!
//! This module defines the width-erased parameter set for a CRC, following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! plus a small catalogue of well-known variants with their check values.

use crate::{CrcError, CrcWidth, reflect};

/// Default polynomial for 8-bit CRCs (CRC-8/SMBUS family).
pub const CRC8_POLYNOMIAL: u8 = 0x07;
/// Default polynomial for 16-bit CRCs (CCITT).
pub const CRC16_POLYNOMIAL: u16 = 0x1021;
/// Default polynomial for 32-bit CRCs (IEEE 802.3).
pub const CRC32_POLYNOMIAL: u32 = 0x04C1_1DB7;
/// Default polynomial for 64-bit CRCs (ECMA-182).
pub const CRC64_POLYNOMIAL: u64 = 0x42F0_E1EB_A9EA_3693;

/// CRC algorithm parameters.
///
/// Captures everything needed to define a Rocksoft-model CRC. Values are held
/// in `u64` regardless of width; [`validate`](Self::validate) checks that they
/// fit.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (8, 16, 32, or 64)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the CRC after the final XOR
/// - `xor_out`: Value to XOR with the final CRC
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (8, 16, 32, or 64).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the CRC after the final XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

impl CrcParams {
  /// CRC-8/SMBUS - SMBus packet error checking
  pub const CRC8_SMBUS: Self = Self::new(CrcWidth::Crc8, CRC8_POLYNOMIAL as u64);

  /// CRC-8/MAXIM-DALLAS - 1-Wire, iButton
  pub const CRC8_MAXIM_DALLAS: Self = Self::new(CrcWidth::Crc8, 0x31).with_reflection(true, true);

  /// CRC-16/XMODEM - XMODEM, ZMODEM, CRC-16/CCITT with zero init
  pub const CRC16_XMODEM: Self = Self::new(CrcWidth::Crc16, CRC16_POLYNOMIAL as u64);

  /// CRC-16/GENIBUS - GENIbus, EPC Gen 2 RFID
  pub const CRC16_GENIBUS: Self = Self::new(CrcWidth::Crc16, CRC16_POLYNOMIAL as u64)
    .with_initial(0xFFFF)
    .with_xor_out(0xFFFF);

  /// CRC-16/ARC - Modbus-adjacent legacy protocols, LHA
  pub const CRC16_ARC: Self = Self::new(CrcWidth::Crc16, 0x8005).with_reflection(true, true);

  /// CRC-16/IBM-3740 - aka CRC-16/CCITT-FALSE
  pub const CRC16_IBM_3740: Self = Self::new(CrcWidth::Crc16, CRC16_POLYNOMIAL as u64).with_initial(0xFFFF);

  /// CRC-32/BZIP2 - bzip2, AAL5
  pub const CRC32_BZIP2: Self = Self::new(CrcWidth::Crc32, CRC32_POLYNOMIAL as u64)
    .with_initial(0xFFFF_FFFF)
    .with_xor_out(0xFFFF_FFFF);

  /// CRC-32/MPEG-2 - MPEG transport streams
  pub const CRC32_MPEG2: Self = Self::new(CrcWidth::Crc32, CRC32_POLYNOMIAL as u64).with_initial(0xFFFF_FFFF);

  /// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG
  pub const CRC32_ISO_HDLC: Self = Self::CRC32_BZIP2.with_reflection(true, true);

  /// CRC-32/ISCSI - aka CRC-32C (Castagnoli), iSCSI, ext4, Btrfs
  pub const CRC32_ISCSI: Self = Self::new(CrcWidth::Crc32, 0x1EDC_6F41)
    .with_initial(0xFFFF_FFFF)
    .with_xor_out(0xFFFF_FFFF)
    .with_reflection(true, true);

  /// CRC-64/WE
  pub const CRC64_WE: Self = Self::new(CrcWidth::Crc64, CRC64_POLYNOMIAL)
    .with_initial(u64::MAX)
    .with_xor_out(u64::MAX);

  /// CRC-64/ECMA-182
  pub const CRC64_ECMA_182: Self = Self::new(CrcWidth::Crc64, CRC64_POLYNOMIAL);

  /// CRC-64/XZ - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self::CRC64_WE.with_reflection(true, true);

  /// Parameters with zero initial value, zero final XOR and no reflection.
  #[inline]
  #[must_use]
  pub const fn new(width: CrcWidth, polynomial: u64) -> Self {
    Self {
      width: width.bits() as u8,
      polynomial,
      initial: 0,
      reflect_in: false,
      reflect_out: false,
      xor_out: 0,
    }
  }

  #[inline]
  #[must_use]
  pub const fn with_initial(mut self, initial: u64) -> Self {
    self.initial = initial;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u64) -> Self {
    self.xor_out = xor_out;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_reflection(mut self, reflect_in: bool, reflect_out: bool) -> Self {
    self.reflect_in = reflect_in;
    self.reflect_out = reflect_out;
    self
  }

  /// Check that the width is supported and every value fits it.
  ///
  /// # Errors
  ///
  /// - [`CrcError::InvalidType`] if `width` is not 8, 16, 32 or 64.
  /// - [`CrcError::InvalidArguments`] if `polynomial`, `initial` or `xor_out`
  ///   has bits set above the width.
  pub const fn validate(&self) -> Result<CrcWidth, CrcError> {
    let width = match CrcWidth::from_bits(self.width) {
      Ok(width) => width,
      Err(err) => return Err(err),
    };
    let excess = !width.mask();
    if (self.polynomial | self.initial | self.xor_out) & excess != 0 {
      return Err(CrcError::InvalidArguments);
    }
    Ok(width)
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidType`] if `width` is not supported.
  pub const fn polynomial_reflected(&self) -> Result<u64, CrcError> {
    match CrcWidth::from_bits(self.width) {
      Ok(width) => Ok(reflect(self.polynomial, width)),
      Err(err) => Err(err),
    }
  }
}

/// A named catalogue variant and its check value over `b"123456789"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
  pub name: &'static str,
  pub params: CrcParams,
  pub check: u64,
}

/// Well-known CRC variants.
pub const CATALOGUE: [CatalogEntry; 13] = [
  entry("CRC-8/SMBUS", CrcParams::CRC8_SMBUS, 0xF4),
  entry("CRC-8/MAXIM-DALLAS", CrcParams::CRC8_MAXIM_DALLAS, 0xA1),
  entry("CRC-16/XMODEM", CrcParams::CRC16_XMODEM, 0x31C3),
  entry("CRC-16/GENIBUS", CrcParams::CRC16_GENIBUS, 0xD64E),
  entry("CRC-16/ARC", CrcParams::CRC16_ARC, 0xBB3D),
  entry("CRC-16/IBM-3740", CrcParams::CRC16_IBM_3740, 0x29B1),
  entry("CRC-32/BZIP2", CrcParams::CRC32_BZIP2, 0xFC89_1918),
  entry("CRC-32/MPEG-2", CrcParams::CRC32_MPEG2, 0x0376_E6E7),
  entry("CRC-32/ISO-HDLC", CrcParams::CRC32_ISO_HDLC, 0xCBF4_3926),
  entry("CRC-32/ISCSI", CrcParams::CRC32_ISCSI, 0xE306_9283),
  entry("CRC-64/WE", CrcParams::CRC64_WE, 0x62EC_59E3_F1A4_F00A),
  entry("CRC-64/ECMA-182", CrcParams::CRC64_ECMA_182, 0x6C40_DF5F_0B49_7347),
  entry("CRC-64/XZ", CrcParams::CRC64_XZ, 0x995D_C9BB_DF19_39FA),
];

const fn entry(name: &'static str, params: CrcParams, check: u64) -> CatalogEntry {
  CatalogEntry { name, params, check }
}

/// Look up a catalogue variant by name (ASCII case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
  CATALOGUE.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalogue_params_are_valid() {
    for entry in &CATALOGUE {
      assert!(entry.params.validate().is_ok(), "{}", entry.name);
      assert_eq!(entry.check & !CrcWidth::from_bits(entry.params.width).unwrap().mask(), 0);
    }
  }

  #[test]
  fn validate_rejects_unsupported_width() {
    let params = CrcParams { width: 24, ..CrcParams::CRC32_BZIP2 };
    assert_eq!(params.validate(), Err(CrcError::InvalidType));
    assert_eq!(params.polynomial_reflected(), Err(CrcError::InvalidType));
  }

  #[test]
  fn validate_rejects_oversized_values() {
    let params = CrcParams::new(CrcWidth::Crc8, 0x107);
    assert_eq!(params.validate(), Err(CrcError::InvalidArguments));

    let params = CrcParams::CRC16_XMODEM.with_initial(0x1_0000);
    assert_eq!(params.validate(), Err(CrcError::InvalidArguments));

    let params = CrcParams::CRC32_BZIP2.with_xor_out(0x1_FFFF_FFFF);
    assert_eq!(params.validate(), Err(CrcError::InvalidArguments));
  }

  #[test]
  fn test_crc32c_polynomial_reflected() {
    assert_eq!(CrcParams::CRC32_ISCSI.polynomial_reflected(), Ok(0x82F6_3B78));
  }

  #[test]
  fn test_crc32_polynomial_reflected() {
    assert_eq!(CrcParams::CRC32_ISO_HDLC.polynomial_reflected(), Ok(0xEDB8_8320));
  }

  #[test]
  fn find_is_case_insensitive() {
    assert_eq!(find("crc-32/iso-hdlc").map(|e| e.check), Some(0xCBF4_3926));
    assert!(find("CRC-24/OPENPGP").is_none());
  }
}
