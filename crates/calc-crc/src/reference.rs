//! Bitwise reference implementation.
//!
//! The canonical "source of truth" for CRC computation. Processes one bit at a
//! time with no lookup table, using the Rocksoft parameter set. The final XOR
//! is applied to the register before output reflection:
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16, 32, 64) |
//! | `poly`    | Generator polynomial (normal form) |
//! | `init`    | Initial register value |
//! | `refin`   | Reflect input bytes |
//! | `refout`  | Reflect the result after the final XOR |
//! | `xorout`  | Final XOR value |
//!
//! The table kernel must produce identical results. This module also backs the
//! [`Kernel::Reference`](crate::Kernel::Reference) engine kernel.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{CrcError, CrcParams, CrcWidth};

/// Reflect the lower `bits` bits of `value`, one bit at a time.
#[must_use]
pub const fn reflect_bits(value: u64, bits: u32) -> u64 {
  let mut result = 0u64;
  let mut i = 0u32;
  while i < bits {
    if (value >> i) & 1 != 0 {
      result |= 1 << (bits - 1 - i);
    }
    i += 1;
  }
  result
}

/// Advance a raw (pre-adjustment) register over `data`, bit by bit.
///
/// `crc` and `polynomial` are interpreted in the low `width` bits.
#[must_use]
pub const fn update_bitwise(width: CrcWidth, polynomial: u64, crc: u64, data: &[u8], reflect_in: bool) -> u64 {
  let bits = width.bits();
  let mask = width.mask();
  let top = 1u64 << (bits - 1);

  let mut crc = crc & mask;
  let mut i = 0usize;
  while i < data.len() {
    let byte = if reflect_in {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    crc ^= (byte as u64) << (bits - 8);
    let mut bit = 0u32;
    while bit < 8 {
      crc = if crc & top != 0 {
        ((crc << 1) ^ polynomial) & mask
      } else {
        (crc << 1) & mask
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Full bitwise CRC of `data` under `params`.
///
/// # Errors
///
/// Whatever [`CrcParams::validate`] reports for `params`.
pub fn crc_bitwise(params: &CrcParams, data: &[u8]) -> Result<u64, CrcError> {
  let width = params.validate()?;
  let mut crc = update_bitwise(width, params.polynomial, params.initial, data, params.reflect_in) ^ params.xor_out;
  if params.reflect_out {
    crc = reflect_bits(crc, width.bits());
  }
  Ok(crc)
}
