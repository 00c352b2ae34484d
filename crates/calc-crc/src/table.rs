//! Lookup table construction.
//!
//! Builds the 256-entry table for the forward (MSB-first) byte-at-a-time
//! algorithm. The same table serves every reflection setting: reflection is
//! applied to input bytes and to the output register, never baked in here.

use crate::CrcWord;

/// Compute one table entry: the register after shifting `index` (placed in
/// the top byte) through eight polynomial division steps.
#[inline]
#[must_use]
pub fn table_entry<W: CrcWord>(polynomial: W, index: u8) -> W {
  let bits = W::WIDTH.bits();
  let top = 1u64 << (bits - 1);
  let poly = polynomial.to_u64();

  let mut value = u64::from(index) << (bits - 8);
  for _ in 0..8 {
    value = if value & top != 0 { (value << 1) ^ poly } else { value << 1 };
  }
  // Bits shifted past the width never feed back into the low bits.
  W::from_u64(value)
}

/// Build the full 256-entry lookup table for `polynomial`.
///
/// Pure and deterministic: the same polynomial always yields the same table.
///
/// ```
/// use calc_crc::build_table;
///
/// let table = build_table(0x07u8);
/// assert_eq!(table[0x00], 0x00);
/// assert_eq!(table[0x01], 0x07);
/// ```
#[must_use]
pub fn build_table<W: CrcWord>(polynomial: W) -> [W; 256] {
  core::array::from_fn(|index| table_entry(polynomial, index as u8))
}
