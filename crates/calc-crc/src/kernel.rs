//! Kernel selection and runtime configuration.
//!
//! Two byte-processing kernels exist and always agree:
//!
//! - [`Kernel::Table`]: byte-at-a-time lookup in the per-config table (default)
//! - [`Kernel::Reference`]: bit-at-a-time division, no table
//!
//! The process-wide default can be forced with the `CALC_CRC_FORCE`
//! environment variable (`auto`, `table`, `reference`). It is read once and
//! cached. Without the `std` feature the environment is never consulted.

// SAFETY: Table indexing uses a `u8` index into a 256-entry array.
// Clippy cannot prove this, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::CrcWord;

/// Environment variable consulted for the forced kernel.
pub const FORCE_ENV: &str = "CALC_CRC_FORCE";

/// Byte-processing kernel used by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
  /// Table-driven, one lookup per input byte.
  #[default]
  Table,
  /// Bitwise reference (slow, obviously correct).
  Reference,
}

impl Kernel {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Table => "table",
      Self::Reference => "reference",
    }
  }
}

/// Requested kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcForce {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the table kernel.
  Table,
  /// Force the bitwise reference kernel.
  Reference,
}

impl CrcForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Reference => "reference",
    }
  }

  /// Kernel this request resolves to.
  #[inline]
  #[must_use]
  pub const fn resolve(self) -> Kernel {
    match self {
      Self::Auto | Self::Table => Kernel::Table,
      Self::Reference => Kernel::Reference,
    }
  }
}

/// Effective kernel configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
  /// Requested force mode (env).
  pub requested_force: CrcForce,
  /// Kernel new sessions start with.
  pub effective: Kernel,
}

/// Parse a force value. Unknown or empty values yield `None`.
#[must_use]
pub fn parse_force(value: &str) -> Option<CrcForce> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(CrcForce::Auto);
  }
  if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
    return Some(CrcForce::Table);
  }
  if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
    return Some(CrcForce::Reference);
  }

  None
}

#[cfg(feature = "std")]
fn requested_force() -> CrcForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<CrcForce> = OnceLock::new();
  *FORCE.get_or_init(|| {
    std::env::var(FORCE_ENV)
      .ok()
      .and_then(|value| parse_force(&value))
      .unwrap_or_default()
  })
}

#[cfg(not(feature = "std"))]
fn requested_force() -> CrcForce {
  CrcForce::Auto
}

/// Get the effective kernel configuration.
#[must_use]
pub fn config() -> KernelConfig {
  let requested_force = requested_force();
  KernelConfig {
    requested_force,
    effective: requested_force.resolve(),
  }
}

/// Advance a register over `data` using the forward lookup table.
#[inline]
pub(crate) fn table_update<W: CrcWord>(mut crc: W, data: &[u8], table: &[W; 256], reflect_in: bool) -> W {
  if reflect_in {
    for &byte in data {
      let index = crc.top_byte() ^ byte.reverse_bits();
      crc = crc.shl8() ^ table[usize::from(index)];
    }
  } else {
    for &byte in data {
      let index = crc.top_byte() ^ byte;
      crc = crc.shl8() ^ table[usize::from(index)];
    }
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{CrcWidth, build_table, reference::update_bitwise};

  #[test]
  fn parse_force_accepts_aliases() {
    assert_eq!(parse_force("auto"), Some(CrcForce::Auto));
    assert_eq!(parse_force(" TABLE "), Some(CrcForce::Table));
    assert_eq!(parse_force("portable"), Some(CrcForce::Table));
    assert_eq!(parse_force("Reference"), Some(CrcForce::Reference));
    assert_eq!(parse_force("bitwise"), Some(CrcForce::Reference));
  }

  #[test]
  fn parse_force_rejects_unknown() {
    assert_eq!(parse_force(""), None);
    assert_eq!(parse_force("   "), None);
    assert_eq!(parse_force("simd"), None);
  }

  #[test]
  fn force_resolution() {
    assert_eq!(CrcForce::Auto.resolve(), Kernel::Table);
    assert_eq!(CrcForce::Table.resolve(), Kernel::Table);
    assert_eq!(CrcForce::Reference.resolve(), Kernel::Reference);
  }

  #[test]
  fn config_is_consistent() {
    let cfg = config();
    assert_eq!(cfg.effective, cfg.requested_force.resolve());
  }

  #[test]
  fn table_update_matches_bitwise() {
    let data = b"kernel equivalence over a short but non-trivial buffer";
    for reflect_in in [false, true] {
      let table = build_table(0x1EDC_6F41u32);
      let got = table_update(0xFFFF_FFFFu32, data, &table, reflect_in);
      let want = update_bitwise(CrcWidth::Crc32, 0x1EDC_6F41, 0xFFFF_FFFF, data, reflect_in);
      assert_eq!(u64::from(got), want, "reflect_in={reflect_in}");

      let table = build_table(0x07u8);
      let got = table_update(0u8, data, &table, reflect_in);
      let want = update_bitwise(CrcWidth::Crc8, 0x07, 0, data, reflect_in);
      assert_eq!(u64::from(got), want, "reflect_in={reflect_in}");
    }
  }
}
