//! Per-width CRC configuration.
//!
//! [`WidthConfig`] holds the caller-visible parameters of one width together
//! with its derived lookup table. [`CrcConfig`] is the tagged union over the
//! four widths that a [`CrcSession`](crate::CrcSession) works with.
//!
//! The table is a cache of the polynomial: it is rebuilt whenever the
//! polynomial changes through [`WidthConfig::set_polynomial`], and again by
//! every session `init`.

use core::fmt;

use crate::{
  CrcError, CrcParams, CrcWidth, CrcWord, Kernel, build_table,
  kernel::table_update,
  reference::update_bitwise,
};

/// Configuration of a CRC with register word `W`.
#[derive(Clone, PartialEq, Eq)]
pub struct WidthConfig<W: CrcWord> {
  polynomial: W,
  /// Register value a new message starts from.
  pub initial_value: W,
  /// Value XORed into the register when producing a result.
  pub final_xor_value: W,
  /// Reflect each input byte before it enters the register.
  pub input_reflected: bool,
  /// Reflect the result after the final XOR.
  pub output_reflected: bool,
  table: [W; 256],
}

pub type Crc8Config = WidthConfig<u8>;
pub type Crc16Config = WidthConfig<u16>;
pub type Crc32Config = WidthConfig<u32>;
pub type Crc64Config = WidthConfig<u64>;

impl<W: CrcWord> WidthConfig<W> {
  /// Configuration for `polynomial` with zero initial value, zero final XOR
  /// and no reflection. The table is built immediately.
  #[must_use]
  pub fn new(polynomial: W) -> Self {
    Self {
      polynomial,
      initial_value: W::default(),
      final_xor_value: W::default(),
      input_reflected: false,
      output_reflected: false,
      table: build_table(polynomial),
    }
  }

  #[must_use]
  pub fn with_initial(mut self, initial_value: W) -> Self {
    self.initial_value = initial_value;
    self
  }

  #[must_use]
  pub fn with_final_xor(mut self, final_xor_value: W) -> Self {
    self.final_xor_value = final_xor_value;
    self
  }

  #[must_use]
  pub fn with_reflection(mut self, input_reflected: bool, output_reflected: bool) -> Self {
    self.input_reflected = input_reflected;
    self.output_reflected = output_reflected;
    self
  }

  #[inline]
  #[must_use]
  pub fn polynomial(&self) -> W {
    self.polynomial
  }

  /// Replace the polynomial and rebuild the table.
  pub fn set_polynomial(&mut self, polynomial: W) {
    self.polynomial = polynomial;
    self.rebuild_table();
  }

  /// Derived lookup table, indexed by byte value.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &[W; 256] {
    &self.table
  }

  /// Recompute the table from the current polynomial.
  pub fn rebuild_table(&mut self) {
    self.table = build_table(self.polynomial);
  }

  #[must_use]
  pub fn params(&self) -> CrcParams {
    CrcParams::new(W::WIDTH, self.polynomial.to_u64())
      .with_initial(self.initial_value.to_u64())
      .with_xor_out(self.final_xor_value.to_u64())
      .with_reflection(self.input_reflected, self.output_reflected)
  }

  /// Advance the raw register `start` (truncated to the width) over `data`.
  #[inline]
  pub(crate) fn process(&self, start: u64, data: &[u8], kernel: Kernel) -> u64 {
    match kernel {
      Kernel::Table => table_update(W::from_u64(start), data, &self.table, self.input_reflected).to_u64(),
      Kernel::Reference => update_bitwise(
        W::WIDTH,
        self.polynomial.to_u64(),
        start,
        data,
        self.input_reflected,
      ),
    }
  }

  /// Turn a raw register into a result: final XOR, then output reflection.
  #[inline]
  pub(crate) fn adjust(&self, raw: u64) -> u64 {
    let mut value = W::from_u64(raw) ^ self.final_xor_value;
    if self.output_reflected {
      value = value.reflect();
    }
    value.to_u64()
  }

  fn from_params_unchecked(params: &CrcParams) -> Self {
    Self::new(W::from_u64(params.polynomial))
      .with_initial(W::from_u64(params.initial))
      .with_final_xor(W::from_u64(params.xor_out))
      .with_reflection(params.reflect_in, params.reflect_out)
  }
}

impl<W: CrcWord> fmt::Debug for WidthConfig<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WidthConfig")
      .field("width", &W::WIDTH)
      .field("polynomial", &self.polynomial)
      .field("initial_value", &self.initial_value)
      .field("final_xor_value", &self.final_xor_value)
      .field("input_reflected", &self.input_reflected)
      .field("output_reflected", &self.output_reflected)
      .finish_non_exhaustive()
  }
}

/// Configuration of any supported width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrcConfig {
  Crc8(Crc8Config),
  Crc16(Crc16Config),
  Crc32(Crc32Config),
  Crc64(Crc64Config),
}

macro_rules! dispatch {
  ($config:expr, $inner:ident => $body:expr) => {
    match $config {
      CrcConfig::Crc8($inner) => $body,
      CrcConfig::Crc16($inner) => $body,
      CrcConfig::Crc32($inner) => $body,
      CrcConfig::Crc64($inner) => $body,
    }
  };
}

impl CrcConfig {
  /// Build a configuration from width-erased parameters.
  ///
  /// # Errors
  ///
  /// Whatever [`CrcParams::validate`] reports.
  pub fn from_params(params: &CrcParams) -> Result<Self, CrcError> {
    Ok(match params.validate()? {
      CrcWidth::Crc8 => Self::Crc8(WidthConfig::from_params_unchecked(params)),
      CrcWidth::Crc16 => Self::Crc16(WidthConfig::from_params_unchecked(params)),
      CrcWidth::Crc32 => Self::Crc32(WidthConfig::from_params_unchecked(params)),
      CrcWidth::Crc64 => Self::Crc64(WidthConfig::from_params_unchecked(params)),
    })
  }

  #[inline]
  #[must_use]
  pub fn width(&self) -> CrcWidth {
    match self {
      Self::Crc8(_) => CrcWidth::Crc8,
      Self::Crc16(_) => CrcWidth::Crc16,
      Self::Crc32(_) => CrcWidth::Crc32,
      Self::Crc64(_) => CrcWidth::Crc64,
    }
  }

  #[must_use]
  pub fn params(&self) -> CrcParams {
    dispatch!(self, c => c.params())
  }

  #[must_use]
  pub fn polynomial(&self) -> u64 {
    dispatch!(self, c => c.polynomial().to_u64())
  }

  #[must_use]
  pub fn initial_value(&self) -> u64 {
    dispatch!(self, c => c.initial_value.to_u64())
  }

  /// Table entry for `index`, widened to `u64`.
  #[must_use]
  pub fn table_entry(&self, index: u8) -> u64 {
    dispatch!(self, c => c.table().get(usize::from(index)).map_or(0, |v| v.to_u64()))
  }

  pub fn rebuild_table(&mut self) {
    dispatch!(self, c => c.rebuild_table());
  }

  /// Typed view of the configuration if it has width `W`.
  #[must_use]
  pub fn as_width<W: CrcWord>(&self) -> Option<&WidthConfig<W>> {
    W::config_ref(self)
  }

  /// Mutable typed view of the configuration if it has width `W`.
  #[must_use]
  pub fn as_width_mut<W: CrcWord>(&mut self) -> Option<&mut WidthConfig<W>> {
    W::config_mut(self)
  }

  #[inline]
  pub(crate) fn process(&self, start: u64, data: &[u8], kernel: Kernel) -> u64 {
    dispatch!(self, c => c.process(start, data, kernel))
  }

  #[inline]
  pub(crate) fn adjust(&self, raw: u64) -> u64 {
    dispatch!(self, c => c.adjust(raw))
  }
}

impl<W: CrcWord> From<WidthConfig<W>> for CrcConfig {
  #[inline]
  fn from(config: WidthConfig<W>) -> Self {
    W::wrap_config(config)
  }
}

impl TryFrom<&CrcParams> for CrcConfig {
  type Error = CrcError;

  fn try_from(params: &CrcParams) -> Result<Self, CrcError> {
    Self::from_params(params)
  }
}
