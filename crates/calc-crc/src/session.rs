//! Computation and update engine.
//!
//! A [`CrcSession`] moves between three states:
//!
//! | State | Meaning |
//! |-------|---------|
//! | Uninitialized | no configuration; every computation is rejected |
//! | Ready | configured, no chunked sequence active |
//! | Accumulating | at least one `update` succeeded since `init`/`finalize` |
//!
//! The running register is kept in a `u64` regardless of width and truncated
//! to the configured width whenever it is used. Only the raw register is
//! carried between chunks. Every processed chunk also produces the adjusted
//! result (final XOR, then output reflection); `finalize` hands out the one
//! computed for the last chunk.

use tracing::{debug, trace};

use crate::{CrcConfig, CrcError, CrcParams, CrcWidth, Kernel, kernel};

/// One independent CRC computation.
///
/// # Example
///
/// ```
/// use calc_crc::{CrcConfig, CrcParams, CrcSession};
///
/// let mut session = CrcSession::new();
/// session.init(CrcConfig::from_params(&CrcParams::CRC32_BZIP2)?);
///
/// let oneshot = session.calculate(b"123456789")?;
/// assert_eq!(oneshot, 0xFC89_1918);
///
/// session.update(b"1234")?;
/// session.update(b"56789")?;
/// assert_eq!(session.finalize()?, oneshot);
/// # Ok::<(), calc_crc::CrcError>(())
/// ```
///
/// Sessions are not synchronized. Wrap one in a lock (see `SharedSession`
/// with the `std` feature) to share it between threads.
#[derive(Clone, Debug)]
pub struct CrcSession {
  config: Option<CrcConfig>,
  kernel: Kernel,
  running_value: u64,
  pending_value: u64,
  finalized_value: u64,
  chunk_counter: usize,
  in_progress: bool,
}

impl CrcSession {
  /// Create an uninitialized session using the process-wide default kernel.
  #[must_use]
  pub fn new() -> Self {
    Self {
      config: None,
      kernel: kernel::config().effective,
      running_value: 0,
      pending_value: 0,
      finalized_value: 0,
      chunk_counter: 0,
      in_progress: false,
    }
  }

  /// Create a session and initialize it with `config`.
  #[must_use]
  pub fn with_config(config: impl Into<CrcConfig>) -> Self {
    let mut session = Self::new();
    session.init(config);
    session
  }

  /// Install `config`, rebuild its table and reset all progress.
  ///
  /// Valid from any state; an active update sequence is discarded.
  pub fn init(&mut self, config: impl Into<CrcConfig>) {
    let mut config = config.into();
    config.rebuild_table();
    debug!(
      width = %config.width(),
      polynomial = config.polynomial(),
      kernel = self.kernel.as_str(),
      "crc session initialized"
    );
    self.config = Some(config);
    self.running_value = 0;
    self.pending_value = 0;
    self.finalized_value = 0;
    self.chunk_counter = 0;
    self.in_progress = false;
  }

  /// Initialize from width-erased parameters.
  ///
  /// # Errors
  ///
  /// - [`CrcError::InvalidType`] for an unsupported width.
  /// - [`CrcError::InvalidArguments`] if a value does not fit the width.
  ///
  /// The session is left untouched on error.
  pub fn init_params(&mut self, params: &CrcParams) -> Result<(), CrcError> {
    let config = CrcConfig::from_params(params)?;
    self.init(config);
    Ok(())
  }

  /// Compute the CRC of `data`.
  ///
  /// Starts from the configured initial value, unless an update sequence is
  /// active: then it continues that sequence as its next chunk. The returned
  /// value always has output reflection and the final XOR applied.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidArguments`] if the session is uninitialized or `data`
  /// is empty; [`CrcError::Error`] if the chunk counter would overflow.
  pub fn calculate(&mut self, data: &[u8]) -> Result<u64, CrcError> {
    self.run(data, true)
  }

  /// Feed the next chunk of a message.
  ///
  /// The first call after `init` or `finalize` starts a new sequence.
  /// Rejected arguments leave the session untouched, so the sequence can go
  /// on with the next valid chunk. A failure while processing the chunk
  /// abandons the sequence; the next `update` starts over.
  ///
  /// # Errors
  ///
  /// Same as [`calculate`](Self::calculate).
  pub fn update(&mut self, data: &[u8]) -> Result<(), CrcError> {
    self.check_input(data)?;

    if !self.in_progress {
      self.running_value = 0;
      self.chunk_counter = 0;
      self.in_progress = true;
    }

    match self.run(data, false) {
      Ok(_) => Ok(()),
      Err(err) => {
        self.abort(err);
        Err(err)
      }
    }
  }

  /// Close the active update sequence and return its CRC.
  ///
  /// The result is the one computed when the last chunk was processed, so
  /// configuration changes made after that chunk do not affect it.
  ///
  /// # Errors
  ///
  /// [`CrcError::UpdateNotStarted`] if no sequence is active; nothing changes.
  pub fn finalize(&mut self) -> Result<u64, CrcError> {
    if !self.in_progress {
      return Err(CrcError::UpdateNotStarted);
    }
    self.in_progress = false;

    let value = self.pending_value;
    self.finalized_value = value;
    debug!(chunks = self.chunk_counter, value, "crc update sequence finalized");
    Ok(value)
  }

  /// Abandon any active update sequence without touching the configuration.
  pub fn reset(&mut self) {
    self.running_value = 0;
    self.pending_value = 0;
    self.chunk_counter = 0;
    self.in_progress = false;
  }

  #[inline]
  #[must_use]
  pub fn width(&self) -> Option<CrcWidth> {
    self.config.as_ref().map(CrcConfig::width)
  }

  #[inline]
  #[must_use]
  pub fn config(&self) -> Option<&CrcConfig> {
    self.config.as_ref()
  }

  /// Mutable access to the configuration.
  ///
  /// Parameter changes apply from the next processed chunk; a pending
  /// `finalize` still returns the result of the last chunk. Changing the
  /// polynomial through [`WidthConfig::set_polynomial`](crate::WidthConfig::set_polynomial)
  /// rebuilds the table.
  #[inline]
  #[must_use]
  pub fn config_mut(&mut self) -> Option<&mut CrcConfig> {
    self.config.as_mut()
  }

  #[inline]
  #[must_use]
  pub fn kernel(&self) -> Kernel {
    self.kernel
  }

  #[inline]
  pub fn set_kernel(&mut self, kernel: Kernel) {
    self.kernel = kernel;
  }

  /// Raw (pre-adjustment) register after the last processed chunk.
  #[inline]
  #[must_use]
  pub fn running_value(&self) -> u64 {
    self.running_value
  }

  /// Last value produced by `calculate` or `finalize`.
  #[inline]
  #[must_use]
  pub fn finalized_value(&self) -> u64 {
    self.finalized_value
  }

  /// Chunks processed in the current or last update sequence.
  #[inline]
  #[must_use]
  pub fn chunk_count(&self) -> usize {
    self.chunk_counter
  }

  #[inline]
  #[must_use]
  pub fn is_in_progress(&self) -> bool {
    self.in_progress
  }

  fn check_input(&self, data: &[u8]) -> Result<(), CrcError> {
    if self.config.is_none() || data.is_empty() {
      return Err(CrcError::InvalidArguments);
    }
    Ok(())
  }

  fn abort(&mut self, err: CrcError) {
    if self.in_progress {
      debug!(%err, chunks = self.chunk_counter, "crc update sequence aborted");
    }
    self.in_progress = false;
  }

  /// Process one chunk and return its adjusted result. `finish` marks a
  /// completed `calculate`, which also records the result as finalized.
  fn run(&mut self, data: &[u8], finish: bool) -> Result<u64, CrcError> {
    self.check_input(data)?;
    let config = self.config.as_ref().ok_or(CrcError::InvalidArguments)?;

    let start = if self.in_progress {
      let chunk = self.chunk_counter;
      let next = chunk.checked_add(1).ok_or(CrcError::Error)?;
      let start = if chunk == 0 {
        config.initial_value()
      } else {
        self.running_value
      };
      self.chunk_counter = next;
      trace!(chunk, len = data.len(), "crc chunk");
      start
    } else {
      config.initial_value()
    };

    let raw = config.process(start, data, self.kernel);
    let value = config.adjust(raw);
    self.running_value = raw;
    self.pending_value = value;
    if finish {
      self.finalized_value = value;
    }
    Ok(value)
  }
}

impl Default for CrcSession {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl traits::Checksum for CrcSession {
  type Output = u64;
  type Error = CrcError;

  #[inline]
  fn calculate(&mut self, data: &[u8]) -> Result<u64, CrcError> {
    CrcSession::calculate(self, data)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> Result<(), CrcError> {
    CrcSession::update(self, data)
  }

  #[inline]
  fn finalize(&mut self) -> Result<u64, CrcError> {
    CrcSession::finalize(self)
  }
}
