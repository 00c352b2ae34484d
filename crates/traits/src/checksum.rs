//! Incremental checksum protocol.
//!
//! - **One-shot**: `calculate` over data already in memory
//! - **Chunked**: `update` any number of times, then `finalize`
//! - **Fallible**: misuse is reported, never a panic

use core::fmt::{Debug, Display};

/// Checksum engine with a fallible one-shot and chunked protocol.
///
/// # Usage
///
/// ```rust,ignore
/// use calc_crc::{CrcConfig, CrcParams, CrcSession};
/// use traits::Checksum;
///
/// let mut session = CrcSession::new();
/// session.init(CrcConfig::from_params(&CrcParams::CRC32_BZIP2)?);
///
/// // One-shot
/// let crc = session.calculate(b"123456789")?;
///
/// // Chunked
/// session.update(b"12345")?;
/// session.update(b"6789")?;
/// assert_eq!(session.finalize()?, crc);
/// ```
///
/// # Implementor Requirements
///
/// - For any split of a message into non-empty pieces, feeding the pieces to
///   `update` in order and then calling `finalize` must produce the same value
///   as `calculate` over the whole message.
/// - `finalize` without a preceding successful `update` must fail.
/// - An `update` rejected for its arguments (e.g. an empty chunk) changes
///   nothing; the current sequence continues with the next valid chunk.
/// - An `update` that fails while processing a chunk abandons the current
///   sequence; the next `update` starts a fresh message.
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Error reported for argument or protocol violations.
  type Error: Debug + Display;

  /// Compute the checksum of `data` in one shot.
  ///
  /// While a chunked sequence is in progress this continues that sequence
  /// instead of starting from the initial value.
  fn calculate(&mut self, data: &[u8]) -> Result<Self::Output, Self::Error>;

  /// Feed the next chunk of a message.
  fn update(&mut self, data: &[u8]) -> Result<(), Self::Error>;

  /// Close the current chunked sequence and return its checksum.
  fn finalize(&mut self) -> Result<Self::Output, Self::Error>;

  /// Feed multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order, including the rejection of empty buffers. Stops at the first
  /// failing buffer.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<(), Self::Error> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Feed `std::io::IoSlice` buffers.
  ///
  /// This is a convenience for integrating with vectored I/O APIs.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> Result<(), Self::Error> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Run a complete chunked sequence over `bufs` and finalize it.
  #[inline]
  fn checksum_vectored(&mut self, bufs: &[&[u8]]) -> Result<Self::Output, Self::Error> {
    self.update_vectored(bufs)?;
    self.finalize()
  }
}
