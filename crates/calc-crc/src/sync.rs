//! Lock-guarded sessions for sharing across threads.
//!
//! [`CrcSession`] carries no internal locking. [`SharedSession`] is the
//! external lock: every operation takes the mutex for its whole duration, so
//! chunks fed from different threads are serialized. Interleaving two
//! logical messages on one shared session still mixes them; use one session
//! per message.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{CrcConfig, CrcError, CrcParams, CrcSession};

/// Cloneable handle to a mutex-protected [`CrcSession`].
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
  inner: Arc<Mutex<CrcSession>>,
}

impl SharedSession {
  /// Create a handle to a new, uninitialized session.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn from_session(session: CrcSession) -> Self {
    Self {
      inner: Arc::new(Mutex::new(session)),
    }
  }

  /// See [`CrcSession::init`].
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned.
  pub fn init(&self, config: impl Into<CrcConfig>) -> Result<(), CrcError> {
    self.lock()?.init(config);
    Ok(())
  }

  /// See [`CrcSession::init_params`].
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned, otherwise as `init_params`.
  pub fn init_params(&self, params: &CrcParams) -> Result<(), CrcError> {
    self.lock()?.init_params(params)
  }

  /// See [`CrcSession::calculate`].
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned, otherwise as `calculate`.
  pub fn calculate(&self, data: &[u8]) -> Result<u64, CrcError> {
    self.lock()?.calculate(data)
  }

  /// See [`CrcSession::update`].
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned, otherwise as `update`.
  pub fn update(&self, data: &[u8]) -> Result<(), CrcError> {
    self.lock()?.update(data)
  }

  /// See [`CrcSession::finalize`].
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned, otherwise as `finalize`.
  pub fn finalize(&self) -> Result<u64, CrcError> {
    self.lock()?.finalize()
  }

  /// Run `f` with exclusive access to the session, e.g. to feed several
  /// chunks and finalize without another thread interleaving.
  ///
  /// # Errors
  ///
  /// [`CrcError::Error`] if the lock is poisoned.
  pub fn with_session<R>(&self, f: impl FnOnce(&mut CrcSession) -> R) -> Result<R, CrcError> {
    let mut guard = self.lock()?;
    Ok(f(&mut guard))
  }

  fn lock(&self) -> Result<MutexGuard<'_, CrcSession>, CrcError> {
    self.inner.lock().map_err(|_| CrcError::Error)
  }
}
