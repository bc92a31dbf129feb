//! Thread-safe handle to a [`Session`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tessera::Result;

use crate::record::WalletRecord;
use crate::session::Session;

/// Cloneable handle that serialises access to one session.
///
/// Deriving the next wallet reads the wallet count, derives and appends
/// under a single lock, so concurrent callers never share an index.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    /// Wrap `session`.
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session.
    ///
    /// A panic in another holder does not leave the session half-mutated,
    /// so a poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Session::generate_wallet`].
    ///
    /// # Errors
    ///
    /// As [`Session::generate_wallet`].
    pub fn generate_wallet(&self, input: Option<&str>) -> Result<WalletRecord> {
        self.lock().generate_wallet(input).cloned()
    }

    /// See [`Session::add_wallet`].
    ///
    /// # Errors
    ///
    /// As [`Session::add_wallet`].
    pub fn add_wallet(&self) -> Result<WalletRecord> {
        self.lock().add_wallet().cloned()
    }

    /// See [`Session::remove_wallet`].
    ///
    /// # Errors
    ///
    /// As [`Session::remove_wallet`].
    pub fn remove_wallet(&self, index: usize) -> Result<WalletRecord> {
        self.lock().remove_wallet(index)
    }

    /// See [`Session::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }
}
