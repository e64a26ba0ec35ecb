use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locking that survives a poisoned mutex.
///
/// No user callback ever runs while one of the crate's locks is held, so a
/// poisoned lock still guards consistent data.
pub(crate) trait LockExt<T> {
  fn lock_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> LockExt<T> for Mutex<T> {
  #[inline]
  fn lock_recover(&self) -> MutexGuard<'_, T> { self.lock().unwrap_or_else(PoisonError::into_inner) }
}
