use super::Disposable;

/// An RAII wrapper that disposes the inner disposable when dropped.
///
/// Created by [`Disposable::dispose_when_dropped`]. If you want to release it
/// early, wrap it in its own scope.
#[derive(Debug)]
#[must_use]
pub struct DisposeGuard<T: Disposable>(T);

impl<T: Disposable> DisposeGuard<T> {
  #[inline]
  pub fn new(disposable: T) -> Self { DisposeGuard(disposable) }

  #[inline]
  pub fn get(&self) -> &T { &self.0 }
}

impl<T: Disposable> Drop for DisposeGuard<T> {
  #[inline]
  fn drop(&mut self) { self.0.dispose() }
}
