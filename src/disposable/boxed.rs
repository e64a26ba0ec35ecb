use std::fmt::{Debug, Formatter};

use super::Disposable;

/// A type-erased, thread-safe disposable.
///
/// Producer closures may return any disposable type; the trait core stores it
/// boxed so that one subscription type serves every producer.
///
/// # Why `'static`?
///
/// Disposables are control handles, not data views. They are stored inside
/// subscriptions and bags and released at an arbitrary later time, possibly
/// on another thread, so they must own everything they touch.
///
/// # Examples
///
/// ```rust
/// use rxrust_traits::prelude::*;
///
/// let subs = vec![BoxedDisposable::new(()), BoxedDisposable::new(Disposables::flag())];
/// for d in &subs {
///   d.dispose();
/// }
/// assert!(subs.iter().all(Disposable::is_disposed));
/// ```
pub struct BoxedDisposable(Box<dyn Disposable + Send + Sync>);

impl BoxedDisposable {
  #[inline]
  pub fn new(disposable: impl Disposable + Send + Sync + 'static) -> Self {
    Self(Box::new(disposable))
  }
}

impl Disposable for BoxedDisposable {
  #[inline]
  fn dispose(&self) { self.0.dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.is_disposed() }
}

impl Debug for BoxedDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BoxedDisposable")
      .field("is_disposed", &self.is_disposed())
      .finish()
  }
}
