//! Disposables: idempotent cancellation handles.
//!
//! A [`Disposable`] releases some resource exactly once, no matter how many
//! times, or from how many threads, `dispose` is called.

use std::{
  fmt::{Debug, Formatter},
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
  },
};

use crate::sync::LockExt;

mod bag;
mod boxed;
mod guard;

pub use bag::*;
pub use boxed::*;
pub use guard::*;

/// A handle that releases a resource at most once.
pub trait Disposable {
  /// Releases the resource.
  ///
  /// Subsequent calls observe the released state and return immediately.
  fn dispose(&self);

  /// Returns `true` once the resource has been released.
  fn is_disposed(&self) -> bool;

  /// Hands `self` to `bag`, which releases it at bag teardown.
  #[inline]
  fn disposed_by(self, bag: &DisposeBag)
  where
    Self: Sized + Send + Sync + 'static,
  {
    bag.insert(self)
  }

  /// Activates RAII behavior: `dispose()` runs as soon as the returned guard
  /// goes out of scope.
  ///
  /// **Attention:** if the guard is not bound to a variable it is dropped,
  /// and the resource released, immediately.
  #[inline]
  fn dispose_when_dropped(self) -> DisposeGuard<Self>
  where
    Self: Sized,
  {
    DisposeGuard::new(self)
  }
}

/// Nothing to release. The producer-side equivalent of "no teardown".
impl Disposable for () {
  #[inline]
  fn dispose(&self) {}

  #[inline]
  fn is_disposed(&self) -> bool { true }
}

impl<T: Disposable + ?Sized> Disposable for Arc<T> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

impl<T: Disposable + ?Sized> Disposable for Box<T> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

type ReleaseAction = Box<dyn FnOnce() + Send>;

/// A disposable backed by a one-shot release action.
///
/// `ClosureDisposable::default()` carries no action and works as a plain
/// cancellation flag: a producer keeps an `Arc` of it and polls
/// [`Disposable::is_disposed`] to stop early.
#[derive(Default)]
pub struct ClosureDisposable {
  released: AtomicBool,
  action: Mutex<Option<ReleaseAction>>,
}

impl ClosureDisposable {
  pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
    Self {
      released: AtomicBool::new(false),
      action: Mutex::new(Some(Box::new(action))),
    }
  }
}

impl Disposable for ClosureDisposable {
  fn dispose(&self) {
    if self.released.swap(true, Ordering::AcqRel) {
      return;
    }
    let action = self.action.lock_recover().take();
    if let Some(action) = action {
      action();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.released.load(Ordering::Acquire) }
}

impl Debug for ClosureDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClosureDisposable")
      .field("released", &self.is_disposed())
      .finish()
  }
}

/// Factory functions for the common disposables.
pub struct Disposables;

impl Disposables {
  /// A disposable that runs `action` on its first `dispose()`.
  #[inline]
  pub fn create(action: impl FnOnce() + Send + 'static) -> ClosureDisposable {
    ClosureDisposable::new(action)
  }

  /// A flag-only disposable, shareable with a producer for cooperative
  /// cancellation.
  #[inline]
  pub fn flag() -> Arc<ClosureDisposable> { Arc::new(ClosureDisposable::default()) }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
  };

  use super::*;

  #[test]
  fn closure_runs_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let c_hits = hits.clone();
    let d = Disposables::create(move || {
      c_hits.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!d.is_disposed());
    d.dispose();
    d.dispose();
    assert!(d.is_disposed());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn closure_runs_once_across_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let c_hits = hits.clone();
    let d = Arc::new(Disposables::create(move || {
      c_hits.fetch_add(1, Ordering::SeqCst);
    }));

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let d = d.clone();
        thread::spawn(move || d.dispose())
      })
      .collect();
    for h in handles {
      h.join().unwrap();
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn unit_is_always_disposed() {
    assert!(().is_disposed());
    ().dispose();
  }

  #[test]
  fn flag_is_shared() {
    let flag = Disposables::flag();
    let producer_view = flag.clone();
    assert!(!producer_view.is_disposed());
    flag.dispose();
    assert!(producer_view.is_disposed());
  }
}
