use std::{
  fmt::{Debug, Formatter},
  mem,
  sync::Mutex,
};

use smallvec::SmallVec;
use tracing::trace;

use super::{BoxedDisposable, Disposable};
use crate::sync::LockExt;

/// Aggregate owner of disposables, releasing all of them together.
///
/// A bag is usually tied to an enclosing scope: when it is dropped (or
/// [`dispose`](Disposable::dispose)d explicitly) every member still held is
/// released once, and the bag becomes inert. Inserting into an inert bag
/// releases the inserted disposable immediately.
///
/// ```rust
/// use rxrust_traits::prelude::*;
///
/// let flag = Disposables::flag();
/// {
///   let bag = DisposeBag::new();
///   flag.clone().disposed_by(&bag);
/// }
/// assert!(flag.is_disposed());
/// ```
#[derive(Default)]
pub struct DisposeBag {
  inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
  disposed: bool,
  members: SmallVec<[BoxedDisposable; 4]>,
}

impl DisposeBag {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Adds `disposable` to the bag, or releases it at once if the bag has
  /// already been torn down.
  pub fn insert(&self, disposable: impl Disposable + Send + Sync + 'static) {
    let mut inner = self.inner.lock_recover();
    if inner.disposed {
      drop(inner);
      disposable.dispose();
      return;
    }
    inner.members.retain(|d| !d.is_disposed());
    inner.members.push(BoxedDisposable::new(disposable));
  }

  /// Number of members currently held.
  #[inline]
  pub fn len(&self) -> usize { self.inner.lock_recover().members.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Disposable for DisposeBag {
  fn dispose(&self) {
    let members = {
      let mut inner = self.inner.lock_recover();
      if inner.disposed {
        return;
      }
      inner.disposed = true;
      mem::take(&mut inner.members)
    };
    trace!(members = members.len(), "dispose bag torn down");
    for d in members {
      d.dispose();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.inner.lock_recover().disposed }
}

impl Drop for DisposeBag {
  fn drop(&mut self) { self.dispose() }
}

impl Debug for DisposeBag {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let inner = self.inner.lock_recover();
    f.debug_struct("DisposeBag")
      .field("disposed", &inner.disposed)
      .field("members", &inner.members.len())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  };

  use super::*;
  use crate::disposable::Disposables;

  fn counting(hits: &Arc<AtomicUsize>) -> impl Disposable + Send + Sync + 'static {
    let hits = hits.clone();
    Disposables::create(move || {
      hits.fetch_add(1, Ordering::SeqCst);
    })
  }

  #[test]
  fn releases_every_member_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    for _ in 0..5 {
      bag.insert(counting(&hits));
    }
    assert_eq!(bag.len(), 5);

    bag.dispose();
    bag.dispose();
    assert_eq!(hits.load(Ordering::SeqCst), 5);
    assert!(bag.is_disposed());
    assert!(bag.is_empty());
  }

  #[test]
  fn already_disposed_members_are_not_released_twice() {
    let hits = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    let early = Arc::new(counting(&hits));
    bag.insert(early.clone());
    bag.insert(counting(&hits));
    early.dispose();

    drop(bag);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn insert_after_teardown_releases_immediately() {
    let hits = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    bag.dispose();

    bag.insert(counting(&hits));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(bag.is_empty());
  }

  #[test]
  fn insert_prunes_released_members() {
    let bag = DisposeBag::new();
    let flag = Disposables::flag();
    bag.insert(flag.clone());
    flag.dispose();
    bag.insert(());
    // `()` is always released, the flag was released by hand.
    assert_eq!(bag.len(), 1);
    bag.insert(Disposables::flag());
    assert_eq!(bag.len(), 1);
  }

  #[test]
  fn bags_nest() {
    let flag = Disposables::flag();
    let outer = DisposeBag::new();
    let inner = DisposeBag::new();
    flag.clone().disposed_by(&inner);
    inner.disposed_by(&outer);

    outer.dispose();
    assert!(flag.is_disposed());
  }
}
