use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use super::Work;
use crate::{
  disposable::{BoxedDisposable, Disposable},
  emitter::CompletableEmitter,
  observer::{call, notify, BoxedTraitObserver, Callback, FnObserver, Notify, TraitObserver},
  subscription::Subscription,
};

/// A cold producer that only reports completion or an error.
pub struct Completable<E> {
  work: Work<CompletableEmitter<E>>,
}

impl<E: 'static> Completable<E> {
  /// Wraps a producer closure. Nothing runs until `subscribe`.
  pub fn create<F, D>(work: F) -> Self
  where
    F: Fn(CompletableEmitter<E>) -> D + Send + Sync + 'static,
    D: Disposable + Send + Sync + 'static,
  {
    Self { work: Arc::new(move |emitter| BoxedDisposable::new(work(emitter))) }
  }

  /// Completes as soon as it is subscribed.
  pub fn empty() -> Self { Self::create(|emitter| emitter.complete()) }

  pub fn error(err: E) -> Self
  where
    E: Clone + Send + Sync,
  {
    Self::create(move |emitter| emitter.fail(err.clone()))
  }

  /// Subscribes a closure receiving `Ok(())` on completion or the error.
  pub fn subscribe<F>(&self, f: F) -> Subscription
  where
    F: FnOnce(Result<(), E>) + Send + 'static,
  {
    self.subscribe_with(FnObserver::new(f))
  }

  /// Subscribes an observer, e.g. a [`CompletableCallbacks`].
  pub fn subscribe_with<O>(&self, observer: O) -> Subscription
  where
    O: TraitObserver<Result<(), E>> + Send + 'static,
  {
    let observer: BoxedTraitObserver<Result<(), E>> = Box::new(observer);
    Subscription::start(observer, |cell| (self.work)(CompletableEmitter::new(cell)))
  }
}

impl<E> Clone for Completable<E> {
  #[inline]
  fn clone(&self) -> Self { Self { work: self.work.clone() } }
}

impl<E> Debug for Completable<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Completable").finish_non_exhaustive()
  }
}

/// Named, optional callbacks for a [`Completable`].
pub struct CompletableCallbacks<E> {
  on_completed: Option<Notify>,
  on_error: Option<Callback<E>>,
  on_disposed: Option<Notify>,
}

impl<E> Default for CompletableCallbacks<E> {
  fn default() -> Self { Self { on_completed: None, on_error: None, on_disposed: None } }
}

impl<E> CompletableCallbacks<E> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  pub fn on_completed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
    self.on_completed = Some(Box::new(f));
    self
  }

  pub fn on_error(mut self, f: impl FnOnce(E) + Send + 'static) -> Self {
    self.on_error = Some(Box::new(f));
    self
  }

  pub fn on_disposed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
    self.on_disposed = Some(Box::new(f));
    self
  }
}

impl<E> TraitObserver<Result<(), E>> for CompletableCallbacks<E> {
  fn on_outcome(&mut self, outcome: Result<(), E>) {
    match outcome {
      Ok(()) => notify(self.on_completed.take()),
      Err(e) => call(self.on_error.take(), e),
    }
  }

  fn on_disposed(self) { notify(self.on_disposed) }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  };

  use crate::prelude::*;

  #[derive(Debug, Clone, PartialEq)]
  enum TraitsError {
    Completable,
  }

  type Log = Arc<Mutex<Vec<String>>>;

  fn callbacks(log: &Log) -> CompletableCallbacks<TraitsError> {
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    CompletableCallbacks::new()
      .on_completed(move || l1.lock().unwrap().push("completed".into()))
      .on_error(move |e| l2.lock().unwrap().push(format!("error {e:?}")))
      .on_disposed(move || l3.lock().unwrap().push("disposed".into()))
  }

  #[test]
  fn failure_then_disposed() {
    let log = Log::default();
    Completable::create(|emitter| emitter.fail(TraitsError::Completable))
      .subscribe_with(callbacks(&log));
    assert_eq!(*log.lock().unwrap(), vec!["error Completable", "disposed"]);
  }

  #[test]
  fn completed_then_disposed() {
    let log = Log::default();
    Completable::create(|emitter| emitter.complete()).subscribe_with(callbacks(&log));
    assert_eq!(*log.lock().unwrap(), vec!["completed", "disposed"]);
  }

  #[test]
  fn factories() {
    let seen = Arc::new(Mutex::new(vec![]));
    let (s1, s2) = (seen.clone(), seen.clone());
    Completable::<TraitsError>::empty().subscribe(move |r| s1.lock().unwrap().push(r));
    Completable::error(TraitsError::Completable).subscribe(move |r| s2.lock().unwrap().push(r));
    assert_eq!(*seen.lock().unwrap(), vec![Ok(()), Err(TraitsError::Completable)]);
  }

  #[test]
  fn teardown_runs_once_on_dispose() {
    let teardowns = Arc::new(AtomicUsize::new(0));
    let c_teardowns = teardowns.clone();
    let completable = Completable::<TraitsError>::create(move |_emitter| {
      let c_teardowns = c_teardowns.clone();
      Disposables::create(move || {
        c_teardowns.fetch_add(1, Ordering::SeqCst);
      })
    });

    let log = Log::default();
    let sub = completable.subscribe_with(callbacks(&log));
    sub.dispose();
    sub.clone().dispose();
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
    assert_eq!(*log.lock().unwrap(), vec!["disposed"]);
  }
}
