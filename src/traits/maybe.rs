use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use super::Work;
use crate::{
  disposable::{BoxedDisposable, Disposable},
  emitter::MaybeEmitter,
  observer::{call, notify, BoxedTraitObserver, Callback, FnObserver, Notify, TraitObserver},
  outcome::MaybeOutcome,
  subscription::Subscription,
};

/// A cold producer of at most one value: a value, completion without one,
/// or an error.
pub struct Maybe<T, E> {
  work: Work<MaybeEmitter<T, E>>,
}

impl<T: 'static, E: 'static> Maybe<T, E> {
  /// Wraps a producer closure. Nothing runs until `subscribe`.
  pub fn create<F, D>(work: F) -> Self
  where
    F: Fn(MaybeEmitter<T, E>) -> D + Send + Sync + 'static,
    D: Disposable + Send + Sync + 'static,
  {
    Self { work: Arc::new(move |emitter| BoxedDisposable::new(work(emitter))) }
  }

  pub fn just(value: T) -> Self
  where
    T: Clone + Send + Sync,
  {
    Self::create(move |emitter| emitter.succeed(value.clone()))
  }

  /// Completes without a value as soon as it is subscribed.
  pub fn empty() -> Self { Self::create(|emitter| emitter.complete()) }

  pub fn error(err: E) -> Self
  where
    E: Clone + Send + Sync,
  {
    Self::create(move |emitter| emitter.fail(err.clone()))
  }

  pub fn subscribe<F>(&self, f: F) -> Subscription
  where
    F: FnOnce(MaybeOutcome<T, E>) + Send + 'static,
  {
    self.subscribe_with(FnObserver::new(f))
  }

  /// Subscribes an observer, e.g. a [`MaybeCallbacks`].
  pub fn subscribe_with<O>(&self, observer: O) -> Subscription
  where
    O: TraitObserver<MaybeOutcome<T, E>> + Send + 'static,
  {
    let observer: BoxedTraitObserver<MaybeOutcome<T, E>> = Box::new(observer);
    Subscription::start(observer, |cell| (self.work)(MaybeEmitter::new(cell)))
  }
}

impl<T, E> Clone for Maybe<T, E> {
  #[inline]
  fn clone(&self) -> Self { Self { work: self.work.clone() } }
}

impl<T, E> Debug for Maybe<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.debug_struct("Maybe").finish_non_exhaustive() }
}

/// Named, optional callbacks for a [`Maybe`].
pub struct MaybeCallbacks<T, E> {
  on_success: Option<Callback<T>>,
  on_error: Option<Callback<E>>,
  on_completed: Option<Notify>,
  on_disposed: Option<Notify>,
}

impl<T, E> Default for MaybeCallbacks<T, E> {
  fn default() -> Self {
    Self {
      on_success: None,
      on_error: None,
      on_completed: None,
      on_disposed: None,
    }
  }
}

impl<T, E> MaybeCallbacks<T, E> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  pub fn on_success(mut self, f: impl FnOnce(T) + Send + 'static) -> Self {
    self.on_success = Some(Box::new(f));
    self
  }

  pub fn on_error(mut self, f: impl FnOnce(E) + Send + 'static) -> Self {
    self.on_error = Some(Box::new(f));
    self
  }

  /// Fires when the maybe completes without a value.
  pub fn on_completed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
    self.on_completed = Some(Box::new(f));
    self
  }

  pub fn on_disposed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
    self.on_disposed = Some(Box::new(f));
    self
  }
}

impl<T, E> TraitObserver<MaybeOutcome<T, E>> for MaybeCallbacks<T, E> {
  fn on_outcome(&mut self, outcome: MaybeOutcome<T, E>) {
    match outcome {
      MaybeOutcome::Success(v) => call(self.on_success.take(), v),
      MaybeOutcome::Empty => notify(self.on_completed.take()),
      MaybeOutcome::Failure(e) => call(self.on_error.take(), e),
    }
  }

  fn on_disposed(self) { notify(self.on_disposed) }
}
