use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use super::Work;
use crate::{
  disposable::{BoxedDisposable, Disposable},
  emitter::SingleEmitter,
  observer::{call, notify, BoxedTraitObserver, Callback, FnObserver, Notify, TraitObserver},
  subscription::Subscription,
};

/// A cold producer of exactly one value, or an error.
///
/// ```rust
/// use std::convert::Infallible;
///
/// use rxrust_traits::prelude::*;
///
/// let bag = DisposeBag::new();
/// Single::<_, Infallible>::just("✅")
///   .subscribe(|outcome| assert_eq!(outcome, Ok("✅")))
///   .disposed_by(&bag);
/// ```
pub struct Single<T, E> {
  work: Work<SingleEmitter<T, E>>,
}

impl<T: 'static, E: 'static> Single<T, E> {
  /// Wraps a producer closure. Nothing runs until `subscribe`.
  ///
  /// The closure receives the emitter and returns the disposable that
  /// cancels its in-flight work; return `()` when there is nothing to
  /// cancel.
  pub fn create<F, D>(work: F) -> Self
  where
    F: Fn(SingleEmitter<T, E>) -> D + Send + Sync + 'static,
    D: Disposable + Send + Sync + 'static,
  {
    Self { work: Arc::new(move |emitter| BoxedDisposable::new(work(emitter))) }
  }

  /// Succeeds with `value` as soon as it is subscribed.
  pub fn just(value: T) -> Self
  where
    T: Clone + Send + Sync,
  {
    Self::create(move |emitter| emitter.succeed(value.clone()))
  }

  /// Fails with `err` as soon as it is subscribed.
  pub fn error(err: E) -> Self
  where
    E: Clone + Send + Sync,
  {
    Self::create(move |emitter| emitter.fail(err.clone()))
  }

  /// Subscribes a closure receiving the outcome.
  pub fn subscribe<F>(&self, f: F) -> Subscription
  where
    F: FnOnce(Result<T, E>) + Send + 'static,
  {
    self.subscribe_with(FnObserver::new(f))
  }

  /// Subscribes an observer, e.g. a [`SingleCallbacks`].
  pub fn subscribe_with<O>(&self, observer: O) -> Subscription
  where
    O: TraitObserver<Result<T, E>> + Send + 'static,
  {
    let observer: BoxedTraitObserver<Result<T, E>> = Box::new(observer);
    Subscription::start(observer, |cell| (self.work)(SingleEmitter::new(cell)))
  }
}

impl<T, E> Clone for Single<T, E> {
  #[inline]
  fn clone(&self) -> Self { Self { work: self.work.clone() } }
}

impl<T, E> Debug for Single<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.debug_struct("Single").finish_non_exhaustive() }
}

/// Named, optional callbacks for a [`Single`].
///
/// Omitted callbacks are skipped; an unhandled failure is swallowed and the
/// disposal callback still fires.
pub struct SingleCallbacks<T, E> {
  on_success: Option<Callback<T>>,
  on_failure: Option<Callback<E>>,
  on_disposed: Option<Notify>,
}

impl<T, E> Default for SingleCallbacks<T, E> {
  fn default() -> Self { Self { on_success: None, on_failure: None, on_disposed: None } }
}

impl<T, E> SingleCallbacks<T, E> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  pub fn on_success(mut self, f: impl FnOnce(T) + Send + 'static) -> Self {
    self.on_success = Some(Box::new(f));
    self
  }

  pub fn on_failure(mut self, f: impl FnOnce(E) + Send + 'static) -> Self {
    self.on_failure = Some(Box::new(f));
    self
  }

  pub fn on_disposed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
    self.on_disposed = Some(Box::new(f));
    self
  }
}

impl<T, E> TraitObserver<Result<T, E>> for SingleCallbacks<T, E> {
  fn on_outcome(&mut self, outcome: Result<T, E>) {
    match outcome {
      Ok(v) => call(self.on_success.take(), v),
      Err(e) => call(self.on_failure.take(), e),
    }
  }

  fn on_disposed(self) { notify(self.on_disposed) }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::{Arc, Mutex},
    thread,
  };

  use crate::prelude::*;

  type Log = Arc<Mutex<Vec<String>>>;

  fn callbacks(log: &Log) -> SingleCallbacks<&'static str, String> {
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    SingleCallbacks::new()
      .on_success(move |v| l1.lock().unwrap().push(format!("success {v}")))
      .on_failure(move |e| l2.lock().unwrap().push(format!("failure {e}")))
      .on_disposed(move || l3.lock().unwrap().push("disposed".into()))
  }

  #[test]
  fn just_success_then_disposed() {
    let log = Log::default();
    let sub = Single::just("✅").subscribe_with(callbacks(&log));

    assert_eq!(*log.lock().unwrap(), vec!["success ✅", "disposed"]);
    assert_eq!(sub.state(), TraitState::Terminated);
  }

  #[test]
  fn error_then_disposed() {
    let log = Log::default();
    Single::error("single".to_string()).subscribe_with(callbacks(&log));
    assert_eq!(*log.lock().unwrap(), vec!["failure single", "disposed"]);
  }

  #[test]
  fn cold_until_subscribed() {
    let runs = Arc::new(Mutex::new(0));
    let c_runs = runs.clone();
    let single = Single::<i32, ()>::create(move |emitter| {
      *c_runs.lock().unwrap() += 1;
      emitter.succeed(1);
    });
    assert_eq!(*runs.lock().unwrap(), 0);

    single.subscribe(|_| {});
    single.clone().subscribe(|_| {});
    assert_eq!(*runs.lock().unwrap(), 2);
  }

  #[cfg(not(feature = "strict-emission"))]
  #[test]
  fn second_emission_ignored() {
    let log = Log::default();
    Single::create(|emitter| {
      emitter.succeed("first");
      emitter.fail("late".to_string());
      emitter.succeed("second");
    })
    .subscribe_with(callbacks(&log));

    assert_eq!(*log.lock().unwrap(), vec!["success first", "disposed"]);
  }

  #[test]
  fn missing_failure_handler_is_swallowed() {
    let disposed = Arc::new(Mutex::new(false));
    let c_disposed = disposed.clone();
    Single::<i32, _>::error("boom").subscribe_with(
      SingleCallbacks::new()
        .on_success(|_| panic!("no value expected"))
        .on_disposed(move || *c_disposed.lock().unwrap() = true),
    );
    assert!(*disposed.lock().unwrap());
  }

  #[test]
  fn dispose_before_async_emission() {
    let log = Log::default();
    let emitter_slot = Arc::new(Mutex::new(None));
    let c_slot = emitter_slot.clone();
    let teardown = Disposables::flag();
    let c_teardown = teardown.clone();
    let sub = Single::create(move |emitter| {
      *c_slot.lock().unwrap() = Some(emitter);
      c_teardown.clone()
    })
    .subscribe_with(callbacks(&log));

    sub.dispose();
    assert!(teardown.is_disposed());

    let emitter = emitter_slot.lock().unwrap().take().unwrap();
    assert!(emitter.is_disposed());
    thread::spawn(move || emitter.succeed("too late")).join().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["disposed"]);
    assert_eq!(sub.state(), TraitState::Disposed);
  }

  #[test]
  fn emits_from_another_thread() {
    let (tx, rx) = std::sync::mpsc::channel();
    let single = Single::<u64, ()>::create(|emitter| {
      thread::spawn(move || emitter.succeed(42));
    });
    let sub = single.subscribe(move |v| tx.send(v).unwrap());

    assert_eq!(rx.recv().unwrap(), Ok(42));
    // The outcome callback runs before the state settles; wait for it.
    while sub.state() != TraitState::Terminated {
      thread::yield_now();
    }
  }
}
