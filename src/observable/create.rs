use std::sync::Arc;

use super::{BoxedSink, ObservableLike, Sink};
use crate::disposable::{BoxedDisposable, Disposable};

type SubscribeFn<Item, Err> = dyn Fn(&mut dyn Sink<Item, Err>) -> BoxedDisposable + Send + Sync;

/// A cold multi-emission source backed by a closure.
///
/// ```rust
/// use rxrust_traits::prelude::*;
///
/// let source = Observable::<String, &str>::create(|sink| {
///   sink.error("single");
/// });
/// source.as_single().subscribe(|outcome| {
///   assert_eq!(outcome, Err(TraitError::Source("single")));
/// });
/// ```
pub struct Observable<Item, Err> {
  subscribe: Arc<SubscribeFn<Item, Err>>,
}

impl<Item, Err> Observable<Item, Err> {
  /// The closure runs once per subscription with a sink that ignores
  /// everything after the first `error` or `complete`.
  pub fn create<F, D>(f: F) -> Self
  where
    F: Fn(&mut dyn Sink<Item, Err>) -> D + Send + Sync + 'static,
    D: Disposable + Send + Sync + 'static,
  {
    Self {
      subscribe: Arc::new(move |sink| BoxedDisposable::new(f(sink))),
    }
  }
}

impl<Item, Err> Clone for Observable<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Self { subscribe: self.subscribe.clone() } }
}

impl<Item, Err> ObservableLike<Item, Err> for Observable<Item, Err> {
  fn subscribe_sink(&self, sink: BoxedSink<Item, Err>) -> BoxedDisposable {
    let mut sink = CreateSink(Some(sink));
    (self.subscribe)(&mut sink)
  }
}

/// Drops the downstream sink at the first terminal event.
struct CreateSink<Item, Err>(Option<BoxedSink<Item, Err>>);

impl<Item, Err> Sink<Item, Err> for CreateSink<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(sink) = &mut self.0 {
      sink.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(mut sink) = self.0.take() {
      sink.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(mut sink) = self.0.take() {
      sink.complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.as_ref().map_or(true, |sink| sink.is_closed()) }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  struct Recorder(Arc<Mutex<Vec<String>>>);

  impl Sink<i32, &'static str> for Recorder {
    fn next(&mut self, value: i32) { self.0.lock().unwrap().push(format!("next {value}")) }

    fn error(&mut self, err: &'static str) { self.0.lock().unwrap().push(format!("error {err}")) }

    fn complete(&mut self) { self.0.lock().unwrap().push("complete".into()) }

    fn is_closed(&self) -> bool { false }
  }

  #[test]
  fn nothing_after_terminal_event() {
    let log = Arc::new(Mutex::new(vec![]));
    let source = Observable::create(|sink: &mut dyn Sink<i32, &'static str>| {
      sink.next(1);
      sink.complete();
      sink.next(2);
      sink.error("late");
      assert!(sink.is_closed());
    });

    source.subscribe_sink(Box::new(Recorder(log.clone())));
    assert_eq!(*log.lock().unwrap(), vec!["next 1", "complete"]);
  }

  #[test]
  fn teardown_is_returned() {
    let flag = Disposables::flag();
    let c_flag = flag.clone();
    let source = Observable::<i32, &'static str>::create(move |_| c_flag.clone());
    let d = source.subscribe_sink(Box::new(Recorder(Arc::default())));
    d.dispose();
    assert!(flag.is_disposed());
  }
}
