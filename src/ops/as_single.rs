use std::mem;

use crate::{
  emitter::SingleEmitter,
  error::TraitError,
  observable::{ObservableLike, Sink},
  traits::Single,
};

pub(crate) fn as_single<S, Item, Err>(source: S) -> Single<Item, TraitError<Err>>
where
  S: ObservableLike<Item, Err> + Send + Sync + 'static,
  Item: Send + 'static,
  Err: Send + 'static,
{
  Single::create(move |emitter| {
    source.subscribe_sink(Box::new(AsSingleSink { emitter, element: None, done: false }))
  })
}

/// Holds on to the first element until the source completes.
struct AsSingleSink<Item, Err> {
  emitter: SingleEmitter<Item, TraitError<Err>>,
  element: Option<Item>,
  done: bool,
}

impl<Item, Err> Sink<Item, Err> for AsSingleSink<Item, Err> {
  fn next(&mut self, value: Item) {
    if self.done {
      return;
    }
    if self.element.is_some() {
      self.done = true;
      self.element = None;
      self.emitter.fail(TraitError::MoreThanOneElement);
    } else {
      self.element = Some(value);
    }
  }

  fn error(&mut self, err: Err) {
    if !mem::replace(&mut self.done, true) {
      self.emitter.fail(TraitError::Source(err));
    }
  }

  fn complete(&mut self) {
    if mem::replace(&mut self.done, true) {
      return;
    }
    match self.element.take() {
      Some(v) => self.emitter.succeed(v),
      None => self.emitter.fail(TraitError::NoElements),
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.done || self.emitter.is_disposed() }
}
