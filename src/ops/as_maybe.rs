use std::mem;

use crate::{
  emitter::MaybeEmitter,
  error::TraitError,
  observable::{ObservableLike, Sink},
  traits::Maybe,
};

pub(crate) fn as_maybe<S, Item, Err>(source: S) -> Maybe<Item, TraitError<Err>>
where
  S: ObservableLike<Item, Err> + Send + Sync + 'static,
  Item: Send + 'static,
  Err: Send + 'static,
{
  Maybe::create(move |emitter| {
    source.subscribe_sink(Box::new(AsMaybeSink { emitter, element: None, done: false }))
  })
}

struct AsMaybeSink<Item, Err> {
  emitter: MaybeEmitter<Item, TraitError<Err>>,
  element: Option<Item>,
  done: bool,
}

impl<Item, Err> Sink<Item, Err> for AsMaybeSink<Item, Err> {
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
      None => self.emitter.complete(),
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.done || self.emitter.is_disposed() }
}
