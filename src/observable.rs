//! The multi-emission boundary.
//!
//! Multi-value streams are not what this crate is about; this module only
//! defines what a stream must look like for [`ObservableLike::as_single`]
//! and [`ObservableLike::as_maybe`] to narrow it into a trait, plus a small
//! closure-backed [`Observable`] to drive those conversions.

use crate::{
  disposable::BoxedDisposable,
  error::TraitError,
  ops::{as_maybe::as_maybe, as_single::as_single},
  traits::{Maybe, Single},
};

mod create;
mod from_iter;

pub use create::*;

// ============================================================================
// Sink Trait
// ============================================================================

/// The receiving end of a multi-emission source.
///
/// Takes `&mut self` for every method so that it can be passed around as
/// `&mut dyn Sink` without knowing the concrete consumer.
pub trait Sink<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);

  /// Sources stop emitting once the sink reports closed.
  fn is_closed(&self) -> bool;
}

/// A boxed sink, as handed to a source.
pub type BoxedSink<Item, Err> = Box<dyn Sink<Item, Err> + Send>;

// ============================================================================
// ObservableLike Trait
// ============================================================================

/// A source of zero or more values followed by completion or an error.
pub trait ObservableLike<Item, Err> {
  /// Starts emitting into `sink`, returning what cancels the emission.
  fn subscribe_sink(&self, sink: BoxedSink<Item, Err>) -> BoxedDisposable;

  /// Narrows the source to a [`Single`].
  ///
  /// - exactly one element, then completion: `Ok(element)`
  /// - completion without elements: `Err(TraitError::NoElements)`
  /// - a second element: `Err(TraitError::MoreThanOneElement)`, and the
  ///   source is disposed
  /// - a source error: `Err(TraitError::Source(err))`
  fn as_single(self) -> Single<Item, TraitError<Err>>
  where
    Self: Sized + Send + Sync + 'static,
    Item: Send + 'static,
    Err: Send + 'static,
  {
    as_single(self)
  }

  /// Narrows the source to a [`Maybe`].
  ///
  /// Like [`as_single`](ObservableLike::as_single), except that completion
  /// without elements yields `MaybeOutcome::Empty`.
  fn as_maybe(self) -> Maybe<Item, TraitError<Err>>
  where
    Self: Sized + Send + Sync + 'static,
    Item: Send + 'static,
    Err: Send + 'static,
  {
    as_maybe(self)
  }
}
