//! Producer-side handles.
//!
//! An emitter is a write-once channel handed to the producer closure. The
//! first terminal call wins; every later call, and every call after the
//! subscription was disposed, is silently ignored. Emitters are `Clone` and
//! `Send`, so a producer may finish the work on another thread or task and
//! report from there.

use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use crate::{outcome::MaybeOutcome, state::TraitState, subscription::SubscriptionCell};

macro_rules! impl_emitter_common {
  ($name:ident<$($p:ident),*>, $outcome:ty) => {
    impl<$($p),*> $name<$($p),*> {
      #[inline]
      pub(crate) fn new(cell: Arc<SubscriptionCell<$outcome>>) -> Self { Self(cell) }

      /// Reports `outcome`. Returns `true` if it reached the consumer.
      #[inline]
      pub fn emit(&self, outcome: $outcome) -> bool { self.0.emit(outcome) }

      /// Returns `true` once the subscription has terminated or was disposed.
      ///
      /// Long-running producers poll this to stop cooperatively.
      #[inline]
      pub fn is_disposed(&self) -> bool { self.0.state().is_terminal() }

      #[inline]
      pub fn state(&self) -> TraitState { self.0.state() }
    }

    impl<$($p),*> Clone for $name<$($p),*> {
      #[inline]
      fn clone(&self) -> Self { Self(self.0.clone()) }
    }

    impl<$($p),*> Debug for $name<$($p),*> {
      fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!($name)).field("state", &self.state()).finish()
      }
    }
  };
}

/// Emitter of a `Single`: exactly one value, or an error.
pub struct SingleEmitter<T, E>(Arc<SubscriptionCell<Result<T, E>>>);

impl_emitter_common!(SingleEmitter<T, E>, Result<T, E>);

impl<T, E> SingleEmitter<T, E> {
  #[inline]
  pub fn succeed(&self, value: T) { self.emit(Ok(value)); }

  #[inline]
  pub fn fail(&self, err: E) { self.emit(Err(err)); }
}

/// Emitter of a `Maybe`: one value, completion without a value, or an error.
pub struct MaybeEmitter<T, E>(Arc<SubscriptionCell<MaybeOutcome<T, E>>>);

impl_emitter_common!(MaybeEmitter<T, E>, MaybeOutcome<T, E>);

impl<T, E> MaybeEmitter<T, E> {
  #[inline]
  pub fn succeed(&self, value: T) { self.emit(MaybeOutcome::Success(value)); }

  /// Completes without a value.
  #[inline]
  pub fn complete(&self) { self.emit(MaybeOutcome::Empty); }

  #[inline]
  pub fn fail(&self, err: E) { self.emit(MaybeOutcome::Failure(err)); }
}

/// Emitter of a `Completable`: completion, or an error. No value channel.
pub struct CompletableEmitter<E>(Arc<SubscriptionCell<Result<(), E>>>);

impl_emitter_common!(CompletableEmitter<E>, Result<(), E>);

impl<E> CompletableEmitter<E> {
  #[inline]
  pub fn complete(&self) { self.emit(Ok(())); }

  #[inline]
  pub fn fail(&self, err: E) { self.emit(Err(err)); }
}
