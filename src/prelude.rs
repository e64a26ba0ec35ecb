//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Awaiting a trait
#[cfg(feature = "futures")]
pub use crate::ops::into_future::OutcomeFuture;
pub use crate::{
  disposable::{BoxedDisposable, ClosureDisposable, DisposeBag, DisposeGuard, Disposable, Disposables},
  emitter::{CompletableEmitter, MaybeEmitter, SingleEmitter},
  error::TraitError,
  observable::{BoxedSink, Observable, ObservableLike, Sink},
  observer::{BoxedTraitObserver, FnObserver, TraitObserver},
  outcome::MaybeOutcome,
  state::TraitState,
  subscription::Subscription,
  traits::{Completable, CompletableCallbacks, Maybe, MaybeCallbacks, Single, SingleCallbacks},
};
