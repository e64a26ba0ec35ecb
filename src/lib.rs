//! # rxrust-traits: single-shot reactive traits
//!
//! Cold, cancellable producers that report **at most one** terminal outcome,
//! plus the disposal primitives that manage their lifetime.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxrust_traits::prelude::*;
//!
//! let bag = DisposeBag::new();
//!
//! Single::<_, String>::create(|emitter| emitter.succeed("✅"))
//!   .subscribe(|outcome| println!("Single: {outcome:?}"))
//!   .disposed_by(&bag);
//!
//! Maybe::<i32, String>::empty()
//!   .subscribe_with(MaybeCallbacks::new().on_completed(|| println!("Maybe: completed")))
//!   .disposed_by(&bag);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Single`] / [`Maybe`] / [`Completable`] | The traits, each a cold producer closure |
//! | [`TraitObserver`] | Receives the outcome, then the disposal notification |
//! | [`Subscription`] | Handle to cancel a subscription |
//! | [`Disposable`] / [`DisposeBag`] | Idempotent release, individually or as a group |
//! | [`ObservableLike`] | Multi-emission sources that can be narrowed into a trait |
//!
//! ## Feature Flags
//!
//! - **`futures`** (default): every trait implements `IntoFuture`
//! - **`strict-emission`**: a second emission on an already delivered
//!   subscription fails a `debug_assert!`
//!
//! [`Single`]: traits::Single
//! [`Maybe`]: traits::Maybe
//! [`Completable`]: traits::Completable
//! [`TraitObserver`]: observer::TraitObserver
//! [`Subscription`]: subscription::Subscription
//! [`Disposable`]: disposable::Disposable
//! [`DisposeBag`]: disposable::DisposeBag
//! [`ObservableLike`]: observable::ObservableLike

pub mod disposable;
pub mod emitter;
pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod outcome;
pub mod prelude;
pub mod state;
pub mod subscription;
mod sync;
pub mod traits;

// Re-export the prelude module
pub use prelude::*;

#[cfg(doctest)]
mod __markdown_doctests {
  mod readme {
    #![doc = include_str!("../README.md")]
  }
}
