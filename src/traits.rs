//! The three single-shot traits.
//!
//! | Trait | Outcome | Emitter calls |
//! |-------|---------|---------------|
//! | [`Single`] | `Result<T, E>` | `succeed`, `fail` |
//! | [`Maybe`] | [`MaybeOutcome<T, E>`](crate::outcome::MaybeOutcome) | `succeed`, `complete`, `fail` |
//! | [`Completable`] | `Result<(), E>` | `complete`, `fail` |
//!
//! All three are cold: `create` only stores the producer closure, which runs
//! once per `subscribe`, synchronously on the subscribing thread. Each
//! subscription delivers at most one outcome, followed by the disposal
//! callback.

use std::sync::Arc;

use crate::disposable::BoxedDisposable;

mod completable;
mod maybe;
mod single;

pub use completable::*;
pub use maybe::*;
pub use single::*;

/// A stored producer closure, erased over the disposable it returns.
pub(crate) type Work<Emitter> = Arc<dyn Fn(Emitter) -> BoxedDisposable + Send + Sync>;
