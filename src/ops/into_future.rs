//! Awaiting a trait.
//!
//! Every trait implements [`IntoFuture`], so inside an async context the
//! outcome can be awaited directly:
//!
//! | Trait            | `Output`                |
//! |------------------|-------------------------|
//! | `Single<T, E>`   | `Result<T, E>`          |
//! | `Maybe<T, E>`    | `Result<Option<T>, E>`  |
//! | `Completable<E>` | `Result<(), E>`         |
//!
//! The subscription is made when the future is created, not when it is first
//! polled. Dropping the future before it resolves disposes the subscription.
//!
//! ```rust
//! use rxrust_traits::prelude::*;
//!
//! let value = futures::executor::block_on(async { Single::<_, ()>::just(42).await });
//! assert_eq!(value, Ok(42));
//! ```

use std::{
  fmt::{Debug, Formatter},
  future::{Future, IntoFuture},
  pin::Pin,
  sync::{Arc, Mutex},
  task::{Context, Poll},
};

use futures::task::AtomicWaker;

use crate::{
  disposable::Disposable,
  observer::TraitObserver,
  subscription::Subscription,
  sync::LockExt,
  traits::{Completable, Maybe, Single},
};

// ============================================================================
// Shared State
// ============================================================================

/// Written once by the observer, taken once by the future.
struct Shared<R> {
  result: Mutex<Option<R>>,
  waker: AtomicWaker,
}

impl<R> Shared<R> {
  fn new() -> Self { Self { result: Mutex::new(None), waker: AtomicWaker::new() } }

  #[inline]
  fn take(&self) -> Option<R> { self.result.lock_recover().take() }
}

// ============================================================================
// OutcomeFuture
// ============================================================================

/// A future resolving with the outcome of a trait subscription.
///
/// A `Maybe` delivers a `MaybeOutcome`; its future reports the equivalent
/// `Result<Option<T>, E>`.
pub struct OutcomeFuture<R> {
  shared: Arc<Shared<R>>,
  subscription: Subscription,
}

impl<R> OutcomeFuture<R> {
  /// The subscription driving this future.
  #[inline]
  pub fn subscription(&self) -> &Subscription { &self.subscription }
}

impl<R> Future for OutcomeFuture<R> {
  type Output = R;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<R> {
    if let Some(result) = self.shared.take() {
      return Poll::Ready(result);
    }
    self.shared.waker.register(cx.waker());
    // The outcome may have landed between the first check and `register`.
    match self.shared.take() {
      Some(result) => Poll::Ready(result),
      None => Poll::Pending,
    }
  }
}

impl<R> Drop for OutcomeFuture<R> {
  fn drop(&mut self) { self.subscription.dispose() }
}

impl<R> Debug for OutcomeFuture<R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OutcomeFuture")
      .field("subscription", &self.subscription)
      .finish()
  }
}

// ============================================================================
// FutureObserver
// ============================================================================

struct FutureObserver<R> {
  shared: Arc<Shared<R>>,
}

impl<R, Outcome> TraitObserver<Outcome> for FutureObserver<R>
where
  Outcome: Into<R>,
{
  fn on_outcome(&mut self, outcome: Outcome) {
    *self.shared.result.lock_recover() = Some(outcome.into());
    self.shared.waker.wake();
  }

  #[inline]
  fn on_disposed(self) {}
}

fn subscribe_future<R>(subscribe: impl FnOnce(FutureObserver<R>) -> Subscription) -> OutcomeFuture<R> {
  let shared = Arc::new(Shared::new());
  let subscription = subscribe(FutureObserver { shared: shared.clone() });
  OutcomeFuture { shared, subscription }
}

// ============================================================================
// IntoFuture Implementations
// ============================================================================

impl<T: Send + 'static, E: Send + 'static> IntoFuture for Single<T, E> {
  type Output = Result<T, E>;
  type IntoFuture = OutcomeFuture<Result<T, E>>;

  fn into_future(self) -> Self::IntoFuture { subscribe_future(|observer| self.subscribe_with(observer)) }
}

impl<T: Send + 'static, E: Send + 'static> IntoFuture for Maybe<T, E> {
  type Output = Result<Option<T>, E>;
  type IntoFuture = OutcomeFuture<Result<Option<T>, E>>;

  fn into_future(self) -> Self::IntoFuture { subscribe_future(|observer| self.subscribe_with(observer)) }
}

impl<E: Send + 'static> IntoFuture for Completable<E> {
  type Output = Result<(), E>;
  type IntoFuture = OutcomeFuture<Result<(), E>>;

  fn into_future(self) -> Self::IntoFuture { subscribe_future(|observer| self.subscribe_with(observer)) }
}
