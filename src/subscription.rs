//! The link between a producer's emitter and a consumer's observer.
//!
//! Each `subscribe` call allocates one [`SubscriptionCell`]: the atomic
//! lifecycle state, the observer waiting for the outcome, and the
//! producer's own disposable. The emitter and the returned [`Subscription`]
//! both point at it; whichever side wins the state race decides whether the
//! outcome is delivered.

use std::{
  fmt::{Debug, Formatter},
  mem,
  sync::{Arc, Mutex},
};

use tracing::{debug, trace};

use crate::{
  disposable::{BoxedDisposable, Disposable},
  observer::{BoxedTraitObserver, TraitObserver},
  state::{AtomicState, TraitState},
  sync::LockExt,
};

/// The producer's disposable, as seen by the subscription.
enum Resource {
  /// `work` has not returned yet.
  Vacant,
  Held(BoxedDisposable),
  /// Released; anything attached later is disposed on arrival.
  Released,
}

pub(crate) struct SubscriptionCell<Outcome> {
  state: AtomicState,
  observer: Mutex<Option<BoxedTraitObserver<Outcome>>>,
  resource: Mutex<Resource>,
}

impl<Outcome> SubscriptionCell<Outcome> {
  fn new(observer: BoxedTraitObserver<Outcome>) -> Self {
    Self {
      state: AtomicState::default(),
      observer: Mutex::new(Some(observer)),
      resource: Mutex::new(Resource::Vacant),
    }
  }

  #[inline]
  pub(crate) fn state(&self) -> TraitState { self.state.load() }

  /// Delivers `outcome` if this is the first terminal event.
  ///
  /// Returns `false`, without side effects, when the subscription already
  /// delivered an outcome or was disposed.
  pub(crate) fn emit(&self, outcome: Outcome) -> bool {
    if let Err(state) = self.state.transition(TraitState::Pending, TraitState::Delivering) {
      debug!(?state, "terminal outcome discarded");
      #[cfg(feature = "strict-emission")]
      debug_assert!(
        state == TraitState::Disposed,
        "emitter invoked after the outcome was already delivered"
      );
      return false;
    }

    let observer = self.observer.lock_recover().take();
    let Some(mut observer) = observer else {
      return false;
    };
    trace!("delivering terminal outcome");
    observer.on_outcome(outcome);
    self.release_resource();
    observer.on_disposed();
    // A dispose racing the delivery already moved us to `Disposed`.
    let _ = self.state.transition(TraitState::Delivering, TraitState::Terminated);
    true
  }

  pub(crate) fn dispose(&self) {
    match self.state.dispose() {
      Ok(TraitState::Pending) => {
        trace!("subscription disposed before its outcome");
        let observer = self.observer.lock_recover().take();
        self.release_resource();
        if let Some(observer) = observer {
          observer.on_disposed();
        }
      }
      // The delivering side owns the observer and fires `on_disposed`.
      Ok(_) => self.release_resource(),
      Err(_) => {}
    }
  }

  /// Stores the disposable `work` returned. If the subscription already
  /// finished, the disposable is released on the spot.
  fn attach(&self, resource: BoxedDisposable) {
    let mut slot = self.resource.lock_recover();
    if matches!(*slot, Resource::Released) {
      drop(slot);
      resource.dispose();
    } else {
      *slot = Resource::Held(resource);
    }
  }

  fn release_resource(&self) {
    let prev = mem::replace(&mut *self.resource.lock_recover(), Resource::Released);
    if let Resource::Held(resource) = prev {
      resource.dispose();
    }
  }
}

/// Object-safe view of a cell, erasing the outcome type.
trait SubscriptionHandle: Send + Sync {
  fn dispose(&self);
  fn state(&self) -> TraitState;
}

impl<Outcome: 'static> SubscriptionHandle for SubscriptionCell<Outcome> {
  #[inline]
  fn dispose(&self) { SubscriptionCell::dispose(self) }

  #[inline]
  fn state(&self) -> TraitState { SubscriptionCell::state(self) }
}

/// Handle returned by `subscribe`.
///
/// Disposing it cancels the subscription: the outcome callbacks will not
/// fire any more, the disposal callback fires once, and the producer's own
/// disposable is released. Disposing after the outcome was delivered is a
/// no-op. Clones refer to the same subscription.
#[derive(Clone)]
pub struct Subscription(Arc<dyn SubscriptionHandle>);

impl Subscription {
  /// Subscribes `observer` and runs `work` synchronously with the emitter
  /// half of the new cell.
  pub(crate) fn start<Outcome, W>(observer: BoxedTraitObserver<Outcome>, work: W) -> Self
  where
    Outcome: 'static,
    W: FnOnce(Arc<SubscriptionCell<Outcome>>) -> BoxedDisposable,
  {
    let cell = Arc::new(SubscriptionCell::new(observer));
    trace!("trait subscribed");
    let resource = work(cell.clone());
    cell.attach(resource);
    Subscription(cell)
  }

  /// The current lifecycle state.
  #[inline]
  pub fn state(&self) -> TraitState { self.0.state() }
}

impl Disposable for Subscription {
  #[inline]
  fn dispose(&self) { self.0.dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.state().is_terminal() }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription").field("state", &self.state()).finish()
  }
}
