//! Lifecycle state of a single trait subscription.
//!
//! Every subscription owns exactly one [`AtomicState`]. It is the only field
//! that the producer side (an emitter, possibly on another thread) and the
//! consumer side (disposal) race on, so every transition is a
//! compare-and-swap.
//!
//! ```text
//! Pending    --(emitter invoked)--> Delivering --(callbacks done)--> Terminated
//! Pending    --dispose()----------> Disposed
//! Delivering --dispose()----------> Disposed
//! ```
//!
//! `Terminated` and `Disposed` are absorbing.

use std::sync::atomic::{AtomicU8, Ordering};

/// Where a subscription sits in its single-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TraitState {
  /// Subscribed, waiting for the producer to report an outcome.
  Pending = 0,
  /// An emitter call won the race and the outcome callbacks are running.
  Delivering = 1,
  /// The outcome and disposal callbacks have both run.
  Terminated = 2,
  /// Cancelled before the outcome could be delivered, or while it was.
  Disposed = 3,
}

impl TraitState {
  /// Returns `true` once no further transition is possible.
  #[inline]
  pub fn is_terminal(self) -> bool { matches!(self, TraitState::Terminated | TraitState::Disposed) }

  #[inline]
  fn from_u8(raw: u8) -> Self {
    match raw {
      0 => TraitState::Pending,
      1 => TraitState::Delivering,
      2 => TraitState::Terminated,
      _ => TraitState::Disposed,
    }
  }
}

/// A [`TraitState`] that can be shared across threads.
#[derive(Debug)]
pub(crate) struct AtomicState(AtomicU8);

impl Default for AtomicState {
  fn default() -> Self { Self::new(TraitState::Pending) }
}

impl AtomicState {
  #[inline]
  pub(crate) fn new(state: TraitState) -> Self { Self(AtomicU8::new(state as u8)) }

  #[inline]
  pub(crate) fn load(&self) -> TraitState { TraitState::from_u8(self.0.load(Ordering::Acquire)) }

  /// Moves `from -> to` if the current state is `from`.
  ///
  /// On failure the state actually observed is returned.
  #[inline]
  pub(crate) fn transition(&self, from: TraitState, to: TraitState) -> Result<(), TraitState> {
    self
      .0
      .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
      .map(|_| ())
      .map_err(TraitState::from_u8)
  }

  /// Moves any non-terminal state to `Disposed`, returning the state it left.
  ///
  /// Fails with the observed state when the subscription already reached
  /// `Terminated` or `Disposed`.
  pub(crate) fn dispose(&self) -> Result<TraitState, TraitState> {
    self
      .0
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
        if TraitState::from_u8(raw).is_terminal() {
          None
        } else {
          Some(TraitState::Disposed as u8)
        }
      })
      .map(TraitState::from_u8)
      .map_err(TraitState::from_u8)
  }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::{
      atomic::{AtomicUsize, Ordering},
      Arc,
    },
    thread,
  };

  use super::*;

  #[test]
  fn starts_pending() {
    let state = AtomicState::default();
    assert_eq!(state.load(), TraitState::Pending);
    assert!(!state.load().is_terminal());
  }

  #[test]
  fn delivery_path() {
    let state = AtomicState::default();
    assert_eq!(state.transition(TraitState::Pending, TraitState::Delivering), Ok(()));
    assert_eq!(state.transition(TraitState::Delivering, TraitState::Terminated), Ok(()));
    assert_eq!(
      state.transition(TraitState::Pending, TraitState::Delivering),
      Err(TraitState::Terminated)
    );
    assert_eq!(state.dispose(), Err(TraitState::Terminated));
  }

  #[test]
  fn dispose_from_pending_and_delivering() {
    let pending = AtomicState::default();
    assert_eq!(pending.dispose(), Ok(TraitState::Pending));
    assert_eq!(pending.load(), TraitState::Disposed);
    assert_eq!(pending.dispose(), Err(TraitState::Disposed));

    let delivering = AtomicState::new(TraitState::Delivering);
    assert_eq!(delivering.dispose(), Ok(TraitState::Delivering));
    assert_eq!(
      delivering.transition(TraitState::Delivering, TraitState::Terminated),
      Err(TraitState::Disposed)
    );
  }

  #[test]
  fn exactly_one_racer_wins() {
    let state = Arc::new(AtomicState::default());
    let winners = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..8)
      .map(|i| {
        let state = state.clone();
        let winners = winners.clone();
        thread::spawn(move || {
          let won = if i % 2 == 0 {
            state.transition(TraitState::Pending, TraitState::Delivering).is_ok()
          } else {
            state.dispose() == Ok(TraitState::Pending)
          };
          if won {
            winners.fetch_add(1, Ordering::SeqCst);
          }
        })
      })
      .collect();
    for h in handles {
      h.join().unwrap();
    }
    assert_eq!(winners.load(Ordering::SeqCst), 1);
  }
}
