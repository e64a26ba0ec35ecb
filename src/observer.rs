//! Consumer side of a trait subscription.
//!
//! A [`TraitObserver`] receives at most one terminal outcome, and then,
//! unconditionally, a disposal notification. The outcome type depends on the
//! trait: `Result<T, E>` for `Single`, [`MaybeOutcome`] for `Maybe`,
//! `Result<(), E>` for `Completable`.
//!
//! [`MaybeOutcome`]: crate::outcome::MaybeOutcome

// ============================================================================
// TraitObserver Trait
// ============================================================================

/// Observer of a single-shot trait.
pub trait TraitObserver<Outcome> {
  /// Receive the one terminal outcome. Never called after disposal won.
  fn on_outcome(&mut self, outcome: Outcome);

  /// Called exactly once per subscription, after `on_outcome` if that ran.
  ///
  /// This consumes the observer: nothing can be delivered afterwards.
  fn on_disposed(self);
}

// ============================================================================
// DynTraitObserver Trait - Object-safe TraitObserver
// ============================================================================

/// Object-safe mirror of [`TraitObserver`].
///
/// `on_disposed(self)` is not callable through a vtable, so the boxed form
/// takes `self: Box<Self>` instead.
pub trait DynTraitObserver<Outcome> {
  fn box_on_outcome(&mut self, outcome: Outcome);
  fn box_on_disposed(self: Box<Self>);
}

impl<T, Outcome> DynTraitObserver<Outcome> for T
where
  T: TraitObserver<Outcome>,
{
  #[inline]
  fn box_on_outcome(&mut self, outcome: Outcome) { self.on_outcome(outcome) }

  #[inline]
  fn box_on_disposed(self: Box<Self>) { (*self).on_disposed() }
}

/// Boxed observer as stored by a subscription. `Send`, because the emitter
/// may deliver from any thread.
pub type BoxedTraitObserver<Outcome> = Box<dyn DynTraitObserver<Outcome> + Send>;

impl<Outcome> TraitObserver<Outcome> for BoxedTraitObserver<Outcome> {
  #[inline]
  fn on_outcome(&mut self, outcome: Outcome) { (**self).box_on_outcome(outcome) }

  #[inline]
  fn on_disposed(self) { self.box_on_disposed() }
}

// ============================================================================
// FnObserver - Closure adapter
// ============================================================================

/// Adapts a closure that receives the outcome. Disposal is ignored.
///
/// This is what `subscribe(|outcome| ...)` builds.
pub struct FnObserver<F>(Option<F>);

impl<F> FnObserver<F> {
  #[inline]
  pub fn new(f: F) -> Self { Self(Some(f)) }
}

impl<F, Outcome> TraitObserver<Outcome> for FnObserver<F>
where
  F: FnOnce(Outcome),
{
  #[inline]
  fn on_outcome(&mut self, outcome: Outcome) {
    if let Some(f) = self.0.take() {
      f(outcome)
    }
  }

  #[inline]
  fn on_disposed(self) {}
}

/// A boxed one-shot callback, as held by the callback builders.
pub type Callback<Arg> = Box<dyn FnOnce(Arg) + Send>;

/// A boxed one-shot callback without argument.
pub type Notify = Box<dyn FnOnce() + Send>;

#[inline]
pub(crate) fn call<Arg>(callback: Option<Callback<Arg>>, arg: Arg) {
  if let Some(callback) = callback {
    callback(arg)
  }
}

#[inline]
pub(crate) fn notify(callback: Option<Notify>) {
  if let Some(callback) = callback {
    callback()
  }
}

// ============================================================================
// Tests
// ============================================================================
