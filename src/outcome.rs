//! Terminal outcomes.
//!
//! `Single` reports a `Result<T, E>` and `Completable` a `Result<(), E>`.
//! Only `Maybe` needs its own shape, since "completed without a value" is a
//! third, successful, way to finish.

/// The terminal outcome of a `Maybe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaybeOutcome<T, E> {
  Success(T),
  Empty,
  Failure(E),
}

impl<T, E> MaybeOutcome<T, E> {
  #[inline]
  pub fn is_success(&self) -> bool { matches!(self, MaybeOutcome::Success(_)) }

  #[inline]
  pub fn is_empty(&self) -> bool { matches!(self, MaybeOutcome::Empty) }

  #[inline]
  pub fn is_failure(&self) -> bool { matches!(self, MaybeOutcome::Failure(_)) }

  /// `Success(v)` becomes `Ok(Some(v))`, `Empty` becomes `Ok(None)`.
  #[inline]
  pub fn into_result(self) -> Result<Option<T>, E> { self.into() }
}

impl<T, E> From<MaybeOutcome<T, E>> for Result<Option<T>, E> {
  fn from(outcome: MaybeOutcome<T, E>) -> Self {
    match outcome {
      MaybeOutcome::Success(v) => Ok(Some(v)),
      MaybeOutcome::Empty => Ok(None),
      MaybeOutcome::Failure(e) => Err(e),
    }
  }
}

impl<T, E> From<Result<Option<T>, E>> for MaybeOutcome<T, E> {
  fn from(result: Result<Option<T>, E>) -> Self {
    match result {
      Ok(Some(v)) => MaybeOutcome::Success(v),
      Ok(None) => MaybeOutcome::Empty,
      Err(e) => MaybeOutcome::Failure(e),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converts_both_ways() {
    let ok: Result<Option<i32>, &str> = MaybeOutcome::Success(1).into_result();
    assert_eq!(ok, Ok(Some(1)));
    assert_eq!(MaybeOutcome::<i32, &str>::Empty.into_result(), Ok(None));
    assert_eq!(MaybeOutcome::<i32, _>::Failure("boom").into_result(), Err("boom"));

    assert!(MaybeOutcome::<i32, &str>::from(Ok(None)).is_empty());
    assert!(MaybeOutcome::<_, &str>::from(Ok(Some(2))).is_success());
    assert!(MaybeOutcome::<i32, _>::from(Err("x")).is_failure());
  }
}
