use thiserror::Error;

/// Failure of a trait narrowed from a multi-emission source.
///
/// `as_single()` and `as_maybe()` enforce the cardinality of the trait they
/// produce; the source's own errors pass through as [`TraitError::Source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraitError<E> {
  /// The source completed before emitting any element.
  #[error("sequence completed without emitting an element")]
  NoElements,
  /// The source emitted a second element.
  #[error("sequence emitted more than one element")]
  MoreThanOneElement,
  /// The source itself failed.
  #[error("{0}")]
  Source(E),
}

impl<E> TraitError<E> {
  /// The source's error, if this is one.
  #[inline]
  pub fn source_error(&self) -> Option<&E> {
    match self {
      TraitError::Source(e) => Some(e),
      _ => None,
    }
  }

  #[inline]
  pub fn into_source(self) -> Option<E> {
    match self {
      TraitError::Source(e) => Some(e),
      _ => None,
    }
  }
}
