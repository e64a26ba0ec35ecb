//! Conversions into and out of the single-shot traits.

pub mod as_maybe;
pub mod as_single;
#[cfg(feature = "futures")]
pub mod into_future;
