//! Example: Traits Playground
//!
//! Subscribes every trait flavor into one `DisposeBag`, including a `Single`
//! that decodes JSON and reports a decoding failure.
//!
//! Run with `RUST_LOG=rxrust_traits=trace` to see the subscription lifecycle.

use rxrust_traits::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ==================================================================================
// 1. Errors and payloads
// ==================================================================================

#[derive(Debug, Error)]
enum TraitsError {
  #[error("single failed")]
  Single,
  #[error("maybe failed")]
  Maybe,
  #[error("completable failed")]
  Completable,
}

#[derive(Debug, Error)]
enum JsonError {
  #[error("decoding error: {0}")]
  Decoding(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct SomeJson {
  name: String,
}

// ==================================================================================
// 2. Single
// ==================================================================================

fn singles(bag: &DisposeBag) {
  Single::<_, TraitsError>::create(|emitter| emitter.succeed("✅"))
    .subscribe_with(
      SingleCallbacks::new()
        .on_success(|v| println!("Single 1 success: {v}"))
        .on_failure(|e| println!("Single 1 failure: {e}"))
        .on_disposed(|| println!("Single 1 disposed")),
    )
    .disposed_by(bag);

  Single::<&str, _>::create(|emitter| emitter.fail(TraitsError::Single))
    .subscribe(|outcome| match outcome {
      Ok(v) => println!("Single 2 success: {v}"),
      Err(e) => println!("Single 2 failure: {e}"),
    })
    .disposed_by(bag);

  let json = r#"{"my_name":"bae"}"#.to_string();
  Single::<SomeJson, JsonError>::create(move |emitter| match serde_json::from_str(&json) {
    Ok(decoded) => emitter.succeed(decoded),
    Err(e) => emitter.fail(e.into()),
  })
  .subscribe(|outcome| match outcome {
    Ok(v) => println!("Single 3 decoded: {v:?}"),
    Err(e) => println!("Single 3 {e}"),
  })
  .disposed_by(bag);
}

// ==================================================================================
// 3. Maybe and Completable
// ==================================================================================

fn maybes(bag: &DisposeBag) {
  Maybe::<_, TraitsError>::just("✅")
    .subscribe_with(
      MaybeCallbacks::new()
        .on_success(|v| println!("Maybe 1 success: {v}"))
        .on_completed(|| println!("Maybe 1 completed"))
        .on_disposed(|| println!("Maybe 1 disposed")),
    )
    .disposed_by(bag);

  Maybe::<&str, _>::create(|emitter| emitter.fail(TraitsError::Maybe))
    .subscribe_with(
      MaybeCallbacks::new()
        .on_error(|e| println!("Maybe 2 error: {e}"))
        .on_disposed(|| println!("Maybe 2 disposed")),
    )
    .disposed_by(bag);
}

fn completables(bag: &DisposeBag) {
  Completable::<TraitsError>::create(|emitter| emitter.complete())
    .subscribe_with(CompletableCallbacks::new().on_completed(|| println!("Completable 1 completed")))
    .disposed_by(bag);

  Completable::create(|emitter| emitter.fail(TraitsError::Completable))
    .subscribe_with(
      CompletableCallbacks::new()
        .on_error(|e| println!("Completable 2 error: {e}"))
        .on_disposed(|| println!("Completable 2 disposed")),
    )
    .disposed_by(bag);
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let bag = DisposeBag::new();
  singles(&bag);
  maybes(&bag);
  completables(&bag);

  Observable::<_, TraitsError>::from_iter(["one", "two"])
    .as_maybe()
    .subscribe(|outcome| println!("as_maybe over two elements: {outcome:?}"))
    .disposed_by(&bag);

  println!("bag holds {} live subscriptions", bag.len());
}
