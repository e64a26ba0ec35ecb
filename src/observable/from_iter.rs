use super::{Observable, Sink};

impl<Item, Err> Observable<Item, Err>
where
  Item: 'static,
  Err: 'static,
{
  /// Emits every element of `iter`, then completes.
  ///
  /// Stops early once the sink closes.
  pub fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Item> + Clone + Send + Sync + 'static,
  {
    Self::create(move |sink: &mut dyn Sink<Item, Err>| {
      for v in iter.clone() {
        if sink.is_closed() {
          return;
        }
        sink.next(v);
      }
      sink.complete();
    })
  }

  /// Completes without emitting.
  pub fn empty() -> Self { Self::create(|sink: &mut dyn Sink<Item, Err>| sink.complete()) }

  /// Fails with `err` without emitting.
  pub fn throw(err: Err) -> Self
  where
    Err: Clone + Send + Sync,
  {
    Self::create(move |sink: &mut dyn Sink<Item, Err>| sink.error(err.clone()))
  }
}
