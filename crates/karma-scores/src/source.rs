//! Event-source composition.

use chrono::Duration;

use karma_core::{event::ActivityEvent, source::EventSource, store::ScoreStore};

use crate::{cache::read_through, keys};

/// Decorates an [`EventSource`] with read-through caching of the full
/// event list.
///
/// The wrapped source's errors pass through unchanged; cache degradation
/// is absorbed by [`read_through`].
#[derive(Clone)]
pub struct CachedEvents<S, U> {
  store:         S,
  upstream:      U,
  max_staleness: Duration,
}

impl<S, U> CachedEvents<S, U> {
  pub fn new(store: S, upstream: U, max_staleness: Duration) -> Self {
    Self { store, upstream, max_staleness }
  }
}

impl<S, U> EventSource for CachedEvents<S, U>
where
  S: ScoreStore,
  U: EventSource,
{
  type Error = U::Error;

  async fn activity_events(
    &self,
    owner: &str,
    repo: &str,
  ) -> Result<Vec<ActivityEvent>, Self::Error> {
    let key = keys::event_cache(owner, repo);
    read_through(&self.store, &key, self.max_staleness, || {
      self.upstream.activity_events(owner, repo)
    })
    .await
  }
}
