//! The upstream activity-event source abstraction.

use std::future::Future;

use crate::event::ActivityEvent;

/// Abstraction over whatever produces repository activity events — a live
/// forge client, a replayed event dump, a test double.
///
/// Implementations deliver events in no guaranteed order; callers sort
/// before classification. Retry and backoff policy belongs to the
/// implementation, not to consumers of the trait.
pub trait EventSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All issue and PR lifecycle events for `owner`/`repo`.
  fn activity_events<'a>(
    &'a self,
    owner: &'a str,
    repo: &'a str,
  ) -> impl Future<Output = Result<Vec<ActivityEvent>, Self::Error>> + Send + 'a;
}
