//! Generation publication and rotation.
//!
//! A generation is fully written before the pointer moves, and the
//! superseded generation outlives the pointer swap by a grace period, so a
//! reader that resolved the pointer always finishes its range read against
//! intact data. The cost is a bounded window in which two generations
//! exist, and a leaked collection when a delete fails.

use std::time::Duration;

use karma_core::{
  classify::classify,
  contribution::Contribution,
  event::sort_by_occurrence,
  source::EventSource,
  store::{RankedMember, ScoreStore},
};

use crate::{
  error::{Error, Result},
  keys,
  tag::GenerationTagger,
};

/// How long a superseded generation stays readable after the pointer
/// moves. Must exceed the slowest expected reader.
pub const RECLAIM_GRACE: Duration = Duration::from_secs(5);

/// Write `contributions` as a fresh generation for `owner`/`repo`, swing
/// the pointer over, and reclaim the generation it replaced.
///
/// Not safe to run concurrently with itself for the same repository —
/// racing publishers could reclaim a generation a third publisher just
/// made current. The external scheduler is expected to serialize publish
/// runs per repository.
pub async fn publish<S, T>(
  store: &S,
  tagger: &T,
  owner: &str,
  repo: &str,
  contributions: &[Contribution],
) -> Result<()>
where
  S: ScoreStore,
  T: GenerationTagger,
{
  let generation = tagger.generation_tag().map_err(Error::tag)?;

  let mut members = Vec::with_capacity(contributions.len());
  for contribution in contributions {
    match contribution.to_wire() {
      Ok(member) => members.push(RankedMember {
        rank: contribution.timestamp.timestamp(),
        member,
      }),
      // An unencodable contribution is dropped rather than failing the
      // whole batch.
      Err(error) => {
        tracing::error!(%error, "a contribution will be dropped");
      }
    }
  }

  let set_key = keys::generation_set(owner, repo, &generation);
  store
    .ranked_insert(&set_key, members)
    .await
    .map_err(Error::store)?;

  // The pointer read happens before the swap; an error here only disables
  // reclamation below, it never blocks publication.
  let pointer_key = keys::generation_pointer(owner, repo);
  let previous = store.get(&pointer_key).await;
  store
    .put(&pointer_key, &generation)
    .await
    .map_err(Error::store)?;

  if let Ok(Some(previous)) = previous
    && !previous.is_empty()
  {
    tokio::time::sleep(RECLAIM_GRACE).await;
    let old_key = keys::generation_set(owner, repo, &previous);
    if let Err(error) = store.delete(&old_key).await {
      tracing::warn!(
        key = %old_key,
        %error,
        "failed to reclaim previous generation; recovered",
      );
    }
  }

  Ok(())
}

/// Fetch, classify, and publish in one step — the unit the periodic
/// prewarm scheduler invokes.
///
/// Only review targets (pull requests) are scored; everything else the
/// source delivers is filtered out here.
pub async fn prewarm_high_scores<U, S, T>(
  source: &U,
  store: &S,
  tagger: &T,
  owner: &str,
  repo: &str,
  review_label: &str,
) -> Result<()>
where
  U: EventSource,
  S: ScoreStore,
  T: GenerationTagger,
{
  let mut events = source
    .activity_events(owner, repo)
    .await
    .map_err(Error::upstream)?;

  events.retain(|event| event.is_review_target);
  sort_by_occurrence(&mut events);

  let contributions = classify(&events, review_label);
  publish(store, tagger, owner, repo, &contributions).await
}
