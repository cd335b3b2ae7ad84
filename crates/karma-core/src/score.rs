//! Score aggregation and ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::contribution::{Contribution, ContributionKind};

/// Points awarded for opening a submission.
pub const OPENED_POINTS: i64 = 200;

/// Points awarded for reviewing one.
pub const REVIEWED_POINTS: i64 = 1000;

/// An actor's total score, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorScore {
  pub actor_id: String,
  pub score:    i64,
}

/// Fold contributions into a per-actor total.
///
/// Pure summation by actor, so the result is independent of input order —
/// upstream delivery order is only guaranteed per subject.
pub fn aggregate(contributions: &[Contribution]) -> HashMap<String, i64> {
  let mut totals: HashMap<String, i64> = HashMap::new();
  for contribution in contributions {
    let points = match contribution.kind {
      ContributionKind::Opened => OPENED_POINTS,
      ContributionKind::Reviewed => REVIEWED_POINTS,
    };
    *totals.entry(contribution.actor_id.clone()).or_insert(0) += points;
  }
  totals
}

/// Rank a score map descending. Ties break ascending on actor id so the
/// output is deterministic.
pub fn rank(totals: HashMap<String, i64>) -> Vec<ActorScore> {
  let mut ranked: Vec<ActorScore> = totals
    .into_iter()
    .map(|(actor_id, score)| ActorScore { actor_id, score })
    .collect();
  ranked.sort_by(|a, b| {
    b.score
      .cmp(&a.score)
      .then_with(|| a.actor_id.cmp(&b.actor_id))
  });
  ranked
}
