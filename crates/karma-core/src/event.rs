//! Activity events — the classifier's input.
//!
//! An event describes one thing that happened to one issue or pull request.
//! Events arrive from the upstream source in no guaranteed order and are
//! sorted chronologically before classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The lifecycle event kinds the scorer understands.
///
/// The set is closed on purpose: adding a variant forces every match over
/// it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
  Created,
  Closed,
  Merged,
  Labeled,
  Unlabeled,
}

/// A single issue or pull-request lifecycle event, as delivered by the
/// upstream activity source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
  /// Login of the user who performed the action.
  pub actor_id:         String,
  /// Issue or PR number the event belongs to.
  pub subject_id:       i64,
  pub kind:             ActivityKind,
  pub occurred_at:      DateTime<Utc>,
  /// Label name for `Labeled`/`Unlabeled` events; `None` otherwise.
  pub label:            Option<String>,
  /// `true` when the subject is a pull request. Only review targets are
  /// scored.
  pub is_review_target: bool,
}

/// Sort events chronologically, in place.
///
/// The classifier requires ascending `occurred_at` order and does not sort
/// on its own. The sort is stable, so same-instant events keep their
/// delivery order.
pub fn sort_by_occurrence(events: &mut [ActivityEvent]) {
  events.sort_by_key(|event| event.occurred_at);
}
