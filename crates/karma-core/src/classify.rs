//! The scoring state machine: activity events in, contributions out.
//!
//! Each subject moves through a one-way review cycle. The submitter opens
//! the issue or PR, marks it ready with the review label, and a reviewer
//! either strips the label or closes/merges it. The first review signal
//! latches; nothing a subject does after `Reviewed` scores again.

use std::collections::HashMap;

use crate::{
  contribution::{Contribution, ContributionKind},
  event::{ActivityEvent, ActivityKind},
};

/// Per-subject review tracking state.
///
/// Transitions only ever move forward: `Submitted` → `ReadyForReview` →
/// `Reviewed`. The map holding these lives for exactly one [`classify`]
/// call and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewState {
  Submitted,
  ReadyForReview,
  Reviewed,
}

/// Derive scoring contributions from a chronological event stream.
///
/// `events` must be sorted ascending by `occurred_at`; the classifier does
/// not sort. Output order is input order filtered to emissions. The
/// tracking map is local to the call, so independent batches can be
/// classified concurrently.
pub fn classify(
  events: &[ActivityEvent],
  review_label: &str,
) -> Vec<Contribution> {
  let mut contributions = Vec::new();
  let mut states: HashMap<i64, ReviewState> = HashMap::new();

  for event in events {
    let state = states
      .entry(event.subject_id)
      .or_insert(ReviewState::Submitted);

    match event.kind {
      // Opening the issue or PR counts as a submission.
      ActivityKind::Created => {
        contributions.push(Contribution {
          actor_id:  event.actor_id.clone(),
          kind:      ContributionKind::Opened,
          timestamp: event.occurred_at,
        });
      }
      // The submitter applies the review label when the work is ready.
      // `Reviewed` is terminal, so a relabel cannot re-arm the cycle.
      ActivityKind::Labeled => {
        if event.label.as_deref() == Some(review_label)
          && *state != ReviewState::Reviewed
        {
          *state = ReviewState::ReadyForReview;
        }
      }
      // A reviewer removing the review label from a ready subject is a
      // review. The state check keeps a repeated unlabel, or an unlabel
      // outside the ready cycle, from scoring.
      ActivityKind::Unlabeled => {
        if event.label.as_deref() == Some(review_label)
          && *state == ReviewState::ReadyForReview
        {
          *state = ReviewState::Reviewed;
          contributions.push(Contribution {
            actor_id:  event.actor_id.clone(),
            kind:      ContributionKind::Reviewed,
            timestamp: event.occurred_at,
          });
        }
      }
      // Closing or merging from the ready state is shorthand for a review.
      ActivityKind::Closed | ActivityKind::Merged => {
        if *state == ReviewState::ReadyForReview {
          *state = ReviewState::Reviewed;
          contributions.push(Contribution {
            actor_id:  event.actor_id.clone(),
            kind:      ContributionKind::Reviewed,
            timestamp: event.occurred_at,
          });
        }
      }
    }
  }

  contributions
}
