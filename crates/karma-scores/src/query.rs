//! Range queries over the current generation.

use chrono::{DateTime, TimeZone, Utc};

use karma_core::{
  contribution::Contribution,
  score::{ActorScore, aggregate, rank},
  store::ScoreStore,
};

use crate::{
  error::{Error, Result},
  keys,
};

// ─── Time windows ────────────────────────────────────────────────────────────

/// A half-open `[start, end)` query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
  pub start: DateTime<Utc>,
  pub end:   DateTime<Utc>,
}

impl TimeWindow {
  /// The calendar month beginning at `year`/`month` (1-based), UTC.
  ///
  /// December's end boundary rolls into January of the next year. Returns
  /// `None` for a month outside 1–12.
  pub fn month(year: i32, month: u32) -> Option<Self> {
    if !(1..=12).contains(&month) {
      return None;
    }
    let (end_year, end_month) = if month == 12 {
      (year + 1, 1)
    } else {
      (year, month + 1)
    };
    let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
    let end = Utc
      .with_ymd_and_hms(end_year, end_month, 1, 0, 0, 0)
      .single()?;
    Some(Self { start, end })
  }
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// The top `limit` actor scores for `owner`/`repo` within `window`.
///
/// Returns `Ok(None)` when no generation has ever been published for the
/// repository — a normal outcome, distinct from a corrupt generation,
/// which is an error. Truncation to `limit` happens after ranking, never
/// before.
pub async fn high_scores<S>(
  store: &S,
  owner: &str,
  repo: &str,
  window: TimeWindow,
  limit: usize,
) -> Result<Option<Vec<ActorScore>>>
where
  S: ScoreStore,
{
  let pointer_key = keys::generation_pointer(owner, repo);
  let generation = match store.get(&pointer_key).await.map_err(Error::store)? {
    Some(id) if !id.is_empty() => id,
    _ => return Ok(None),
  };

  let set_key = keys::generation_set(owner, repo, &generation);
  let members = store
    .ranked_range(&set_key, window.start.timestamp(), window.end.timestamp())
    .await
    .map_err(Error::store)?;

  let mut contributions = Vec::with_capacity(members.len());
  for member in &members {
    let contribution = Contribution::from_wire(member).map_err(|source| {
      Error::CorruptGeneration { generation: generation.clone(), source }
    })?;
    contributions.push(contribution);
  }

  let mut ranked = rank(aggregate(&contributions));
  ranked.truncate(limit);
  Ok(Some(ranked))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn month_window_covers_one_calendar_month() {
    let window = TimeWindow::month(2016, 3).unwrap();
    assert_eq!(window.start, Utc.with_ymd_and_hms(2016, 3, 1, 0, 0, 0).unwrap());
    assert_eq!(window.end, Utc.with_ymd_and_hms(2016, 4, 1, 0, 0, 0).unwrap());
  }

  #[test]
  fn december_window_rolls_into_the_next_year() {
    let window = TimeWindow::month(2015, 12).unwrap();
    assert_eq!(
      window.start,
      Utc.with_ymd_and_hms(2015, 12, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(window.end, Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap());
  }

  #[test]
  fn out_of_range_months_are_rejected() {
    assert!(TimeWindow::month(2016, 0).is_none());
    assert!(TimeWindow::month(2016, 13).is_none());
  }
}
