//! Scoring contributions — the persisted unit of the high-score pipeline.
//!
//! A contribution is what survives classification: one actor did one
//! score-worthy thing at one instant. Contributions are written into
//! per-generation storage as JSON and read back by the range query, so the
//! wire form is part of the storage contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// How an actor contributed.
///
/// The wire literals `"opened"` and `"reviewed"` are a fixed vocabulary;
/// any other string on read is a deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
  Opened,
  Reviewed,
}

/// A single scoring contribution.
///
/// Stored as `{"actor_id": ..., "event_type": ..., "timestamp": ...}` with
/// the timestamp in RFC 3339 at fixed millisecond precision, so the value
/// round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
  pub actor_id:  String,
  #[serde(rename = "event_type")]
  pub kind:      ContributionKind,
  #[serde(with = "iso_millis")]
  pub timestamp: DateTime<Utc>,
}

impl Contribution {
  /// Serialize to the stored JSON form.
  pub fn to_wire(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }

  /// Deserialize from the stored JSON form.
  pub fn from_wire(raw: &str) -> Result<Self> {
    Ok(serde_json::from_str(raw)?)
  }
}

/// RFC 3339 timestamps with fixed millisecond precision.
///
/// Sub-millisecond digits are dropped on write; the round-trip contract is
/// exact to the millisecond.
mod iso_millis {
  use chrono::{DateTime, SecondsFormat, Utc};
  use serde::{Deserialize as _, Deserializer, Serializer, de};

  pub fn serialize<S>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
      .map(|dt| dt.with_timezone(&Utc))
      .map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;

  #[test]
  fn wire_shape_is_stable() {
    let contribution = Contribution {
      actor_id:  "tester1".into(),
      kind:      ContributionKind::Opened,
      timestamp: Utc.with_ymd_and_hms(2016, 3, 1, 12, 30, 45).unwrap(),
    };

    assert_eq!(
      contribution.to_wire().unwrap(),
      r#"{"actor_id":"tester1","event_type":"opened","timestamp":"2016-03-01T12:30:45.000Z"}"#,
    );
  }

  #[test]
  fn round_trips_to_millisecond_precision() {
    let timestamp = Utc
      .with_ymd_and_hms(2016, 3, 1, 12, 30, 45)
      .unwrap()
      .checked_add_signed(chrono::Duration::milliseconds(123))
      .unwrap();
    let contribution = Contribution {
      actor_id: "tester2".into(),
      kind:     ContributionKind::Reviewed,
      timestamp,
    };

    let decoded =
      Contribution::from_wire(&contribution.to_wire().unwrap()).unwrap();
    assert_eq!(decoded, contribution);
  }

  #[test]
  fn sub_millisecond_digits_are_dropped_on_write() {
    let timestamp = Utc.timestamp_nanos(1_456_834_245_123_456_789);
    let contribution = Contribution {
      actor_id: "tester1".into(),
      kind:     ContributionKind::Opened,
      timestamp,
    };

    let decoded =
      Contribution::from_wire(&contribution.to_wire().unwrap()).unwrap();
    assert_eq!(decoded.timestamp, Utc.timestamp_nanos(1_456_834_245_123_000_000));
  }

  #[test]
  fn unknown_event_type_is_rejected() {
    let raw = r#"{"actor_id":"x","event_type":"starred","timestamp":"2016-03-01T00:00:00.000Z"}"#;
    assert!(Contribution::from_wire(raw).is_err());
  }
}
