//! Staleness-based read-through caching over the key-value half of the
//! store.
//!
//! Cache trouble of any kind — missing key, malformed entry, store read or
//! write failure — degrades to a fallback fetch and a log line. The only
//! error a caller can see is the fallback's own.

use std::future::Future;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Serialize, de::DeserializeOwned};

use karma_core::store::ScoreStore;

/// Stored entry form: `"<unix-seconds>|<json-payload>"`. The timestamp
/// prefix lets the staleness check run without deserialising the payload.
fn encode_entry<T: Serialize>(
  fetched_at: DateTime<Utc>,
  payload: &T,
) -> Result<String, serde_json::Error> {
  Ok(format!(
    "{}|{}",
    fetched_at.timestamp(),
    serde_json::to_string(payload)?
  ))
}

fn decode_entry(raw: &str) -> Option<(DateTime<Utc>, &str)> {
  let (seconds, json) = raw.split_once('|')?;
  let seconds: i64 = seconds.parse().ok()?;
  let fetched_at = Utc.timestamp_opt(seconds, 0).single()?;
  Some((fetched_at, json))
}

/// Read `key` from the cache, falling back to `fetch` when the entry is
/// missing, malformed, or older than `max_staleness`.
///
/// A negative `max_staleness` makes every entry stale, which forces a
/// refetch while still rewriting the cache for other readers.
///
/// A `fetch` error propagates unchanged, with no cache write. Store errors
/// never propagate: a failed read is a miss, and a failed write-back still
/// returns the fresh payload.
pub async fn read_through<S, T, E, F, Fut>(
  store: &S,
  key: &str,
  max_staleness: Duration,
  fetch: F,
) -> Result<T, E>
where
  S: ScoreStore,
  T: Serialize + DeserializeOwned,
  F: FnOnce() -> Fut,
  Fut: Future<Output = Result<T, E>>,
{
  match store.get(key).await {
    Ok(Some(raw)) => match decode_entry(&raw) {
      Some((fetched_at, json)) if Utc::now() - fetched_at <= max_staleness => {
        match serde_json::from_str(json) {
          Ok(payload) => {
            tracing::debug!(key, "cache hit");
            return Ok(payload);
          }
          Err(error) => {
            tracing::warn!(key, %error, "cached payload failed to decode, refetching");
          }
        }
      }
      Some(_) => tracing::debug!(key, "cache entry stale, refetching"),
      None => tracing::warn!(key, "malformed cache entry, refetching"),
    },
    Ok(None) => tracing::debug!(key, "cache miss"),
    Err(error) => tracing::warn!(key, %error, "cache read failed, refetching"),
  }

  let payload = fetch().await?;

  match encode_entry(Utc::now(), &payload) {
    Ok(entry) => {
      if let Err(error) = store.put(key, &entry).await {
        tracing::warn!(key, %error, "cache write failed");
      }
    }
    Err(error) => {
      tracing::warn!(key, %error, "payload failed to encode for caching");
    }
  }

  Ok(payload)
}
