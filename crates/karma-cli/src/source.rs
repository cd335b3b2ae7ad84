//! Replay event source.

use std::path::PathBuf;

use thiserror::Error;

use karma_core::{event::ActivityEvent, source::EventSource};

#[derive(Debug, Error)]
pub enum ReplayError {
  #[error("failed to read event dump: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse event dump: {0}")]
  Json(#[from] serde_json::Error),
}

/// Replays a JSON dump of activity events, standing in for a live forge
/// client.
pub struct ReplaySource {
  path: PathBuf,
}

impl ReplaySource {
  pub fn new(path: PathBuf) -> Self { Self { path } }
}

impl EventSource for ReplaySource {
  type Error = ReplayError;

  async fn activity_events(
    &self,
    _owner: &str,
    _repo: &str,
  ) -> Result<Vec<ActivityEvent>, ReplayError> {
    let raw = tokio::fs::read_to_string(&self.path).await?;
    Ok(serde_json::from_str(&raw)?)
  }
}
