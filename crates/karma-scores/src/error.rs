//! Error type for the high-score pipeline.
//!
//! Cache degradation is deliberately absent: a cache that cannot be read or
//! written is logged and routed around, never surfaced (see
//! [`crate::cache`]). Reclamation failures in the rotation protocol are
//! likewise recovered in place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The upstream activity source failed. Fatal to the current prewarm
  /// attempt; retry policy belongs to whatever schedules it.
  #[error("upstream activity source error: {0}")]
  Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The external store failed an operation the pipeline cannot recover
  /// from.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A generation id could not be produced. Nothing has been written when
  /// this is returned.
  #[error("failed to generate a generation id: {0}")]
  Tag(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A stored contribution failed to deserialize during a range read.
  /// The generation is corrupt and the whole query fails; a partial
  /// leaderboard would be silently wrong.
  #[error("corrupt contribution in generation {generation:?}: {source}")]
  CorruptGeneration {
    generation: String,
    #[source]
    source:     karma_core::Error,
  },
}

impl Error {
  pub(crate) fn upstream<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Upstream(Box::new(err))
  }

  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  pub(crate) fn tag<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Tag(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
