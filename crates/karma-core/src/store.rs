//! The `ScoreStore` trait — the external key-value / sorted-collection
//! store that all coordination goes through.
//!
//! The trait is implemented by storage backends (e.g. `karma-store-sqlite`).
//! Higher layers (`karma-scores`, `karma-cli`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

/// A member of a ranked collection: an opaque payload ordered by an integer
/// rank (Unix seconds, for contribution sets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMember {
  pub rank:   i64,
  pub member: String,
}

/// Abstraction over the external store.
///
/// Single-key `get`/`put` must be atomic — the generation pointer swap
/// relies on it. No other cross-key guarantee is assumed.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait ScoreStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read a plain value. `Ok(None)` means the key has never been written.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write (or overwrite) a plain value.
  fn put<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a plain value or an entire ranked collection in one atomic
  /// operation. Deleting a missing key succeeds.
  fn delete<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Insert members into the ranked collection at `key`, creating the
  /// collection if necessary.
  fn ranked_insert<'a>(
    &'a self,
    key: &'a str,
    members: Vec<RankedMember>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// All members of the ranked collection at `key` with
  /// `min <= rank < max`, ascending by rank.
  fn ranked_range<'a>(
    &'a self,
    key: &'a str,
    min: i64,
    max: i64,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + 'a;
}
