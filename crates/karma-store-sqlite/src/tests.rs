//! Integration tests for `SqliteStore` against an in-memory database.

use karma_core::store::{RankedMember, ScoreStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn member(rank: i64, body: &str) -> RankedMember {
  RankedMember { rank, member: body.to_owned() }
}

// ─── Key-value slots ─────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_key_returns_none() {
  let s = store().await;
  assert_eq!(s.get("nope").await.unwrap(), None);
}

#[tokio::test]
async fn put_and_get_roundtrip() {
  let s = store().await;
  s.put("pointer", "gen-1").await.unwrap();
  assert_eq!(s.get("pointer").await.unwrap().as_deref(), Some("gen-1"));
}

#[tokio::test]
async fn put_overwrites_in_place() {
  let s = store().await;
  s.put("pointer", "gen-1").await.unwrap();
  s.put("pointer", "gen-2").await.unwrap();
  assert_eq!(s.get("pointer").await.unwrap().as_deref(), Some("gen-2"));
}

#[tokio::test]
async fn delete_removes_value() {
  let s = store().await;
  s.put("pointer", "gen-1").await.unwrap();
  s.delete("pointer").await.unwrap();
  assert_eq!(s.get("pointer").await.unwrap(), None);
}

#[tokio::test]
async fn delete_missing_key_succeeds() {
  let s = store().await;
  s.delete("never-written").await.unwrap();
}

// ─── Ranked collections ──────────────────────────────────────────────────────

#[tokio::test]
async fn range_bounds_are_start_inclusive_end_exclusive() {
  let s = store().await;
  s.ranked_insert("events", vec![
    member(10, "a"),
    member(20, "b"),
    member(30, "c"),
  ])
  .await
  .unwrap();

  let members = s.ranked_range("events", 10, 30).await.unwrap();
  assert_eq!(members, vec!["a".to_owned(), "b".to_owned()]);
}

#[tokio::test]
async fn range_returns_members_in_rank_order() {
  let s = store().await;
  s.ranked_insert("events", vec![
    member(30, "late"),
    member(10, "early"),
    member(20, "middle"),
  ])
  .await
  .unwrap();

  let members = s.ranked_range("events", 0, 100).await.unwrap();
  assert_eq!(members, vec![
    "early".to_owned(),
    "middle".to_owned(),
    "late".to_owned(),
  ]);
}

#[tokio::test]
async fn range_of_missing_collection_is_empty() {
  let s = store().await;
  assert!(s.ranked_range("nothing", 0, 100).await.unwrap().is_empty());
}

#[tokio::test]
async fn inserts_append_to_an_existing_collection() {
  let s = store().await;
  s.ranked_insert("events", vec![member(1, "a")]).await.unwrap();
  s.ranked_insert("events", vec![member(2, "b")]).await.unwrap();

  let members = s.ranked_range("events", 0, 10).await.unwrap();
  assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn collections_are_isolated_by_key() {
  let s = store().await;
  s.ranked_insert("events:gen-1", vec![member(1, "old")])
    .await
    .unwrap();
  s.ranked_insert("events:gen-2", vec![member(1, "new")])
    .await
    .unwrap();

  assert_eq!(s.ranked_range("events:gen-1", 0, 10).await.unwrap(), vec![
    "old".to_owned()
  ]);
  assert_eq!(s.ranked_range("events:gen-2", 0, 10).await.unwrap(), vec![
    "new".to_owned()
  ]);
}

#[tokio::test]
async fn delete_removes_a_whole_collection() {
  let s = store().await;
  s.ranked_insert("events:gen-1", vec![member(1, "a"), member(2, "b")])
    .await
    .unwrap();
  s.ranked_insert("events:gen-2", vec![member(1, "c")])
    .await
    .unwrap();

  s.delete("events:gen-1").await.unwrap();

  assert!(s.ranked_range("events:gen-1", 0, 10).await.unwrap().is_empty());
  assert_eq!(s.ranked_range("events:gen-2", 0, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_insert_is_a_no_op() {
  let s = store().await;
  s.ranked_insert("events", vec![]).await.unwrap();
  assert!(s.ranked_range("events", 0, 10).await.unwrap().is_empty());
}
