//! [`SqliteStore`] — the SQLite implementation of [`ScoreStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use karma_core::store::{RankedMember, ScoreStore};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Karma score store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ScoreStore impl ─────────────────────────────────────────────────────────

impl ScoreStore for SqliteStore {
  type Error = crate::Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();

    let value: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM kv_entries WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(value)
  }

  async fn put(&self, key: &str, value: &str) -> Result<()> {
    let key = key.to_owned();
    let value = value.to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
           ON CONFLICT (key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key, value],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn delete(&self, key: &str) -> Result<()> {
    let key = key.to_owned();

    // A key names either a plain value or a ranked collection; clearing
    // both tables in one transaction makes the delete atomic either way.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM kv_entries WHERE key = ?1",
          rusqlite::params![key],
        )?;
        tx.execute(
          "DELETE FROM ranked_members WHERE key = ?1",
          rusqlite::params![key],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn ranked_insert(
    &self,
    key: &str,
    members: Vec<RankedMember>,
  ) -> Result<()> {
    let key = key.to_owned();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO ranked_members (key, rank, member)
             VALUES (?1, ?2, ?3)",
          )?;
          for member in &members {
            stmt.execute(rusqlite::params![
              key,
              member.rank,
              member.member
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn ranked_range(
    &self,
    key: &str,
    min: i64,
    max: i64,
  ) -> Result<Vec<String>> {
    let key = key.to_owned();

    let members: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT member FROM ranked_members
           WHERE key = ?1 AND rank >= ?2 AND rank < ?3
           ORDER BY rank ASC, rowid ASC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![key, min, max], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(members)
  }
}
