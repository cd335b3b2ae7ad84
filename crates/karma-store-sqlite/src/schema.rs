//! SQL schema for the SQLite score store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Plain key-value slots: generation pointers and read-through cache
-- entries. `put` overwrites in place.
CREATE TABLE IF NOT EXISTS kv_entries (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Ranked collections, one logical collection per key. For contribution
-- sets the rank is the contribution's Unix-seconds timestamp.
CREATE TABLE IF NOT EXISTS ranked_members (
    key    TEXT    NOT NULL,
    rank   INTEGER NOT NULL,
    member TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS ranked_members_key_rank_idx
    ON ranked_members(key, rank);

PRAGMA user_version = 1;
";
