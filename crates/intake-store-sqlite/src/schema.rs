//! SQL schema for the intake SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Submissions are insert-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS submissions (
    submission_id  TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    email          TEXT NOT NULL,
    company        TEXT NOT NULL,
    interest       TEXT NOT NULL,
    interest_label TEXT NOT NULL,
    message        TEXT NOT NULL,
    created_at     TEXT NOT NULL,   -- UTC, whole seconds, YYYY-MM-DDTHH:MM:SSZ
    status         TEXT NOT NULL DEFAULT 'new'
);

CREATE INDEX IF NOT EXISTS submissions_created_idx ON submissions(created_at);

PRAGMA user_version = 1;
";
