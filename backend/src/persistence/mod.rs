//! SQLite-backed document store for lead submissions.
//!
//! Submissions are append-only documents: the payload is stored as received,
//! plus a server-stamped `created_at`. There are no updates, no deletes, and
//! no uniqueness constraint; two identical submissions yield two documents.
//!
//! The store is constructed once in `main` and injected into handlers as
//! `web::Data`. The handle only carries the database path; each operation
//! opens its own short-lived connection, so it can be cloned freely across
//! actix workers.

use log::debug;
use rusqlite::{params, Connection};
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentStore {
    path: String,
}

impl DocumentStore {
    /// Creates the handle and bootstraps the schema.
    pub fn open(path: &str) -> Result<Self, String> {
        let store = Self {
            path: path.to_string(),
        };
        let conn = store.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS submissions (
                 id TEXT PRIMARY KEY,
                 collection TEXT NOT NULL,
                 payload TEXT NOT NULL,
                 created_at TEXT NOT NULL
             )",
            [],
        )
        .map_err(|e| e.to_string())?;
        Ok(store)
    }

    /// Inserts one document into `collection` and returns its id. The
    /// creation timestamp is stamped by the database, not the caller.
    pub fn insert(
        &self,
        collection: &str,
        payload: &serde_json::Value,
    ) -> Result<String, String> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO submissions (id, collection, payload, created_at)
             VALUES (?1, ?2, ?3, datetime('now'))",
            params![&id, collection, &body],
        )
        .map_err(|e| e.to_string())?;
        debug!("stored {} document {}", collection, id);
        Ok(id)
    }

    fn connect(&self) -> Result<Connection, String> {
        Connection::open(&self.path).map_err(|e| e.to_string())
    }
}
