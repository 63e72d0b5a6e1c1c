//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.

pub mod company;
pub mod site;
pub mod ticket;

// Re-exports
pub use company::CompanyRepository;
pub use site::SiteRepository;
pub use ticket::{TicketFilter, TicketRepository};

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" strings on the API, RecordId internally
// =============================================================================

/// Build a RecordId from an API id string, accepting both the bare key
/// and the "table:key" form.
pub fn record_id(table: &str, id: &str) -> RecordId {
    let key = id
        .strip_prefix(&format!("{table}:"))
        .unwrap_or(id)
        .trim_matches(['⟨', '⟩']);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
