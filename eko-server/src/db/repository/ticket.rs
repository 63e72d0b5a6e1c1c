//! Ticket Repository
//!
//! Tickets are append-only; there is no update path. Deletion only
//! happens through the company/site cascade.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Ticket;

const TABLE: &str = "ticket";

/// Admin ticket listing filters. All optional, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Inclusive lower bound, Unix millis
    pub start: Option<i64>,
    /// Exclusive upper bound, Unix millis
    pub end: Option<i64>,
    pub company: Option<RecordId>,
    pub site: Option<RecordId>,
    /// Case-insensitive substring over guard/site/company name
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct TicketRepository {
    base: BaseRepository,
}

impl TicketRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new ticket
    pub async fn insert(&self, ticket: Ticket) -> RepoResult<Ticket> {
        let created: Option<Ticket> = self.base.db().create(TABLE).content(ticket).await?;
        created.ok_or_else(|| RepoError::Database("insert returned no record".into()))
    }

    /// All tickets for one site, oldest first.
    ///
    /// The budget evaluator filters this ledger to the active window;
    /// keeping the query unwindowed keeps one code path for budget
    /// usage, reporting, and admission.
    pub async fn list_for_site(&self, site: RecordId) -> RepoResult<Vec<Ticket>> {
        let tickets: Vec<Ticket> = self
            .base
            .db()
            .query("SELECT * FROM ticket WHERE site_id = $site ORDER BY created_at")
            .bind(("site", site))
            .await?
            .take(0)?;
        Ok(tickets)
    }

    /// Admin listing with optional filters, newest first
    pub async fn list_filtered(&self, filter: TicketFilter) -> RepoResult<Vec<Ticket>> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.start.is_some() {
            conditions.push("created_at >= $start");
        }
        if filter.end.is_some() {
            conditions.push("created_at < $end");
        }
        if filter.company.is_some() {
            conditions.push("company_id = $company");
        }
        if filter.site.is_some() {
            conditions.push("site_id = $site");
        }
        if filter.search.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(guard_name), $search) \
                 OR string::contains(string::lowercase(site_name), $search) \
                 OR string::contains(string::lowercase(company_name), $search))",
            );
        }

        let mut sql = String::from("SELECT * FROM ticket");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self.base.db().query(sql);
        if let Some(start) = filter.start {
            query = query.bind(("start", start));
        }
        if let Some(end) = filter.end {
            query = query.bind(("end", end));
        }
        if let Some(company) = filter.company {
            query = query.bind(("company", company));
        }
        if let Some(site) = filter.site {
            query = query.bind(("site", site));
        }
        if let Some(search) = filter.search {
            query = query.bind(("search", search.to_lowercase()));
        }

        let tickets: Vec<Ticket> = query.await?.take(0)?;
        Ok(tickets)
    }
}
