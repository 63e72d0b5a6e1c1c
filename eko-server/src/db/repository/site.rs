//! Site Repository

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Site;

const TABLE: &str = "site";

#[derive(Clone)]
pub struct SiteRepository {
    base: BaseRepository,
}

impl SiteRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all sites, optionally scoped to one company, ordered by name
    pub async fn find_all(&self, company: Option<RecordId>) -> RepoResult<Vec<Site>> {
        let sites: Vec<Site> = match company {
            Some(company) => {
                self.base
                    .db()
                    .query("SELECT * FROM site WHERE company = $company ORDER BY site_name")
                    .bind(("company", company))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM site ORDER BY site_name")
                    .await?
                    .take(0)?
            }
        };
        Ok(sites)
    }

    /// Find site by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Site>> {
        let site: Option<Site> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(site)
    }

    /// Find the site owning a PIN. PINs are unique, so at most one row.
    pub async fn find_by_pin(&self, pin: &str) -> RepoResult<Option<Site>> {
        let pin = pin.to_string();
        let sites: Vec<Site> = self
            .base
            .db()
            .query("SELECT * FROM site WHERE pin = $pin LIMIT 1")
            .bind(("pin", pin))
            .await?
            .take(0)?;
        Ok(sites.into_iter().next())
    }

    /// Whether a PIN is already assigned to a different site
    pub async fn pin_in_use(&self, pin: &str, exclude: Option<&RecordId>) -> RepoResult<bool> {
        let existing = self.find_by_pin(pin).await?;
        Ok(match (existing.and_then(|s| s.id), exclude) {
            (Some(found), Some(excluded)) => found != *excluded,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }

    /// Create a new site
    pub async fn create(&self, site: Site) -> RepoResult<Site> {
        let created: Option<Site> = self.base.db().create(TABLE).content(site).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// Replace a site's content
    pub async fn update(&self, id: &str, mut site: Site) -> RepoResult<Site> {
        let rid = record_id(TABLE, id);
        // The record id is addressed by the update itself
        site.id = None;
        let updated: Option<Site> = self.base.db().update(rid).content(site).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Site {id}")))
    }

    /// Delete a site and cascade to its tickets
    pub async fn delete_cascade(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id);
        let existing: Option<Site> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE ticket WHERE site_id = $site")
            .bind(("site", rid.clone()))
            .await?
            .check()?;
        let _: Option<Site> = self.base.db().delete(rid).await?;
        Ok(true)
    }
}
