//! Company Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Company;

const TABLE: &str = "company";

#[derive(Clone)]
pub struct CompanyRepository {
    base: BaseRepository,
}

impl CompanyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all companies ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Company>> {
        let companies: Vec<Company> = self
            .base
            .db()
            .query("SELECT * FROM company ORDER BY name")
            .await?
            .take(0)?;
        Ok(companies)
    }

    /// Find company by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Company>> {
        let company: Option<Company> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(company)
    }

    /// Create a new company
    pub async fn create(&self, name: String) -> RepoResult<Company> {
        let company: Option<Company> = self
            .base
            .db()
            .create(TABLE)
            .content(Company { id: None, name })
            .await?;
        company.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// Rename a company
    pub async fn update(&self, id: &str, name: String) -> RepoResult<Company> {
        let rid = record_id(TABLE, id);
        let existing: Option<Company> = self.base.db().select(rid.clone()).await?;
        let mut company =
            existing.ok_or_else(|| RepoError::NotFound(format!("Company {id}")))?;
        company.id = None;
        company.name = name;
        let updated: Option<Company> = self.base.db().update(rid).content(company).await?;
        updated.ok_or_else(|| RepoError::Database("update returned no record".into()))
    }

    /// Delete a company and cascade to its sites and their tickets
    pub async fn delete_cascade(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id);
        let existing: Option<Company> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE ticket WHERE company_id = $company")
            .query("DELETE site WHERE company = $company")
            .bind(("company", rid.clone()))
            .await?
            .check()?;
        let _: Option<Company> = self.base.db().delete(rid).await?;
        Ok(true)
    }
}
