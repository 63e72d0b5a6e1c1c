//! Site API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::budget::calculator::{to_decimal, to_f64};
use crate::budget::used_in_window;
use crate::core::ServerState;
use crate::db::models::Site as DbSite;
use crate::db::repository::{CompanyRepository, SiteRepository, TicketRepository, record_id};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_budget, validate_pin, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::garments::is_garment_key;
use shared::models::{BudgetUsage, Pricing, Site, SiteCreate, SiteUpdate};

#[derive(Debug, Deserialize)]
pub struct SiteListQuery {
    pub company_id: Option<String>,
}

/// GET /api/admin/sites?company_id=...
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SiteListQuery>,
) -> AppResult<Json<AppResponse<Vec<Site>>>> {
    let company = query
        .company_id
        .as_deref()
        .map(|id| record_id("company", id));

    let sites = SiteRepository::new(state.get_db()).find_all(company).await?;
    Ok(ok(sites.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/sites/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Site>>> {
    let site = SiteRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Site {} not found", id)))?;
    Ok(ok(site.into()))
}

/// POST /api/admin/sites
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SiteCreate>,
) -> AppResult<Json<AppResponse<Site>>> {
    let db = state.get_db();

    validate_required_text(&payload.site_name, "site_name", MAX_NAME_LEN)?;
    if payload.site_address.len() > MAX_ADDRESS_LEN {
        return Err(AppError::validation("site_address is too long"));
    }
    validate_pin(&payload.pin)?;
    validate_pricing(&payload.pricing)?;
    if let Some(budget) = &payload.budget {
        validate_budget(budget)?;
    }

    // The owning company must exist
    let company = CompanyRepository::new(db.clone())
        .find_by_id(&payload.company_id)
        .await?
        .ok_or_else(|| {
            AppError::validation(format!("Company {} does not exist", payload.company_id))
        })?;
    let company_rid = company
        .id
        .ok_or_else(|| AppError::internal("company row without id"))?;

    // PIN uniqueness is what makes guard lookup unambiguous
    let sites = SiteRepository::new(db);
    if sites.pin_in_use(&payload.pin, None).await? {
        return Err(AppError::conflict("PIN is already in use by another site"));
    }

    let site = sites
        .create(DbSite {
            id: None,
            company: company_rid,
            site_name: payload.site_name.trim().to_string(),
            site_address: payload.site_address.trim().to_string(),
            pin: payload.pin,
            pricing: payload.pricing,
            budget: payload.budget,
        })
        .await?;

    tracing::info!(target: "admin", site = %site.site_name, "Site created");
    Ok(ok(site.into()))
}

/// PUT /api/admin/sites/:id
///
/// Partial update. `budget: null` clears the budget; an absent budget
/// field leaves it untouched.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SiteUpdate>,
) -> AppResult<Json<AppResponse<Site>>> {
    let db = state.get_db();
    let sites = SiteRepository::new(db.clone());

    let mut site = sites
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Site {} not found", id)))?;
    let site_rid = site
        .id
        .clone()
        .ok_or_else(|| AppError::internal("site row without id"))?;

    if let Some(company_id) = payload.company_id {
        let company = CompanyRepository::new(db)
            .find_by_id(&company_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Company {} does not exist", company_id))
            })?;
        site.company = company
            .id
            .ok_or_else(|| AppError::internal("company row without id"))?;
    }
    if let Some(site_name) = payload.site_name {
        validate_required_text(&site_name, "site_name", MAX_NAME_LEN)?;
        site.site_name = site_name.trim().to_string();
    }
    if let Some(site_address) = payload.site_address {
        if site_address.len() > MAX_ADDRESS_LEN {
            return Err(AppError::validation("site_address is too long"));
        }
        site.site_address = site_address.trim().to_string();
    }
    if let Some(pin) = payload.pin {
        validate_pin(&pin)?;
        if sites.pin_in_use(&pin, Some(&site_rid)).await? {
            return Err(AppError::conflict("PIN is already in use by another site"));
        }
        site.pin = pin;
    }
    if let Some(pricing) = payload.pricing {
        validate_pricing(&pricing)?;
        site.pricing = pricing;
    }
    if let Some(budget) = payload.budget {
        if let Some(b) = &budget {
            validate_budget(b)?;
        }
        site.budget = budget;
    }

    let site = sites.update(&id, site).await?;
    Ok(ok(site.into()))
}

/// DELETE /api/admin/sites/:id
///
/// Cascades: the site's tickets go with it.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let deleted = SiteRepository::new(state.get_db()).delete_cascade(&id).await?;

    if !deleted {
        return Err(AppError::not_found(format!("Site {} not found", id)));
    }

    tracing::info!(target: "admin", site = %id, "Site deleted with its tickets");
    Ok(ok(true))
}

/// GET /api/admin/sites/:id/budget-usage
///
/// Derived view over the ticket ledger: spend inside the budget
/// window and what is left of the allocation. Reported even for an
/// inactive budget, so admins can inspect a paused allocation.
pub async fn budget_usage(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<BudgetUsage>>> {
    let db = state.get_db();

    let site = SiteRepository::new(db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Site {} not found", id)))?;
    let site_rid = site
        .id
        .clone()
        .ok_or_else(|| AppError::internal("site row without id"))?;

    let budget = site
        .budget
        .ok_or_else(|| AppError::not_found(format!("Site {} has no budget configured", id)))?;

    let tickets = TicketRepository::new(db).list_for_site(site_rid).await?;
    let used = used_in_window(&budget, &tickets);
    let remaining = to_f64(to_decimal(budget.amount) - to_decimal(used));

    Ok(ok(BudgetUsage {
        budget,
        used,
        remaining,
    }))
}

/// Prices must be finite, non-negative and keyed by the known garment
/// vocabulary. A price for an unknown key could never be charged, so
/// it is almost certainly a typo; reject it at the admin surface.
fn validate_pricing(pricing: &Pricing) -> AppResult<()> {
    for (key, price) in pricing {
        if !is_garment_key(key) {
            return Err(AppError::validation(format!(
                "'{}' is not a known garment type",
                key
            )));
        }
        if !price.is_finite() || *price < 0.0 {
            return Err(AppError::validation(format!(
                "Price for '{}' must be a non-negative number",
                key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pricing_rejects_unknown_garment_keys() {
        let pricing: Pricing = HashMap::from([("jackett".to_string(), 5.0)]);
        assert!(validate_pricing(&pricing).is_err());
    }

    #[test]
    fn test_pricing_accepts_known_keys_with_valid_prices() {
        let pricing: Pricing =
            HashMap::from([("jacket".to_string(), 5.0), ("shirt".to_string(), 0.0)]);
        assert!(validate_pricing(&pricing).is_ok());
    }

    #[test]
    fn test_pricing_rejects_bad_prices() {
        let negative: Pricing = HashMap::from([("jacket".to_string(), -1.0)]);
        assert!(validate_pricing(&negative).is_err());
        let nan: Pricing = HashMap::from([("jacket".to_string(), f64::NAN)]);
        assert!(validate_pricing(&nan).is_err());
    }
}
