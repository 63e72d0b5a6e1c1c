//! Company API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::CompanyRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Company, CompanyCreate, CompanyUpdate};

/// GET /api/admin/companies
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Company>>>> {
    let companies = CompanyRepository::new(state.get_db()).find_all().await?;
    Ok(ok(companies.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/companies/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Company>>> {
    let company = CompanyRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Company {} not found", id)))?;
    Ok(ok(company.into()))
}

/// POST /api/admin/companies
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CompanyCreate>,
) -> AppResult<Json<AppResponse<Company>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let company = CompanyRepository::new(state.get_db())
        .create(payload.name.trim().to_string())
        .await?;

    tracing::info!(target: "admin", name = %company.name, "Company created");
    Ok(ok(company.into()))
}

/// PUT /api/admin/companies/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CompanyUpdate>,
) -> AppResult<Json<AppResponse<Company>>> {
    let repo = CompanyRepository::new(state.get_db());

    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Company {} not found", id)))?;

    let name = match payload.name {
        Some(name) => {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            name.trim().to_string()
        }
        None => existing.name,
    };

    let company = repo.update(&id, name).await?;
    Ok(ok(company.into()))
}

/// DELETE /api/admin/companies/:id
///
/// Cascades: the company's sites and their tickets go with it.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let deleted = CompanyRepository::new(state.get_db())
        .delete_cascade(&id)
        .await?;

    if !deleted {
        return Err(AppError::not_found(format!("Company {} not found", id)));
    }

    tracing::info!(target: "admin", company = %id, "Company deleted with its sites and tickets");
    Ok(ok(true))
}
