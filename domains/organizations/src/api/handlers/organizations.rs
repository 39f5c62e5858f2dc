//! Organization management API handlers
//!
//! Every route requires a session token; deletion additionally requires
//! the caller to be a super admin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use devlead_auth::{AuthUser, SuperAdminUser};
use devlead_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::OrganizationsState;
use crate::domain::entities::Organization;

/// Request for creating an organization
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Request for updating an organization; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrganizationRequest {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

fn validate_not_blank(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("Organization {} not found", id))
}

/// List organizations
///
/// **GET /organizations**
pub async fn list_organizations(
    _auth: AuthUser,
    State(state): State<OrganizationsState>,
) -> Result<Json<Vec<Organization>>> {
    let organizations = state.organizations.list().await?;
    Ok(Json(organizations))
}

/// Create an organization
///
/// **POST /organizations**
pub async fn create_organization(
    AuthUser(principal): AuthUser,
    State(state): State<OrganizationsState>,
    ValidatedJson(request): ValidatedJson<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>)> {
    let organization = state
        .organizations
        .create(request.name.trim(), request.description.as_deref())
        .await?;

    tracing::info!(
        organization_id = %organization.id,
        user_id = %principal.id,
        "Created organization"
    );
    Ok((StatusCode::CREATED, Json(organization)))
}

/// Get an organization
///
/// **GET /organizations/{id}**
pub async fn get_organization(
    _auth: AuthUser,
    State(state): State<OrganizationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Organization>> {
    state
        .organizations
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Update an organization
///
/// **PATCH /organizations/{id}**
pub async fn update_organization(
    AuthUser(principal): AuthUser,
    State(state): State<OrganizationsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateOrganizationRequest>,
) -> Result<Json<Organization>> {
    let organization = state
        .organizations
        .update(
            id,
            request.name.as_deref().map(str::trim),
            request.description.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(organization_id = %id, user_id = %principal.id, "Updated organization");
    Ok(Json(organization))
}

/// Delete an organization (super admin only)
///
/// **DELETE /organizations/{id}**
pub async fn delete_organization(
    SuperAdminUser(admin): SuperAdminUser,
    State(state): State<OrganizationsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.organizations.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(organization_id = %id, user_id = %admin.id, "Deleted organization");
    Ok(StatusCode::NO_CONTENT)
}
