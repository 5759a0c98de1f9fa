//! Planet handlers - CRUD operations for planet records.
//!
//! Path values arrive as raw strings and are decoded through
//! `PlanetParam::parse`, so a malformed id is reported as a 400 from the
//! codec rather than a routing-layer rejection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{ApiPlanet, CreatePlanetRequest, CreateResponse, DeleteResponse};
use crate::error::HttpError;
use crate::state::AppState;
use planetary_core::PlanetParam;

/// List all planets.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ApiPlanet>>, HttpError> {
    let planets = state.planets.list().await?;
    Ok(Json(planets.into_iter().map(ApiPlanet::from).collect()))
}

/// Create a new planet.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<CreateResponse>), HttpError> {
    let created = state.planets.create(req.into_new_planet()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            created: true,
            id: created.planet.id,
            catalog_note: created.catalog_note,
        }),
    ))
}

/// Get a single planet by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiPlanet>, HttpError> {
    find(&state, PlanetParam::parse("id", &id)?, &id).await
}

/// Get a single planet by name.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiPlanet>, HttpError> {
    find(&state, PlanetParam::parse("name", &name)?, &name).await
}

/// Delete a planet by id.
pub async fn remove_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    remove(&state, PlanetParam::parse("id", &id)?).await
}

/// Delete a planet by name.
pub async fn remove_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    remove(&state, PlanetParam::parse("name", &name)?).await
}

async fn find(
    state: &AppState,
    param: PlanetParam,
    display: &str,
) -> Result<Json<ApiPlanet>, HttpError> {
    match state.planets.find_by_param(param).await? {
        Some(planet) => Ok(Json(planet.into())),
        None => Err(HttpError::NotFound(format!(
            "planet '{display}' not found"
        ))),
    }
}

async fn remove(state: &AppState, param: PlanetParam) -> Result<Json<DeleteResponse>, HttpError> {
    let deleted = state.planets.delete_by_param(param).await?;
    Ok(Json(DeleteResponse { deleted }))
}
