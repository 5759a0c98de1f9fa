//! Integration tests for the Axum web server.
//!
//! These tests drive the full router over an in-memory database and a
//! stub film catalog, verifying that routes are correctly wired to
//! handlers and that the HTTP status mapping holds.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use planetary_axum::bootstrap::{AxumContext, CorsConfig};
use planetary_axum::routes::create_router;
use planetary_core::{CatalogAppearance, CatalogError, FilmCatalog};
use planetary_db::TestDb;

/// Catalog stub with a configurable outcome.
struct StubCatalog {
    outcome: Result<CatalogAppearance, ()>,
}

impl StubCatalog {
    fn found(film_count: u32, url: &str) -> Self {
        Self {
            outcome: Ok(CatalogAppearance {
                film_count,
                canonical_url: url.to_string(),
            }),
        }
    }

    fn unreachable() -> Self {
        Self { outcome: Err(()) }
    }
}

#[async_trait]
impl FilmCatalog for StubCatalog {
    async fn appearances(&self, _name: &str) -> Result<CatalogAppearance, CatalogError> {
        match &self.outcome {
            Ok(found) => Ok(found.clone()),
            Err(()) => Err(CatalogError::Network {
                message: "connection refused".to_string(),
            }),
        }
    }
}

async fn test_app(catalog: StubCatalog) -> Router {
    let db = TestDb::new().await.expect("in-memory database");
    let ctx = AxumContext {
        planets: Arc::new(db.service(Arc::new(catalog))),
    };
    create_router(ctx, &CorsConfig::AllowAll)
}

fn post_planet(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/planet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app(StubCatalog::found(0, "")).await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let app = test_app(StubCatalog::found(0, "")).await;

    let response = app.oneshot(get("/planets")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn create_then_get_then_delete_round_trip() {
    let app = test_app(StubCatalog::found(5, "https://swapi.dev/api/planets/1/")).await;

    // Create (name arrives raw; the service normalizes it)
    let response = app
        .clone()
        .oneshot(post_planet(
            r#"{"name": "  tatooine ", "climate": "arid", "terrain": "desert"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["created"], true);
    let id = created["id"].as_i64().unwrap();
    assert!(created.get("catalogNote").is_none());

    // Get by id
    let response = app
        .clone()
        .oneshot(get(&format!("/planet/id/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let planet = json_body(response).await;
    assert_eq!(planet["name"], "Tatooine");
    assert_eq!(planet["appearanceCount"], 5);
    // Internal-only field never leaves the service
    assert!(planet.get("canonicalURL").is_none());

    // Get by name, case-insensitively
    let response = app
        .clone()
        .oneshot(get("/planet/name/TATOOINE"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete by name
    let response = app
        .clone()
        .oneshot(delete("/planet/name/tatooine"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["deleted"], true);

    // Gone now
    let response = app
        .clone()
        .oneshot(get(&format!("/planet/id/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Repeated delete is not an error
    let response = app
        .clone()
        .oneshot(delete("/planet/name/tatooine"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["deleted"], false);
}

#[tokio::test]
async fn duplicate_name_returns_conflict() {
    let app = test_app(StubCatalog::found(1, "url")).await;

    let response = app
        .clone()
        .oneshot(post_planet(r#"{"name": "Naboo"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same name modulo normalization
    let response = app
        .clone()
        .oneshot(post_planet(r#"{"name": " NABOO "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.oneshot(get("/planets")).await.unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn blank_name_returns_bad_request() {
    let app = test_app(StubCatalog::found(0, "")).await;

    let response = app
        .oneshot(post_planet(r#"{"name": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_id_is_bad_request_not_not_found() {
    let app = test_app(StubCatalog::found(0, "")).await;

    let response = app.clone().oneshot(get("/planet/id/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(delete("/planet/id/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn creation_survives_unreachable_catalog() {
    let app = test_app(StubCatalog::unreachable()).await;

    let response = app
        .clone()
        .oneshot(post_planet(r#"{"name": "Dagobah", "terrain": "swamp"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["created"], true);
    assert!(created["catalogNote"].is_string());

    let response = app.oneshot(get("/planet/name/dagobah")).await.unwrap();
    let planet = json_body(response).await;
    assert_eq!(planet["appearanceCount"], 0);
}
