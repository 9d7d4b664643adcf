//! # Catalog Routes
//!
//! Axum handlers for the product endpoints. Mutating handlers run the
//! authentication gate, then the validation gate, then the store mutation;
//! read handlers run the query pipeline over a store snapshot.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::{CatalogStats, CatalogStore, Product};
use crate::errors::{ApiError, ApiResult};
use crate::query::{self, ListQuery};

use super::auth::authenticate;
use super::response::{
    HealthEnvelope, ListEnvelope, ProductEnvelope, RouteNotFoundEnvelope, SearchEnvelope,
    AVAILABLE_ROUTES,
};
use super::validation::validate_product;

/// Shared server state: the store behind its single boundary lock
pub struct CatalogState {
    store: RwLock<CatalogStore>,
}

impl CatalogState {
    /// State over an empty store
    pub fn new() -> Self {
        Self {
            store: RwLock::new(CatalogStore::new()),
        }
    }

    /// State over the fixed seed records
    pub fn seeded() -> Self {
        Self {
            store: RwLock::new(CatalogStore::seeded()),
        }
    }

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, CatalogStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, CatalogStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state type
type SharedState = Arc<CatalogState>;

/// Build the full application router
pub fn catalog_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/products/search", get(search_handler))
        .route("/api/products/stats", get(stats_handler))
        .route("/api/products", get(list_handler))
        .route("/api/products", post(create_handler))
        .route("/api/products/{id}", get(get_handler))
        .route("/api/products/{id}", put(update_handler))
        .route("/api/products/{id}", delete(delete_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Liveness probe
async fn health_handler() -> Json<HealthEnvelope> {
    Json(HealthEnvelope::ok())
}

/// List products with search, filtering, sorting, and pagination
async fn list_handler(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListEnvelope>> {
    let snapshot = state.read()?.list();
    let list_query = ListQuery::parse(&params);
    let outcome = query::run(snapshot, &list_query);

    Ok(Json(ListEnvelope {
        products: outcome.products,
        pagination: outcome.pagination,
        filters: outcome.filters,
    }))
}

/// Get a single product by id
async fn get_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductEnvelope>> {
    let store = state.read()?;
    let product = store
        .find_by_id(&id)
        .cloned()
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(ProductEnvelope::new(
        product,
        "Product retrieved successfully",
    )))
}

/// Create a new product
async fn create_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductEnvelope>)> {
    authenticate(&headers)?;
    let Json(body) = body.map_err(|_| ApiError::InvalidJson)?;
    let input = validate_product(&body)?;

    let mut store = state.write()?;
    if store.find_by_name(&input.name, None).is_some() {
        return Err(ApiError::Conflict(
            "A product with this name already exists".to_string(),
        ));
    }

    let now = Utc::now();
    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        price: input.price,
        category: input.category,
        in_stock: input.in_stock.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };
    store.insert(product.clone());

    tracing::info!(id = %product.id, name = %product.name, "product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope::new(product, "Product created successfully")),
    ))
}

/// Update an existing product, preserving id and creation time
async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProductEnvelope>> {
    authenticate(&headers)?;
    let Json(body) = body.map_err(|_| ApiError::InvalidJson)?;
    let input = validate_product(&body)?;

    let mut store = state.write()?;
    let existing = store.find_by_id(&id).cloned().ok_or_else(|| not_found(&id))?;

    if store.find_by_name(&input.name, Some(&id)).is_some() {
        return Err(ApiError::Conflict(
            "Another product with this name already exists".to_string(),
        ));
    }

    let updated = Product {
        id: existing.id.clone(),
        name: input.name,
        description: input.description,
        price: input.price,
        category: input.category,
        in_stock: input.in_stock.unwrap_or(existing.in_stock),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };
    store.replace(&id, updated.clone());

    Ok(Json(ProductEnvelope::new(
        updated,
        "Product updated successfully",
    )))
}

/// Delete a product, returning the excised record
async fn delete_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<ProductEnvelope>> {
    authenticate(&headers)?;

    let mut store = state.write()?;
    let deleted = store.remove(&id).ok_or_else(|| not_found(&id))?;

    tracing::info!(id = %deleted.id, "product deleted");

    Ok(Json(ProductEnvelope::new(
        deleted,
        "Product deleted successfully",
    )))
}

/// Search products by name substring
async fn search_handler(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<SearchEnvelope>> {
    let term = params
        .get("q")
        .filter(|s| !s.is_empty())
        .or_else(|| params.get("name").filter(|s| !s.is_empty()))
        .map(|s| s.to_lowercase())
        .ok_or(ApiError::MissingSearchTerm)?;

    let results: Vec<Product> = state
        .read()?
        .list()
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .collect();

    let count = results.len();
    Ok(Json(SearchEnvelope {
        message: format!("Found {} product(s) matching \"{}\"", count, term),
        query: term,
        results,
        count,
    }))
}

/// Aggregate statistics over the full store
async fn stats_handler(State(state): State<SharedState>) -> ApiResult<Json<CatalogStats>> {
    let snapshot = state.read()?.list();
    Ok(Json(CatalogStats::compute(&snapshot)))
}

/// 404 for unmatched routes, advertising the available surface
async fn fallback_handler(method: Method, uri: Uri) -> (StatusCode, Json<RouteNotFoundEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundEnvelope {
            error: "Not Found",
            message: format!("Route {} {} not found", method, uri.path()),
            available_routes: AVAILABLE_ROUTES.to_vec(),
        }),
    )
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Product with ID {} not found", id))
}
