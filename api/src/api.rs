use crate::{db, AppError, Result};
use axum::extract::Extension;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Internal server state.
#[derive(Clone, Debug)]
pub struct State {
    db: db::Database,
}

impl State {
    /// Create a new `State` object serving foods from `db`.
    pub fn new(db: db::Database) -> Self {
        Self { db }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, format!("Error: {}", self)).into_response()
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/foods")]
struct FoodsRoute;

#[derive(TypedPath, Deserialize)]
#[typed_path("/foods/:id")]
struct FoodRoute {
    id: models::FoodId,
}

#[instrument(skip_all)]
async fn get_foods(
    _: FoodsRoute,
    Extension(state): Extension<State>,
) -> Result<Json<Vec<models::FoodPlate>>> {
    let foods = state.db.foods().await?;
    Ok(Json(foods))
}

#[instrument(skip_all)]
async fn get_food(
    FoodRoute { id }: FoodRoute,
    Extension(state): Extension<State>,
) -> Result<Json<models::FoodPlate>> {
    let food = state.db.food(id).await?;
    Ok(Json(food))
}

#[instrument(skip_all)]
async fn post_food(
    _: FoodsRoute,
    Extension(state): Extension<State>,
    Json(payload): Json<models::NewFood>,
) -> Result<(StatusCode, Json<models::FoodPlate>)> {
    debug!("Storing {:?}", payload);

    let food = state.db.add_food(payload).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

#[instrument(skip_all)]
async fn put_food(
    FoodRoute { id }: FoodRoute,
    Extension(state): Extension<State>,
    Json(payload): Json<models::NewFood>,
) -> Result<Json<models::FoodPlate>> {
    debug!("Replacing {id} with {:?}", payload);

    let food = state.db.replace_food(id, payload).await?;
    Ok(Json(food))
}

#[instrument(skip_all)]
async fn patch_food(
    FoodRoute { id }: FoodRoute,
    Extension(state): Extension<State>,
    Json(payload): Json<models::FoodPatch>,
) -> Result<Json<models::FoodPlate>> {
    debug!("Patching {id} with {:?}", payload);

    let food = state.db.patch_food(id, payload).await?;
    Ok(Json(food))
}

#[instrument(skip_all)]
async fn delete_food(
    FoodRoute { id }: FoodRoute,
    Extension(state): Extension<State>,
) -> Result<StatusCode> {
    debug!("Deleting {id}");

    state.db.delete_food(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build the router for the `foods` resource, allowing cross-origin calls from `origin`.
pub fn router(state: State, origin: HeaderValue) -> Router {
    // Only useful if we run the app via `trunk serve` which runs on a different port.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http();

    let compression = CompressionLayer::new().gzip(true).deflate(true);

    Router::new()
        .typed_get(get_foods)
        .typed_post(post_food)
        .typed_get(get_food)
        .typed_put(put_food)
        .typed_patch(patch_food)
        .typed_delete(delete_food)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(compression)
                .layer(trace)
                .layer(cors)
                .layer(Extension(state)),
        )
}

async fn not_found() -> StatusCode {
    warn!("route not found");
    StatusCode::NOT_FOUND
}

/// Start the web server on `addr`.
#[instrument(skip(state))]
pub async fn run(state: State, addr: SocketAddr, origin: &str) -> Result<()> {
    let app = router(state, origin.parse()?);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
