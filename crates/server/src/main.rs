use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{domain::ActivityCatalog, error::ErrorDetail, protocol::MessageResponse};
use tokio::sync::RwLock;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

mod catalog;
mod config;

use catalog::{seed_catalog, CatalogError};
use config::load_settings;

const MAX_REQUEST_BYTES: usize = 16 * 1024;

#[derive(Clone)]
struct AppState {
    activities: Arc<RwLock<ActivityCatalog>>,
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        activities: Arc::new(RwLock::new(seed_catalog())),
    };
    let app = build_router(state);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "activity service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup_for_activity))
        .route("/activities/:name/participants", delete(withdraw_participant))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_activities(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(state.activities.read().await.clone())
}

async fn signup_for_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorDetail>)> {
    let mut activities = state.activities.write().await;
    let message = catalog::sign_up(&mut activities, &name, &q.email).map_err(reject)?;
    info!(activity = %name, "participant signed up");
    Ok(Json(MessageResponse::new(message)))
}

async fn withdraw_participant(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorDetail>)> {
    let mut activities = state.activities.write().await;
    let message = catalog::remove_participant(&mut activities, &name, &q.email).map_err(reject)?;
    info!(activity = %name, "participant removed");
    Ok(Json(MessageResponse::new(message)))
}

fn reject(err: CatalogError) -> (StatusCode, Json<ErrorDetail>) {
    let status = match err {
        CatalogError::UnknownActivity => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorDetail::new(err.to_string())))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
