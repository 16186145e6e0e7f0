use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use client_core::HttpActivityClient;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;
use url::Url;

mod config;
mod store;
mod sync;
mod view;

use config::load_settings;
use sync::Synchronizer;

#[derive(Debug, Deserialize)]
struct SignupForm {
    activity: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct RemovalParams {
    activity: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ToggleForm {
    activity: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let service_url = Url::parse(&settings.service_url)?;
    let sync = Synchronizer::new(Arc::new(HttpActivityClient::new(service_url)));
    sync.load_catalog().await;

    let app = build_router(sync);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "activity board listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(sync: Arc<Synchronizer>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(show_board))
        .route("/signup", post(submit_signup))
        .route("/remove", get(confirm_removal).post(remove_participant))
        .route("/toggle", post(toggle_participants))
        .route("/reload", post(reload_catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(sync)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Pure read: renders whatever the store holds, without contacting the
/// service.
async fn show_board(State(sync): State<Arc<Synchronizer>>) -> Html<String> {
    Html(sync.render().await)
}

async fn submit_signup(
    State(sync): State<Arc<Synchronizer>>,
    Form(form): Form<SignupForm>,
) -> Redirect {
    sync.submit_signup(&form.activity, &form.email).await;
    Redirect::to("/")
}

/// Step one of a removal: show the confirmation page. No request reaches
/// the service until the confirmation form posts back.
async fn confirm_removal(Query(params): Query<RemovalParams>) -> Html<String> {
    Html(view::render_confirm_removal(&params.activity, &params.email))
}

async fn remove_participant(
    State(sync): State<Arc<Synchronizer>>,
    Form(form): Form<RemovalParams>,
) -> Redirect {
    sync.remove_participant(&form.activity, &form.email).await;
    Redirect::to("/")
}

async fn toggle_participants(
    State(sync): State<Arc<Synchronizer>>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    sync.toggle_participants(&form.activity).await;
    Redirect::to("/")
}

async fn reload_catalog(State(sync): State<Arc<Synchronizer>>) -> Redirect {
    sync.load_catalog().await;
    Redirect::to("/")
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
