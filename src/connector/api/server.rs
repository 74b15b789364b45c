//! HTTP surface: both generator endpoints plus their single-page frontends.
//!
//! Every failure on a generator endpoint becomes `500 {"error": "..."}`.
//! The kind of failure and the stage it happened at are only logged.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::domain::{
    AnimationResult, DomainError, GenerationStage, Generator, PromptRequest, UiResult,
};

use super::Container;

const ASCII_PAGE: &str = include_str!("../../../static/ascii.html");
const DESIGNER_PAGE: &str = include_str!("../../../static/designer.html");

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// A generation failure on its way out of a handler.
struct ApiError(DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.0.message().to_string(),
            }),
        )
            .into_response()
    }
}

fn failed(generator: Generator, err: DomainError) -> ApiError {
    error!(
        %generator,
        stage = %GenerationStage::Failed,
        failed_at = %err.failed_at(),
        "Generation failed: {err}"
    );
    ApiError(err)
}

pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(ascii_page))
        .route("/designer", get(designer_page))
        .route("/healthz", get(healthz))
        .route(Generator::Ascii.route(), post(generate_ascii))
        .route(Generator::Ui.route(), post(generate_ui))
        .with_state(container)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("genstudio listening on http://{addr}");
    info!("  ASCII cinema:   http://{addr}/");
    info!("  Vibe designer:  http://{addr}/designer");

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server shutdown")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Buffering failures (e.g. a body over the size limit) get the same
/// `500 {error}` envelope as a body that is not a prompt.
fn read_prompt(body: Result<Bytes, BytesRejection>) -> Result<PromptRequest, DomainError> {
    let body = body.map_err(|e| {
        DomainError::invalid_request(format!("Invalid request body: {}", e.body_text()))
    })?;
    PromptRequest::from_json(&body)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn ascii_page() -> Html<&'static str> {
    Html(ASCII_PAGE)
}

async fn designer_page() -> Html<&'static str> {
    Html(DESIGNER_PAGE)
}

async fn generate_ascii(
    State(container): State<Arc<Container>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnimationResult>, ApiError> {
    let generator = Generator::Ascii;
    let request = read_prompt(body).map_err(|e| failed(generator, e))?;
    let animation = container
        .animation_use_case()
        .execute(request.prompt())
        .await
        .map_err(|e| failed(generator, e))?;

    info!(
        %generator,
        stage = %GenerationStage::Responded,
        frames = animation.len(),
        "Generated animation"
    );
    Ok(Json(animation))
}

async fn generate_ui(
    State(container): State<Arc<Container>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UiResult>, ApiError> {
    let generator = Generator::Ui;
    let request = read_prompt(body).map_err(|e| failed(generator, e))?;
    let ui = container
        .ui_use_case()
        .execute(request.prompt())
        .await
        .map_err(|e| failed(generator, e))?;

    info!(
        %generator,
        stage = %GenerationStage::Responded,
        bytes = ui.html().len(),
        "Generated UI component"
    );
    Ok(Json(ui))
}
