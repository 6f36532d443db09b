//! Relay HTTP server
//!
//! Exposes the single upload endpoint and maps relay failures onto the
//! wire contract: 400 for a missing file, 500 for downstream processing
//! failures, each with a structured `{"error": ...}` body. Underlying
//! causes are logged here at the boundary and never forwarded verbatim.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::application::ports::{AudioStore, ProcessingBackend};
use crate::application::relay::{RelayError, RelayService};

/// Multipart field that carries the uploaded recording
const UPLOAD_FIELD: &str = "file";

/// Structured error body returned on every failure path
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build the relay router around a shared relay service.
///
/// Uploads have no artificial size cap. `allowed_origin` is the CORS
/// origin permitted to call the endpoint, with `"*"` allowing any.
pub fn build_router<S, P>(relay: Arc<RelayService<S, P>>, allowed_origin: &str) -> Router
where
    S: AudioStore + 'static,
    P: ProcessingBackend + 'static,
{
    Router::new()
        .route("/upload", post(upload::<S, P>))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer(allowed_origin))
        .with_state(relay)
}

/// Serve the router on an already-bound listener
pub async fn serve(listener: tokio::net::TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}

fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origin == "*" {
        return cors.allow_origin(Any);
    }
    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin = %allowed_origin, "invalid allowed origin, allowing any");
            cors.allow_origin(Any)
        }
    }
}

/// `POST /upload`: relay one multipart-encoded recording
async fn upload<S, P>(
    State(relay): State<Arc<RelayService<S, P>>>,
    mut multipart: Multipart,
) -> Response
where
    S: AudioStore + 'static,
    P: ProcessingBackend + 'static,
{
    let mut payload: Option<Vec<u8>> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some(UPLOAD_FIELD) {
                    match field.bytes().await {
                        Ok(bytes) => payload = Some(bytes.to_vec()),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to read upload field")
                        }
                    }
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "malformed multipart upload");
                break;
            }
        }
    }

    match relay.relay(payload).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(RelayError::NoFileReceived) => {
            tracing::warn!("upload rejected: no file received");
            error_response(StatusCode::BAD_REQUEST, "No file received")
        }
        Err(e) => {
            // Storage and processing failures alike surface as a generic
            // processing failure; the cause stays in the logs.
            tracing::error!(error = %e, "upload relay failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Processing failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
