//! HTTP front end for the character index.
//!
//! A single `GET /` route: with a non-empty `q` parameter it answers the
//! search as a JSON array of `{"char", "name"}` objects, without one it
//! serves a small HTML search form. The index is built once before the
//! server starts and shared read-only across request handlers; searches
//! never mutate it, so no locking is involved.

pub mod time;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::index::CharIndex;

/// Fallback page served when no query is given.
const FORM: &str = include_str!("form.html");

/// Shared state for the server.
#[derive(Clone)]
struct AppState {
    index: Arc<CharIndex>,
}

/// Query string for the search endpoint. Axum URL-decodes the value.
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Serve the search front end on `port`, using an already built index.
pub async fn run(index: CharIndex, port: u16) -> anyhow::Result<()> {
    let (start, end) = index.range();
    tracing::info!(
        "Index ready: {} characters, {} tokens (U+{:04X}..U+{:04X})",
        index.char_count(),
        index.token_count(),
        start,
        end,
    );

    let state = AppState {
        index: Arc::new(index),
    };

    let app = Router::new()
        .route("/", get(get_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving on: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Handler for GET /
///
/// An empty query renders the input form rather than an empty result list;
/// a query matching nothing is a normal response with a `[]` body.
async fn get_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.trim();
    if query.is_empty() {
        Html(FORM).into_response()
    } else {
        Json(state.index.search_hits(query)).into_response()
    }
}
