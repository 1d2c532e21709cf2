use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Html,
    Json,
};
use frame_api::{render, resolve, ActionBase};
use shared::error::{ApiError, ErrorCode};
use tracing::{debug, info, warn};
use url::form_urlencoded;

use crate::app_state::AppState;

/// First `count` value of the raw query string, if any.
pub(crate) fn count_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "count")
        .map(|(_, value)| value.into_owned())
}

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

/// Initial load: always the zero state, whatever the query says.
pub(crate) async fn initial_frame(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Html<String> {
    info!(path = %uri.path(), "initial frame");
    let base = state.action_base(&headers);
    frame_html(&state, None, &base)
}

pub(crate) async fn advance_frame(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Html<String> {
    debug!(body_bytes = body.len(), "frame action payload");
    let count = count_param(query.as_deref());
    let base = state.action_base(&headers);
    frame_html(&state, count.as_deref(), &base)
}

pub(crate) async fn next_click(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Html<String> {
    debug!(body_bytes = body.len(), "frame action payload");
    let count = count_param(query.as_deref());
    frame_html(&state, count.as_deref(), &state.next_click_base)
}

pub(crate) async fn method_not_allowed(
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<ApiError>) {
    warn!(%method, path = %uri.path(), "unsupported method");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new(
            ErrorCode::MethodNotAllowed,
            "Method Not Allowed",
        )),
    )
}

fn frame_html(state: &AppState, raw_count: Option<&str>, base: &ActionBase) -> Html<String> {
    let game = resolve(raw_count, &state.frame);
    info!(
        count = game.count,
        is_complete = game.is_complete,
        "frame resolved"
    );
    Html(render(&game, base, &state.frame).html)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
