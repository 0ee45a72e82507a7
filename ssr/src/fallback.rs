use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::prelude::*;
use state::server::AppState;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

/// Serves static files from the site root, rendering the app (and its
/// not found page) for anything that is not on disk.
pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> AxumResponse {
    let root = state.leptos_options.site_root.clone();
    match get_static_file(uri.clone(), &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let api = state.api.clone();
            let options = state.leptos_options.clone();
            let handler = leptos_axum::render_app_to_stream_with_context(
                move || provide_context(api.clone()),
                move || shell(options.clone()),
            );
            handler(req).await.into_response()
        }
        Err((status, msg)) => {
            tracing::warn!(%uri, %status, "static file lookup failed: {msg}");
            (status, msg).into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}
