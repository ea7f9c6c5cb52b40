use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

// Fallback for everything the router doesn't know about: GET becomes a
// static asset lookup, any other method is refused.
pub async fn static_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET {
        return method_not_allowed().await.into_response();
    }
    serve_asset(&state.asset_root, uri.path()).await
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "message": "Method Not Allowed" })),
    )
}

async fn serve_asset(root: &Path, path: &str) -> Response {
    let relative = if path == "/" {
        "index.html"
    } else {
        path.trim_start_matches('/')
    };

    // no escaping the asset root
    if relative.split('/').any(|segment| segment == "..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let file = root.join(relative);
    match tokio::fs::read(&file).await {
        Ok(contents) => {
            ([(header::CONTENT_TYPE, content_type(relative))], contents).into_response()
        }
        Err(err) => {
            tracing::warn!(path = %file.display(), error = %err, "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

// Content type from the file extension
fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        _ => "text/plain",
    }
}
