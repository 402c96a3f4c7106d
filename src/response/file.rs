//! File responses backed by tower-http's file services
//!
//! Each lookup is a single open attempt; a 404 from the file service is the
//! "miss" branch and lets the caller fall through to the next candidate.

use axum::{
    body::Body,
    extract::Request,
    handler::HandlerWithoutStateExt,
    http::{request::Parts, Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::AppError;

/// Serve `path` for the request described by `parts`, or `None` when it is
/// not a regular file.
///
/// Stub documents are served whatever the request method, so the file
/// service sees a bodiless GET (or HEAD) carrying the original URI and
/// headers. Conditional and range headers keep working.
pub async fn try_serve_file(path: &Path, parts: &Parts) -> Option<Response> {
    // ServeFile would open a directory and fail mid-body
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return None,
    }

    let response = match ServeFile::new(path).oneshot(file_request(parts)).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        None
    } else {
        Some(response.map(Body::new))
    }
}

/// Serve the first of `candidates` that exists
pub async fn try_serve_first<P>(candidates: &[P], parts: &Parts) -> Option<Response>
where
    P: AsRef<Path> + Sync,
{
    for candidate in candidates {
        if let Some(response) = try_serve_file(candidate.as_ref(), parts).await {
            return Some(response);
        }
    }
    None
}

/// Serve `req` as a static asset under `root`.
///
/// Directory requests are not mapped to `index.html`. Paths that fail
/// validation (`..`, absolute components, NUL bytes), missing files, and
/// methods other than GET/HEAD all end in the terminal 404.
pub async fn serve_static(root: &Path, req: Request) -> Response {
    // A NUL byte can only arrive percent-encoded; the open would fail with 500
    if req.uri().path().contains("%00") {
        return not_found().await;
    }

    let service = ServeDir::new(root)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    match service.oneshot(req).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// Terminal handler for anything nothing else claimed
pub async fn not_found() -> Response {
    AppError::NotFound.into_response()
}

fn file_request(parts: &Parts) -> Request {
    let method = if parts.method == Method::HEAD {
        Method::HEAD
    } else {
        Method::GET
    };

    let mut file_req = Request::new(Body::empty());
    *file_req.method_mut() = method;
    *file_req.uri_mut() = parts.uri.clone();
    *file_req.headers_mut() = parts.headers.clone();
    file_req
}
