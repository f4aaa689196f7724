//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! resolution, and dispatching to the API or static handlers.

use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Where a request path leads.
#[derive(Debug, PartialEq, Eq)]
pub enum Route {
    /// GET / — the visualization page
    Index,
    /// Bundled favicon
    Favicon,
    /// A file under the static directory
    StaticAsset,
    /// GET /api/cuisines
    CuisineList,
    /// GET /api/heb/{cuisine}, parameter already percent-decoded
    CuisineDetail(String),
    /// Anything else under /api
    ApiUnknown,
    /// Everything else
    NotFound,
}

/// Resolve a request path to a route. Pure, so the table is testable
/// without fabricating hyper requests.
pub fn resolve_route(path: &str) -> Route {
    match path {
        "/" => Route::Index,
        "/favicon.ico" | "/favicon.svg" => Route::Favicon,
        "/api/cuisines" => Route::CuisineList,
        _ => {
            if let Some(raw) = path.strip_prefix("/api/heb/") {
                // A nested or empty remainder is not a cuisine name
                if raw.is_empty() || raw.contains('/') {
                    return Route::ApiUnknown;
                }
                let cuisine = urlencoding::decode(raw)
                    .map_or_else(|_| raw.to_string(), Cow::into_owned);
                return Route::CuisineDetail(cuisine);
            }
            if path == "/api" || path.starts_with("/api/") {
                return Route::ApiUnknown;
            }
            if path.starts_with("/static/") {
                return Route::StaticAsset;
            }
            Route::NotFound
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Extract headers for conditional requests
    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        access_log,
    };

    // 4. Dispatch
    let response = match resolve_route(path) {
        Route::Index => static_files::serve_index(&ctx, &state).await,
        Route::Favicon => static_files::serve_favicon(&ctx, &state).await,
        Route::StaticAsset => static_files::serve_asset(&ctx, &state).await,
        Route::CuisineList => api::handlers::cuisine_list(&state).await,
        Route::CuisineDetail(name) => api::handlers::cuisine_detail(&state, &name).await,
        Route::ApiUnknown => {
            logger::log_api_request(method.as_str(), path, 404);
            api::response::unknown_endpoint()
        }
        Route::NotFound => http::build_404_response(),
    };
    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
