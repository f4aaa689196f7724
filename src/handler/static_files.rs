//! Static file serving module
//!
//! Serves the visualization page, the favicon and files under the static
//! directory, with MIME detection and conditional-request handling.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

/// Serve the visualization page.
///
/// The page's existence is checked explicitly so a missing template produces
/// a descriptive plain-text 500 rather than a generic 404.
pub async fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let paths = &state.config.paths;
    let index_path = Path::new(&paths.template_dir).join(&paths.index_file);

    if !index_path.exists() {
        logger::log_error(&format!("Index page missing: {}", index_path.display()));
        return http::build_500_response(&format!(
            "Error: {}/{} not found.",
            paths.template_dir, paths.index_file
        ));
    }

    match fs::read_to_string(&index_path).await {
        Ok(html) => {
            if ctx.access_log {
                logger::log_response(html.len());
            }
            http::response::build_html_response(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read index page '{}': {e}",
                index_path.display()
            ));
            http::build_500_response("Error: could not read index page.")
        }
    }
}

/// Serve the bundled favicon from the static directory
pub async fn serve_favicon(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let favicon_path = Path::new(&state.config.paths.static_dir).join("favicon.svg");
    match fs::read(&favicon_path).await {
        Ok(data) => {
            if ctx.access_log {
                logger::log_response(data.len());
            }
            build_asset_response(&data, "image/svg+xml", ctx.if_none_match.as_deref(), ctx.is_head)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Serve a file from the static directory
pub async fn serve_asset(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match load_asset(&state.config.paths.static_dir, ctx.path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            build_asset_response(
                &content,
                content_type,
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            )
        }
        None => http::build_404_response(),
    }
}

/// Load a file from the static directory, refusing directory traversal
pub async fn load_asset(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and the route prefix, neutralize ".."
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let relative_path = clean_path.strip_prefix("static/").unwrap_or(&clean_path);

    let file_path = Path::new(static_dir).join(relative_path);

    // Containment check: the canonicalized target must stay inside the
    // canonicalized static directory
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build a static asset response with `ETag` handling
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    http::response::build_cached_response(body, content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_asset_serves_file_with_mime() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("style.css")).unwrap();
        file.write_all(b"body {}").unwrap();

        let static_dir = dir.path().to_string_lossy().into_owned();
        let (content, content_type) = load_asset(&static_dir, "/static/style.css")
            .await
            .unwrap();
        assert_eq!(content, b"body {}");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_load_asset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().to_string_lossy().into_owned();
        assert!(load_asset(&static_dir, "/static/nope.js").await.is_none());
    }

    #[tokio::test]
    async fn test_load_asset_blocks_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir(&static_dir).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"secret").unwrap();

        let static_dir = static_dir.to_string_lossy().into_owned();
        assert!(load_asset(&static_dir, "/static/../secret.txt")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_asset_response_honors_etag() {
        let etag = cache::generate_etag(b"data");
        let resp = build_asset_response(b"data", "text/plain; charset=utf-8", Some(&etag), false);
        assert_eq!(resp.status(), 304);

        let resp = build_asset_response(b"data", "text/plain; charset=utf-8", None, false);
        assert_eq!(resp.status(), 200);
    }
}
