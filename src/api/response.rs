// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 500 with a human-readable message in the `error` field
pub fn internal_error(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &body)
}

/// 404 for an unknown cuisine, echoing the valid names so the caller can
/// self-correct
pub fn cuisine_not_found(cuisine: &str, available: &[String]) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": format!("Cuisine '{cuisine}' not found"),
        "available_cuisines": available,
    });
    json_response(StatusCode::NOT_FOUND, &body)
}

/// 404 for an unknown API path
pub fn unknown_endpoint() -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "available_endpoints": ["/api/cuisines", "/api/heb/{cuisine}"],
    });
    json_response(StatusCode::NOT_FOUND, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_shape() {
        let resp = internal_error("something broke");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers()["Content-Type"].to_str().unwrap(),
            "application/json"
        );
        let body = body_json(resp).await;
        assert_eq!(body["error"], "something broke");
    }

    #[tokio::test]
    async fn test_cuisine_not_found_echoes_available() {
        let available = vec!["Italian".to_string(), "Thai".to_string()];
        let resp = cuisine_not_found("French", &available);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Cuisine 'French' not found");
        assert_eq!(
            body["available_cuisines"],
            serde_json::json!(["Italian", "Thai"])
        );
    }

    #[tokio::test]
    async fn test_unknown_endpoint_lists_routes() {
        let resp = unknown_endpoint();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert!(body["available_endpoints"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("/api/cuisines")));
    }
}
