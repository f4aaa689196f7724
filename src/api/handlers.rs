// Cuisine API handlers module
// Each request loads the dataset fresh from disk, filters in memory and
// responds; no state outlives the request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::response::{cuisine_not_found, internal_error, json_response};
use crate::config::AppState;
use crate::dataset::{self, CuisineNode, DataResult, Dataset, Link};
use crate::logger;

/// Detail payload: the matched sub-tree plus the links tagged with it.
#[derive(Serialize)]
struct CuisineDetail<'a> {
    hierarchy: &'a CuisineNode,
    links: Vec<&'a Link>,
}

/// GET /api/cuisines
pub async fn cuisine_list(state: &AppState) -> Response<Full<Bytes>> {
    let data = match dataset::load(&state.data_file).await {
        Ok(data) => data,
        Err(e) => {
            logger::log_error(&format!("/api/cuisines: {e}"));
            return internal_error(&format!("Failed to load cuisine list: {e}"));
        }
    };

    match data.cuisine_names() {
        Ok(names) => {
            logger::log_api_request("GET", "/api/cuisines", 200);
            json_response(StatusCode::OK, &names)
        }
        Err(e) => {
            logger::log_error(&format!("/api/cuisines: {e}"));
            internal_error(&e.to_string())
        }
    }
}

/// GET /api/heb/{cuisine}
///
/// The matched node is returned with every field it carries; only the links
/// are narrowed to the requested cuisine.
pub async fn cuisine_detail(state: &AppState, cuisine: &str) -> Response<Full<Bytes>> {
    let data = match dataset::load(&state.data_file).await {
        Ok(data) => data,
        Err(e) => {
            logger::log_error(&format!("/api/heb/{cuisine}: {e}"));
            return internal_error(&format!("An internal error occurred: {e}"));
        }
    };

    match build_detail(&data, cuisine) {
        Ok(Some(detail)) => {
            logger::log_api_request("GET", &format!("/api/heb/{cuisine}"), 200);
            json_response(StatusCode::OK, &detail)
        }
        Ok(None) => {
            // cuisines() was validated above, so the name list cannot fail here
            let available = data.cuisine_names().unwrap_or_default();
            logger::log_api_request("GET", &format!("/api/heb/{cuisine}"), 404);
            cuisine_not_found(cuisine, &available)
        }
        Err(e) => {
            logger::log_error(&format!("/api/heb/{cuisine}: {e}"));
            internal_error(&e.to_string())
        }
    }
}

/// Match one cuisine and narrow the link table to it. Both top-level keys
/// must be present before any matching happens.
fn build_detail<'a>(data: &'a Dataset, cuisine: &str) -> DataResult<Option<CuisineDetail<'a>>> {
    data.cuisines()?;
    data.links()?;

    let Some(node) = data.find_cuisine(cuisine)? else {
        return Ok(None);
    };

    Ok(Some(CuisineDetail {
        hierarchy: node,
        links: data.links_for(cuisine)?,
    }))
}
