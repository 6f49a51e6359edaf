//! Search echo handler: returns a formatted echo of the query parameter.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

/// Query parameters for the search echo.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search terms; defaults to the empty string when omitted.
    #[serde(default)]
    pub q: String,
}

/// Search echo body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResults {
    /// Echo of the requested terms.
    pub results: String,
}

/// Echo the query back without touching storage.
#[utoipa::path(
    get,
    path = "/search/",
    params(SearchQuery),
    responses((status = 200, description = "Search echo", body = SearchResults)),
    tags = ["search"],
    operation_id = "search"
)]
#[get("/search/")]
pub async fn search(query: web::Query<SearchQuery>) -> web::Json<SearchResults> {
    web::Json(SearchResults {
        results: format!("Showing search results for '{}'", query.q),
    })
}
