use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use skate_core::models::SearchResults;

use super::{ApiClient, ApiError};

pub async fn search(api: &ApiClient, query: &str) -> Result<SearchResults, ApiError> {
    let q = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC);
    api.get(&format!("search?q={q}")).await
}
