//! Tossie Endpoints

use skate_core::models::{OpenTossieRequest, SendTossieRequest, TossieReceipt};
use skate_core::tossies::TossieType;

use super::{ApiClient, ApiError};

pub async fn received_tossies(api: &ApiClient) -> Result<Vec<TossieReceipt>, ApiError> {
    api.get("tossies/received").await
}

pub async fn send_tossie(api: &ApiClient, request: &SendTossieRequest) -> Result<(), ApiError> {
    api.post_unit("tossies", request).await
}

/// Persist the type rolled for an unopened tossie
pub async fn open_tossie(api: &ApiClient, id: u64, tossie: TossieType) -> Result<TossieReceipt, ApiError> {
    let body = OpenTossieRequest { tossie_type: tossie.slug().to_string() };
    api.post(&format!("tossies/{id}/open"), &body).await
}
