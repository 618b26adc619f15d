//! Competition Endpoints

use skate_core::models::{Competition, CompetitionSummary, EventResults};

use super::{segment, ApiClient, ApiError};

pub async fn list_competitions(api: &ApiClient) -> Result<Vec<CompetitionSummary>, ApiError> {
    api.get("competitions").await
}

pub async fn get_competition(api: &ApiClient, year: i32, ijs_id: &str) -> Result<Competition, ApiError> {
    api.get(&format!("competitions/{year}/{}", segment(ijs_id))).await
}

pub async fn get_event_results(
    api: &ApiClient,
    year: i32,
    ijs_id: &str,
    event_id: &str,
) -> Result<EventResults, ApiError> {
    api.get(&format!("competitions/{year}/{}/events/{}", segment(ijs_id), segment(event_id)))
        .await
}
