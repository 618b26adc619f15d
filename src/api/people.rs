//! Skater, Official and Club Endpoints

use skate_core::models::{Club, Official, SkaterProfile};

use super::{ApiClient, ApiError};

pub async fn get_skater(api: &ApiClient, id: u64) -> Result<SkaterProfile, ApiError> {
    api.get(&format!("skaters/{id}")).await
}

pub async fn get_official(api: &ApiClient, id: u64) -> Result<Official, ApiError> {
    api.get(&format!("officials/{id}")).await
}

pub async fn get_club(api: &ApiClient, id: u64) -> Result<Club, ApiError> {
    api.get(&format!("clubs/{id}")).await
}
