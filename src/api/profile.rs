//! User Profile Endpoints

use skate_core::models::{ProfileCustomization, UserProfile};

use super::{segment, ApiClient, ApiError};

pub async fn get_user_profile(api: &ApiClient, username: &str) -> Result<UserProfile, ApiError> {
    api.get(&format!("users/{}", segment(username))).await
}

pub async fn get_my_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get("users/me").await
}

pub async fn update_customization(
    api: &ApiClient,
    customization: &ProfileCustomization,
) -> Result<UserProfile, ApiError> {
    api.put("users/me/customization", customization).await
}
