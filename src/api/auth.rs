//! Sign-in Endpoints

use skate_core::models::{AuthResponse, GoogleCredential, User};

use super::{ApiClient, ApiError};

/// Exchange a Google Identity Services credential for an API token
pub async fn sign_in_with_google(api: &ApiClient, credential: String) -> Result<AuthResponse, ApiError> {
    api.post("auth/google", &GoogleCredential { credential }).await
}

/// Current user for the attached token; fails with `Unauthorized` once it expires
pub async fn current_user(api: &ApiClient) -> Result<User, ApiError> {
    api.get("auth/me").await
}
