use skate_core::models::FeedbackSubmission;

use super::{ApiClient, ApiError};

pub async fn submit_feedback(api: &ApiClient, feedback: &FeedbackSubmission) -> Result<(), ApiError> {
    api.post_unit("feedback", feedback).await
}
