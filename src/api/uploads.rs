//! Image Upload

use skate_core::models::UploadResponse;
use web_sys::{File, FormData};

use super::{ApiClient, ApiError};

/// What the uploaded image is for; the server sizes thumbnails by purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePurpose {
    Avatar,
    Banner,
}

impl ImagePurpose {
    fn as_str(&self) -> &'static str {
        match self {
            ImagePurpose::Avatar => "avatar",
            ImagePurpose::Banner => "banner",
        }
    }
}

pub async fn upload_image(api: &ApiClient, file: &File, purpose: ImagePurpose) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("purpose", purpose.as_str())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    api.post_form("uploads/images", form).await
}
