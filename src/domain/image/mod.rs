//! Image domain — uploaded and AI-generated images.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{Envelope, Pagination, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default style for `POST /images/generate`.
pub const DEFAULT_IMAGE_STYLE: &str = "realistic";

/// Default size for `POST /images/generate`.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_main_image: Option<bool>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total_images: u32,
    pub total_size: u64,
    pub average_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesPage {
    pub images: Vec<Image>,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ImageStats>,
}

/// `GET /images`
pub type ImagesResponse = Envelope<ImagesPage>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub image: Image,
}

/// Single-image endpoints (get, upload, generate).
pub type ImageResponse = Envelope<ImageData>;

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `POST /images/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub style: String,
    pub size: String,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: DEFAULT_IMAGE_STYLE.to_string(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }
}

/// Binary image plus an optional publication to attach it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub publication_id: Option<String>,
}

impl ImageUpload {
    /// Raw bytes, sent as `image.jpg` unless renamed.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: "image.jpg".to_string(),
            mime_type: None,
            publication_id: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_publication(mut self, publication_id: impl Into<String>) -> Self {
        self.publication_id = Some(publication_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_upload_response() {
        let json = r#"{
            "success": true,
            "data": {
                "image": {
                    "id": "img_123",
                    "filename": "test.jpg",
                    "originalName": "test.jpg",
                    "mimeType": "image/jpeg",
                    "size": 1024,
                    "url": "https://example.com/test.jpg",
                    "createdAt": "2024-01-01T00:00:00Z"
                }
            }
        }"#;
        let resp: ImageResponse = serde_json::from_str(json).unwrap();
        let image = &resp.data().unwrap().image;
        assert_eq!(image.id, "img_123");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.file_size, 0);
        assert!(image.public_url.is_none());
    }

    #[test]
    fn test_generation_request_defaults() {
        let req = ImageGenerationRequest::new("A lighthouse at dusk");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "prompt": "A lighthouse at dusk",
                "style": "realistic",
                "size": "1024x1024"
            })
        );
    }

    #[test]
    fn test_upload_defaults() {
        let upload = ImageUpload::new(vec![1u8, 2, 3]).with_publication("pub_1");
        assert_eq!(upload.file_name, "image.jpg");
        assert_eq!(upload.publication_id.as_deref(), Some("pub_1"));
        assert!(upload.mime_type.is_none());
    }
}
