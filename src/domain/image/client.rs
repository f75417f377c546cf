//! Images sub-client — listing, upload, AI generation.

use crate::client::ContentGemClient;
use crate::domain::image::{ImageGenerationRequest, ImageResponse, ImageUpload, ImagesResponse};
use crate::error::{HttpError, SdkError};
use crate::shared::{Ack, ListParams};

use reqwest::multipart::{Form, Part};

/// Sub-client for image operations.
pub struct Images<'a> {
    pub(crate) client: &'a ContentGemClient,
}

impl<'a> Images<'a> {
    pub async fn list(&self, params: &ListParams) -> Result<ImagesResponse, SdkError> {
        let path = format!("/images{}", params.to_query_string());
        Ok(self.client.http.get(&path).await?)
    }

    pub async fn get(&self, id: &str) -> Result<ImageResponse, SdkError> {
        let path = format!("/images/{}", urlencoding::encode(id));
        Ok(self.client.http.get(&path).await?)
    }

    /// Upload an image as `multipart/form-data`.
    ///
    /// The file goes in the `image` part; `publicationId` is added as a text
    /// part when set.
    pub async fn upload(&self, upload: ImageUpload) -> Result<ImageResponse, SdkError> {
        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(mime) = &upload.mime_type {
            part = part.mime_str(mime).map_err(HttpError::from)?;
        }

        let mut form = Form::new().part("image", part);
        if let Some(publication_id) = upload.publication_id {
            form = form.text("publicationId", publication_id);
        }

        Ok(self.client.http.post_multipart("/images/upload", form).await?)
    }

    /// Generate an image from a prompt.
    pub async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageResponse, SdkError> {
        Ok(self.client.http.post("/images/generate", request).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<Ack, SdkError> {
        let path = format!("/images/{}", urlencoding::encode(id));
        Ok(self.client.http.delete(&path).await?)
    }
}
