//! Generative content service trait for card authoring features.

use async_trait::async_trait;

use crate::result::AppResult;

/// A generated media asset returned by the content service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneratedMedia {
    /// MIME type of the generated asset.
    pub mime_type: String,
    /// Asset bytes, base64-encoded by the provider.
    pub data: String,
}

/// Trait for text and media generation backends used by card authoring.
///
/// Implementations wrap a remote generative API. The share-link flow does
/// not depend on this trait; only authoring features do.
#[async_trait]
pub trait GenerativeContentService: Send + Sync + std::fmt::Debug + 'static {
    /// Generate a short biography or similar text from a prompt.
    async fn generate_text(&self, prompt: &str) -> AppResult<String>;

    /// Generate an image from a prompt and an optional reference image.
    async fn generate_image(
        &self,
        prompt: &str,
        reference: Option<&GeneratedMedia>,
    ) -> AppResult<GeneratedMedia>;
}
