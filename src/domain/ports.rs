use crate::domain::model::ImagePayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads an image from wherever it lives (local file, fixture, ...).
pub trait ImageSource: Send + Sync {
    fn read_image(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<ImagePayload>> + Send;
}

/// External vision-capable language model. Takes an instruction plus an image
/// and returns the model's raw reply text, which callers must treat as
/// untrusted free-form output.
#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn describe_image(&self, instruction: &str, image: &ImagePayload) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
}
