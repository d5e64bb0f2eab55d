use crate::core::ImageSource;
use crate::domain::model::ImagePayload;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads receipt images from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalImage;

impl LocalImage {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for LocalImage {
    async fn read_image(&self, path: &str) -> Result<ImagePayload> {
        let bytes = fs::read(path)?;
        let mime_type = mime_type_for(path).to_string();
        tracing::debug!("Read {} bytes from {path} as {mime_type}", bytes.len());
        Ok(ImagePayload { bytes, mime_type })
    }
}

/// MIME type inferred from the file extension. Unrecognized or missing
/// extensions fall back to JPEG, which is what phone cameras produce.
pub fn mime_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => "image/jpeg",
    }
}
