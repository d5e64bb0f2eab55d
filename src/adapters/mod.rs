pub mod gemini;
pub mod image;

pub use gemini::{GeminiConfig, GeminiVision};
pub use image::LocalImage;
