use crate::utils::error::{Result, SplitError};
use url::Url;

/// Well-known placeholder left behind by setup docs; treated the same as a
/// missing key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SplitError::config(format!(
            "{field_name}: URL cannot be empty"
        )));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SplitError::config(format!(
                "{field_name}: unsupported URL scheme: {scheme}"
            ))),
        },
        Err(e) => Err(SplitError::config(format!(
            "{field_name}: invalid URL format: {e}"
        ))),
    }
}

pub fn validate_api_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(SplitError::config(
            "API key is missing; set --api-key or GEMINI_API_KEY",
        ));
    }
    if key == PLACEHOLDER_API_KEY {
        return Err(SplitError::config(
            "API key is still the placeholder value; set a real key",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SplitError::config(format!(
            "{field_name}: value cannot be empty or whitespace-only"
        )));
    }
    Ok(())
}
