use crate::adapters::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_api_key, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tabsplit")]
#[command(about = "Extract line items from a receipt photo and split the bill")]
pub struct CliConfig {
    /// Path to the receipt image (png, jpg, gif, webp, heic/heif)
    #[arg(long)]
    pub image: String,

    /// TOML file naming participants and item assignments; when given, the
    /// per-person breakdown is printed after the items
    #[arg(long)]
    pub split_plan: Option<String>,

    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("image", &self.image)?;
        validate_api_key(&self.api_key)?;
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        Ok(())
    }
}
