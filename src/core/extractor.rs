use crate::core::parser;
use crate::domain::model::{BillItem, ImagePayload};
use crate::domain::ports::VisionModel;
use crate::utils::error::Result;

/// Instruction sent with every receipt image. Asks for the flat-array reply
/// shape; the parser also accepts the older aggregate-tax object shape.
pub const EXTRACTION_PROMPT: &str = "\
You are reading a photographed restaurant or shop bill. \
Reply with ONLY a JSON array, no prose and no markdown fences. \
Each element must be an object with exactly these keys: \
\"description\" (string), \"price\" (number), \"isTax\" (boolean). \
List every purchasable line item. \
Do NOT include grand total, subtotal, or amount-due lines. \
Report tax and service-charge lines (CGST, SGST, VAT, service charge, tip) \
as elements with \"isTax\": true.";

/// Drives one extraction round trip: prompt + image to the model, then
/// defensive parsing of whatever text comes back.
pub struct Extractor<M: VisionModel> {
    model: M,
}

impl<M: VisionModel> Extractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn extract(&self, image: &ImagePayload) -> Result<Vec<BillItem>> {
        tracing::debug!(
            "Submitting {} byte {} image to vision model",
            image.bytes.len(),
            image.mime_type
        );

        let reply = self.model.describe_image(EXTRACTION_PROMPT, image).await?;
        tracing::debug!("Model replied with {} chars", reply.len());

        let items = parser::parse_model_text(&reply)?;
        tracing::info!("Extracted {} line items", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SplitError;
    use async_trait::async_trait;

    struct CannedModel {
        reply: String,
    }

    #[async_trait]
    impl VisionModel for CannedModel {
        async fn describe_image(
            &self,
            _instruction: &str,
            _image: &ImagePayload,
        ) -> Result<String> {
            Ok(self.reply.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl VisionModel for FailingModel {
        async fn describe_image(
            &self,
            _instruction: &str,
            _image: &ImagePayload,
        ) -> Result<String> {
            Err(SplitError::ModelError {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    fn jpeg() -> ImagePayload {
        ImagePayload {
            bytes: vec![0xff, 0xd8, 0xff],
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_extract_parses_model_reply() {
        let model = CannedModel {
            reply: r#"[{"description":"Tea","price":10,"isTax":false}]"#.to_string(),
        };
        let extractor = Extractor::new(model);

        let items = extractor.extract(&jpeg()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Tea");
    }

    #[tokio::test]
    async fn test_extract_survives_chatty_reply() {
        let model = CannedModel {
            reply: r#"Sure, here is the bill: [{"description":"Tea","price":10}] Enjoy!"#
                .to_string(),
        };
        let extractor = Extractor::new(model);

        let items = extractor.extract(&jpeg()).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_propagates_model_failure() {
        let extractor = Extractor::new(FailingModel);
        let err = extractor.extract(&jpeg()).await.unwrap_err();
        assert!(matches!(err, SplitError::ModelError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_extract_rejects_unparseable_reply() {
        let model = CannedModel {
            reply: "The image is too blurry to read.".to_string(),
        };
        let extractor = Extractor::new(model);
        let err = extractor.extract(&jpeg()).await.unwrap_err();
        assert!(matches!(err, SplitError::ResponseParseError { .. }));
    }

    #[test]
    fn test_prompt_requests_machine_readable_output() {
        assert!(EXTRACTION_PROMPT.contains("JSON array"));
        assert!(EXTRACTION_PROMPT.contains("isTax"));
        assert!(EXTRACTION_PROMPT.contains("subtotal"));
    }
}
