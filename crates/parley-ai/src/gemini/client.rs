//! Gemini API client struct, request building, and response parsing.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::{GenerateRequest, ProviderError};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// All parts go into a single user turn: context block, user text, then
    /// the inline image.
    pub(crate) fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let mut parts = Vec::new();

        if let Some(context) = &request.context {
            parts.push(serde_json::json!({ "text": context }));
        }
        if let Some(text) = &request.user_text {
            parts.push(serde_json::json!({ "text": text }));
        }
        if let Some(image) = &request.image {
            let image = image.attachment();
            parts.push(serde_json::json!({
                "inlineData": {
                    "mimeType": image.mime_type,
                    "data": BASE64.encode(&image.data),
                }
            }));
        }

        serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": parts,
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response into the reply text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, ProviderError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(ProviderError::Blocked(reason.to_string()));
        }

        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| ProviderError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| ProviderError::Parse("empty candidates".to_string()))?;

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if content.is_empty() {
            return match first["finishReason"].as_str() {
                Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                    Err(ProviderError::Blocked(reason.to_string()))
                }
                _ => Err(ProviderError::Parse("response contained no text".to_string())),
            };
        }

        Ok(content)
    }
}

/// Pull the human-readable message out of a Gemini error body, falling back
/// to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ImageAttachment, ImageRef};

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_max_tokens(512)).unwrap()
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            system_instruction: "Be brief.".into(),
            context: Some("Context:\nUser: hi\n---".into()),
            user_text: Some("what is rust?".into()),
            image: None,
        }
    }

    #[test]
    fn api_url_uses_model() {
        assert_eq!(
            client().api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn api_url_honors_custom_base() {
        let client = GeminiClient::new(
            GeminiConfig::new("k").with_base_url("http://127.0.0.1:9000/v1beta/models/"),
        )
        .unwrap();
        assert_eq!(
            client.api_url(),
            "http://127.0.0.1:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn body_orders_parts_context_then_text() {
        let body = client().build_request_body(&request());
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "Context:\nUser: hi\n---");
        assert_eq!(parts[1]["text"], "what is rust?");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
    }

    #[test]
    fn body_inlines_image_as_base64() {
        let mut req = request();
        req.context = None;
        req.user_text = None;
        req.image = Some(ImageRef::new(ImageAttachment::new(
            "dot.png",
            "image/png",
            b"hello".to_vec(),
        )));

        let body = client().build_request_body(&req);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "aGVsbG8=");
    }

    #[test]
    fn parse_joins_text_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "hi " }, { "text": "there" }] },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(client().parse_response(json).unwrap(), "hi there");
    }

    #[test]
    fn parse_missing_candidates_is_parse_error() {
        let err = client().parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn parse_prompt_block_is_blocked() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = client().parse_response(json).unwrap_err();
        assert_eq!(err, ProviderError::Blocked("SAFETY".into()));
    }

    #[test]
    fn parse_empty_safety_candidate_is_blocked() {
        let json = serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        });
        let err = client().parse_response(json).unwrap_err();
        assert_eq!(err, ProviderError::Blocked("SAFETY".into()));
    }

    #[test]
    fn parse_empty_text_is_parse_error() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "STOP" }]
        });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn error_message_prefers_structured_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid.");
        assert_eq!(error_message("  upstream down \n"), "upstream down");
    }
}
