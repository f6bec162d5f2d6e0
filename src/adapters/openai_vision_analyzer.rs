use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::VisionAnalyzer;
use crate::core::models::AnalysisMode;
use crate::global_constants::{LOG_TAG_VISION, OPENAI_CHAT_COMPLETIONS_URL};

const SEARCH_MODE_PROMPT: &str =
    "Please provide a quick, concise answer to the question or content in this image.";

const ASSIGNMENT_MODE_PROMPT: &str =
    "Please analyze this image and provide a detailed, accurate response. \
     Focus on correctness and thoroughness.";

const ANALYSIS_SYSTEM_PROMPT: &str = "\
You are a technical expert focused on accuracy. For different types of questions:

1. For multiple choice questions:
   - First line: The answer in bold using markdown (**answer**)
   - Second line: A single precise technical explanation

2. For programming questions:
   - Start with \"**Solution:**\"
   - Provide complete, working code that solves the problem
   - Include all necessary imports at the top
   - Add brief comments explaining key logic
   - Include proper error handling

Keep all responses extremely concise and technically accurate.";

const REFINEMENT_SYSTEM_PROMPT: &str = "\
You are a technical expert. Refine or modify the previous response based on \
the user's request. Keep the same formatting style but adjust the content as \
requested.";

/// Vision-model client speaking the OpenAI chat-completions protocol.
///
/// The cropped capture arrives as base64 PNG and is embedded verbatim as a
/// data URL; nothing re-encodes it on the way out.
pub struct OpenAiVisionAnalyzer {
    http_client: reqwest::Client,
    api_key: String,
    model_name: String,
    max_response_tokens: u32,
}

impl OpenAiVisionAnalyzer {
    pub fn build(api_key: String, model_name: String, max_response_tokens: u32) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            model_name,
            max_response_tokens,
        }
    }

    fn ensure_api_key_configured(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!(
                "OpenAI API key not found. Set OPENAI_API_KEY or add it to the settings file."
            );
        }
        Ok(())
    }

    fn mode_prompt(mode: AnalysisMode) -> &'static str {
        match mode {
            AnalysisMode::Search => SEARCH_MODE_PROMPT,
            AnalysisMode::Assignment => ASSIGNMENT_MODE_PROMPT,
        }
    }

    fn build_analysis_request_body(
        &self,
        base64_image: &str,
        mode: AnalysisMode,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.model_name,
            "messages": [
                {
                    "role": "system",
                    "content": ANALYSIS_SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": Self::mode_prompt(mode) },
                        {
                            "type": "image_url",
                            "image_url": {
                                "url": format!("data:image/png;base64,{}", base64_image)
                            }
                        }
                    ]
                }
            ],
            "max_tokens": self.max_response_tokens,
        })
    }

    fn build_refinement_request_body(
        &self,
        original_response: &str,
        refinement_prompt: &str,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.model_name,
            "messages": [
                { "role": "system", "content": REFINEMENT_SYSTEM_PROMPT },
                { "role": "assistant", "content": original_response },
                { "role": "user", "content": refinement_prompt }
            ],
            "max_tokens": self.max_response_tokens,
        })
    }

    async fn send_chat_completion(&self, request_body: serde_json::Value) -> Result<String> {
        let started = std::time::Instant::now();

        let response = self
            .http_client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .with_context(|| "vision API request failed")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .with_context(|| "failed to read vision API response")?;

        if !status.is_success() {
            anyhow::bail!("vision API returned {}: {}", status, response_text);
        }

        log::info!(
            "{} chat completion finished in {}ms",
            LOG_TAG_VISION,
            started.elapsed().as_millis()
        );

        let response_json: serde_json::Value = serde_json::from_str(&response_text)
            .with_context(|| "vision API response is not valid JSON")?;

        Self::extract_response_text(&response_json)
    }

    fn extract_response_text(response_json: &serde_json::Value) -> Result<String> {
        let response_text = response_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("no response content in vision API reply"))?;

        Ok(response_text.trim().to_string())
    }
}

#[async_trait]
impl VisionAnalyzer for OpenAiVisionAnalyzer {
    async fn analyze_image(&self, base64_image: &str, mode: AnalysisMode) -> Result<String> {
        self.ensure_api_key_configured()?;

        log::info!(
            "{} analyzing capture in {} mode ({} base64 chars, model {})",
            LOG_TAG_VISION,
            mode,
            base64_image.len(),
            self.model_name
        );

        let request_body = self.build_analysis_request_body(base64_image, mode);
        self.send_chat_completion(request_body).await
    }

    async fn refine_response(
        &self,
        original_response: &str,
        refinement_prompt: &str,
    ) -> Result<String> {
        self.ensure_api_key_configured()?;

        log::info!("{} refining previous response", LOG_TAG_VISION);

        let request_body = self.build_refinement_request_body(original_response, refinement_prompt);
        self.send_chat_completion(request_body).await
    }
}
