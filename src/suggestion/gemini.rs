//! Gemini generateContent backend
//!
//! The request carries the prompt plus a `responseSchema` so the model
//! answers in JSON mode. The answer text is still validated locally.

use crate::config::Config;
use crate::error::{PortfolioError, Result};
use crate::suggestion::SuggestionService;
use portfolio_common::{build_suggestion_prompt, parse_suggestion_response, suggestion_response_schema, SuggestionResult};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Cap on error-body text carried into errors and logs
const ERROR_SNIPPET_CHARS: usize = 400;

/// generateContent request body
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Connection settings for [`GeminiClient`]
///
/// Debug output redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GeminiSettings {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            api_key: None,
            model: config.model,
            api_base: config.api_base,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

impl GeminiSettings {
    /// Defaults without reading the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve key and base URL from the environment and saved config
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.resolve_api_key(),
            model: config.model.clone(),
            api_base: config.resolve_api_base(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Build the HTTP client; a missing key is only reported by `generate`
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| PortfolioError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { http, settings })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(GeminiSettings::from_config(config))
    }

    /// True when a non-blank key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty())
    }

    async fn call_gemini_api(&self, api_key: &str, request: &GeminiRequest) -> Result<String> {
        let response = self
            .http
            .post(self.settings.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PortfolioError::ApiStatus {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        extract_response_text(&body)
    }
}

impl SuggestionService for GeminiClient {
    async fn generate(&self, raw_input: &str) -> Result<SuggestionResult> {
        let api_key = self.api_key().ok_or(PortfolioError::MissingApiKey)?;

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_suggestion_prompt(raw_input),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: suggestion_response_schema(),
            },
        };

        debug!(model = %self.settings.model, input_chars = raw_input.chars().count(), "requesting project suggestion");

        let text = self.call_gemini_api(api_key, &request).await.map_err(|e| {
            warn!(error = %e, "project suggestion request failed");
            e
        })?;

        let suggestion = parse_suggestion_response(&text).map_err(|e| {
            warn!(error = %e, "project suggestion response rejected");
            PortfolioError::ApiParse(e.to_string())
        })?;

        debug!(title = %suggestion.title, category = %suggestion.category, "project suggestion received");
        Ok(suggestion)
    }
}

/// Text of the first candidate, parts joined
fn extract_response_text(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Err(PortfolioError::ApiParse("empty response body".into()));
    }

    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| PortfolioError::ApiParse(format!("unexpected response envelope: {}", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(PortfolioError::ApiParse("no text in response".into()));
    }
    Ok(text)
}

fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<GeminiErrorBody>(body) {
        if !parsed.error.message.is_empty() {
            return parsed.error.message;
        }
    }
    body.chars().take(ERROR_SNIPPET_CHARS).collect()
}
