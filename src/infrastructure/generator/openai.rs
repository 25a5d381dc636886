//! Slug generator backed by an OpenAI-compatible chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::slug::clean_slug;
use crate::domain::slug_generator::{GeneratorError, SlugGenerator};

const MAX_TOKENS: u32 = 20;
const TEMPERATURE: f32 = 0.7;

/// Connection settings for [`OpenAiSlugGenerator`].
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    /// API root, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Asks a chat model for a short, memorable slug.
pub struct OpenAiSlugGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiSlugGenerator {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Request`] if the client cannot be constructed.
    pub fn new(settings: OpenAiSettings) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            api_key: settings.api_key,
            model: settings.model,
        })
    }
}

#[async_trait]
impl SlugGenerator for OpenAiSlugGenerator {
    async fn generate(&self, url: &str) -> Result<String, GeneratorError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(url),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        let raw = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GeneratorError::EmptyResponse)?;

        let slug = clean_slug(&raw).ok_or_else(|| GeneratorError::InvalidSlug(raw.clone()))?;

        debug!(slug = %slug, url = %url, "Generator proposed slug");
        Ok(slug)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Host part of `url`, without scheme, path, or query.
fn extract_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}

fn build_prompt(url: &str) -> String {
    format!(
        "Generate exactly one short, catchy, and memorable URL slug for this website:\n\
         URL: {url}\n\
         Domain: {domain}\n\
         \n\
         Requirements:\n\
         - 3 to 8 characters\n\
         - Memorable and relevant to the website's name or purpose\n\
         - Use only lowercase letters, numbers, and hyphens\n\
         - No spaces, underscores, or special characters\n\
         - Avoid generic or overused slugs\n\
         \n\
         Examples:\n\
         - For \"github.com\" -> \"ghub\" or \"git\"\n\
         - For \"stackoverflow.com\" -> \"stack\" or \"so\"\n\
         - For \"reddit.com\" -> \"reddit\" or \"rdt\"\n\
         \n\
         Only return the slug itself with no explanation or formatting.",
        domain = extract_domain(url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://github.com"), "github.com");
        assert_eq!(extract_domain("http://example.com/a/b"), "example.com");
        assert_eq!(extract_domain("https://example.com:8080?q=1"), "example.com:8080");
        assert_eq!(extract_domain("example.com#top"), "example.com");
    }

    #[test]
    fn test_prompt_mentions_url_and_domain() {
        let prompt = build_prompt("https://github.com/rust-lang/rust");
        assert!(prompt.contains("URL: https://github.com/rust-lang/rust"));
        assert!(prompt.contains("Domain: github.com\n"));
        assert!(prompt.contains("3 to 8 characters"));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".to_string(),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 20);
    }

    #[test]
    fn test_response_without_choices() {
        let body: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(body.choices.is_empty());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let generator = OpenAiSlugGenerator::new(OpenAiSettings {
            api_key: "key".to_string(),
            base_url: "http://localhost:9999/v1/".to_string(),
            model: "m".to_string(),
            request_timeout: Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(generator.endpoint, "http://localhost:9999/v1/chat/completions");
        assert_eq!(generator.name(), "openai");
    }
}
