//! Explanation enrichment behind a narrow seam.
//!
//! The enricher turns an (issue, suggestion) pair into free-text elaboration.
//! It is an external collaborator, not part of the analysis engine: calls are
//! strictly sequential, there are no retries or timeouts, and every failure
//! degrades to [`FALLBACK_EXPLANATION`] instead of propagating.

#![forbid(unsafe_code)]

use serde_json::{json, Value};
use thiserror::Error;

/// Returned whenever no explanation can be produced.
pub const FALLBACK_EXPLANATION: &str =
    "No explanation available (set OPENAI_API_KEY to enable explanations)";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Environment variables consulted by [`from_env`].
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "CUSTODYLINT_LLM_MODEL";
pub const BASE_URL_ENV: &str = "CUSTODYLINT_LLM_BASE_URL";

/// One explanation per finding. Implementations must be infallible: degrade
/// to [`FALLBACK_EXPLANATION`], never error or panic.
pub trait Enricher {
    fn explain(&self, issue: &str, suggestion: &str) -> String;
}

/// Fallback implementation used in tests and when no credential is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEnricher;

impl Enricher for NoopEnricher {
    fn explain(&self, _issue: &str, _suggestion: &str) -> String {
        FALLBACK_EXPLANATION.to_string()
    }
}

#[derive(Debug, Error)]
enum EnrichError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape")]
    MalformedResponse,
}

/// OpenAI-compatible chat-completion client.
pub struct OpenAiEnricher {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiEnricher {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn request(&self, issue: &str, suggestion: &str) -> Result<String, EnrichError> {
        let prompt = format!(
            "A validation tool for blockchain-custody documents reported this issue:\n\
             {issue}\n\nSuggested fix:\n{suggestion}\n\n\
             In two or three sentences, explain why this matters and how to fix it."
        );

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You explain custody configuration problems to developers, briefly and concretely."
                },
                {"role": "user", "content": prompt},
            ],
        });

        let response: Value = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(EnrichError::MalformedResponse)
    }
}

impl Enricher for OpenAiEnricher {
    fn explain(&self, issue: &str, suggestion: &str) -> String {
        match self.request(issue, suggestion) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("enrichment failed, using fallback: {err}");
                FALLBACK_EXPLANATION.to_string()
            }
        }
    }
}

/// Pick an enricher from the environment: a missing or empty credential
/// short-circuits to the no-op implementation without attempting any call.
pub fn from_env() -> Box<dyn Enricher> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Box::new(OpenAiEnricher::new(
            key,
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
        )),
        _ => {
            log::debug!("{API_KEY_ENV} not set; explanations use the fallback text");
            Box::new(NoopEnricher)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_returns_fallback() {
        let text = NoopEnricher.explain("Missing org_id", "Add org_id");
        assert_eq!(text, FALLBACK_EXPLANATION);
    }

    #[test]
    fn unreachable_endpoint_degrades_to_fallback() {
        // Port 9 (discard) refuses connections; explain must swallow the
        // failure rather than surface it.
        let enricher = OpenAiEnricher::new(
            "test-key".to_string(),
            Some("http://127.0.0.1:9".to_string()),
            None,
        );
        let text = enricher.explain("issue", "suggestion");
        assert_eq!(text, FALLBACK_EXPLANATION);
    }
}
