//! AI documentation generation for scaffolded components.
//! Issues at most one request per run against the generative service and
//! degrades gracefully: a missing credential skips enrichment, a failing
//! service call substitutes a fixed fallback block. Neither aborts the run.

use crate::error::{Error, Result};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

/// Model used when the operator does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Documentation block substituted when the service call fails.
pub const FALLBACK_DOC_BLOCK: &str = "/**\n * An error occurred during AI doc generation.\n */";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the documentation generation service.
///
/// The credential is passed in at construction and never read from the
/// environment here, so the degraded-mode branch depends only on the
/// constructed value.
pub struct DocGenerator {
    api_key: Option<String>,
    api_base: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl DocGenerator {
    /// Creates a generator for the given credential and model.
    ///
    /// # Arguments
    /// * `api_key` - Service credential; `None` selects the degraded mode
    /// * `model` - Model identifier sent with the request
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            api_base: API_BASE.to_string(),
            model: model.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Overrides the service base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Generates a documentation block for the component, if possible.
    ///
    /// # Returns
    /// * `None` when no credential is configured; a warning is logged and no
    ///   request is made
    /// * `Some(block)` with the generated block, or with the fallback block
    ///   when the service call fails in any way
    pub fn generate(&self, class_name: &str, tag_name: &str) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("GEMINI_API_KEY is not set, skipping AI documentation");
            return None;
        };

        debug!("Requesting documentation block from model '{}'", self.model);
        match self.request_doc_block(api_key, class_name, tag_name) {
            Ok(block) => Some(block),
            Err(err) => {
                error!("{}", err);
                Some(FALLBACK_DOC_BLOCK.to_string())
            }
        }
    }

    fn request_doc_block(
        &self,
        api_key: &str,
        class_name: &str,
        tag_name: &str,
    ) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let request = GenerateContentRequest::from_prompt(doc_prompt(class_name, tag_name));

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::DocServiceError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DocServiceError(format!(
                "service responded with status {}",
                status
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| Error::DocServiceError(format!("malformed response: {}", e)))?;

        let text = body
            .first_text()
            .ok_or_else(|| Error::DocServiceError("response contained no text".to_string()))?;

        extract_doc_block(&text).ok_or_else(|| {
            Error::DocServiceError("response was not a documentation block".to_string())
        })
    }
}

/// Accepts service output only when it is a bare documentation block.
///
/// Anything else, such as text wrapped in markdown fences, is rejected and
/// handled as a service failure by the caller.
pub fn extract_doc_block(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.starts_with("/**") && trimmed.ends_with("*/") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

fn doc_prompt(class_name: &str, tag_name: &str) -> String {
    format!(
        "You are a senior front-end developer and an expert technical writer.\n\
         Your task is to generate a professional JSDoc comment block for a new \
         Lit-based web component.\n\n\
         The component's class name is: {class_name}\n\
         The component's HTML tag name is: {tag_name}\n\n\
         Generate a JSDoc block that includes:\n\
         1. A concise, one-line summary of the component's likely purpose.\n\
         2. A blank line.\n\
         3. The @element tag with the correct tag name.\n\
         4. Suggestions for two common @slot entries.\n\
         5. Suggestions for two common @cssprop theming variables.\n\n\
         IMPORTANT RULES:\n\
         - Your response MUST be raw text only.\n\
         - Your response MUST start directly with /** and end with */.\n\
         - DO NOT wrap the output in markdown code blocks."
    )
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String =
            content.parts.iter().map(|part| part.text.as_str()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
