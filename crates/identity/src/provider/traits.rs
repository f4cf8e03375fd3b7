//! Capability trait definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ResolverError;

/// Label the NLP capability uses for organizations.
pub const ORG_LABEL: &str = "ORG";

/// A labelled span returned by an [`EntityRecognizer`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Organization span (`ORG` label, case-insensitive).
    pub fn org(text: impl Into<String>) -> Self {
        Self::new(text, ORG_LABEL)
    }

    pub fn is_organization(&self) -> bool {
        self.label.eq_ignore_ascii_case(ORG_LABEL)
    }
}

/// Named-entity recognition capability.
///
/// The resolver does not manage the capability's lifecycle; it only calls
/// [`recognize`](Self::recognize) once per request. Spans must be returned in
/// the order the capability found them.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Identifier used in logs and errors (e.g. "SPACY").
    fn id(&self) -> &'static str;

    /// Label the spans of `text`.
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ResolverError>;
}

/// Request sent to a [`TextGenerator`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
    /// Optional system preamble.
    pub preamble: Option<String>,
    /// Instruction text.
    pub instruction: String,
    /// Output budget.
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(instruction: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            preamble: None,
            instruction: instruction.into(),
            max_output_tokens,
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }
}

/// Text-generation capability.
///
/// Authentication, endpoint selection, timeouts and retries belong to the
/// implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier used in logs and errors (e.g. "OPENROUTER").
    fn id(&self) -> &'static str;

    /// Run one request and return the raw response text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ResolverError>;
}
