//! HTTP client for a spaCy-style NER service.
//!
//! The service accepts `POST {endpoint}` with `{"text": "..."}` and answers
//! `{"ents": [{"text": "Nvidia", "label": "ORG"}, ...]}` in document order.
//! `entities` is accepted as an alias for `ents`, and spans given only as
//! character offsets are sliced out of the request text.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ResolverError;

use super::traits::{EntityRecognizer, EntitySpan};

const CAPABILITY_ID: &str = "NER";

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    #[serde(alias = "entities", default)]
    ents: Vec<NerSpan>,
}

#[derive(Debug, Deserialize)]
struct NerSpan {
    #[serde(default)]
    text: Option<String>,
    /// Character offsets into the request text
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
    label: String,
}

/// Error payload some NER services return with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(alias = "detail")]
    error: Option<String>,
}

/// NER capability reached over HTTP.
pub struct HttpEntityRecognizer {
    client: Client,
    endpoint: String,
}

impl HttpEntityRecognizer {
    /// Create a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EntityRecognizer for HttpEntityRecognizer {
    fn id(&self) -> &'static str {
        CAPABILITY_ID
    }

    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ResolverError> {
        debug!("NER request to {} ({} chars)", self.endpoint, text.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&NerRequest { text })
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_request_error)?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(error_msg) = error_resp.error {
                    return Err(ResolverError::capability(CAPABILITY_ID, error_msg));
                }
            }
            return Err(ResolverError::capability(
                CAPABILITY_ID,
                format!("HTTP {} - {}", status, body),
            ));
        }

        parse_response(text, &body)
    }
}

/// Timeouts keep their own variant; every other transport failure is a
/// [`ResolverError::Network`].
fn map_request_error(e: reqwest::Error) -> ResolverError {
    if e.is_timeout() {
        ResolverError::Timeout {
            capability: CAPABILITY_ID.to_string(),
        }
    } else {
        ResolverError::from(e)
    }
}

/// Decode a NER response body into spans.
fn parse_response(text: &str, body: &str) -> Result<Vec<EntitySpan>, ResolverError> {
    let response: NerResponse = serde_json::from_str(body).map_err(|e| {
        ResolverError::malformed(CAPABILITY_ID, format!("Failed to parse response: {}", e))
    })?;

    let spans = response
        .ents
        .into_iter()
        .filter_map(|span| {
            let span_text = match (span.text, span.start, span.end) {
                (Some(t), _, _) => t,
                (None, Some(start), Some(end)) => slice_chars(text, start, end)?,
                _ => return None,
            };
            Some(EntitySpan::new(span_text, span.label))
        })
        .collect();

    Ok(spans)
}

fn slice_chars(text: &str, start: usize, end: usize) -> Option<String> {
    if start >= end {
        return None;
    }
    let slice: String = text.chars().skip(start).take(end - start).collect();
    if slice.is_empty() {
        None
    } else {
        Some(slice)
    }
}
