//! Ticker lookup for a resolved company.
//!
//! The text-generation capability is asked for strict JSON
//! (`{"ticker":"TSLA"}`, or `{"ticker":"NONE"}` when the company is not
//! listed). Answers wrapped in prose or code fences are tolerated; anything
//! that does not yield a valid [`Ticker`] is treated as no ticker.

use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;

use crate::config::DEFAULT_GENERATIVE_MAX_TOKENS;
use crate::errors::ResolverError;
use crate::models::Ticker;
use crate::provider::{GenerationRequest, TextGenerator};

const TICKER_PREAMBLE: &str = "Strict JSON only. No text.";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    ticker: Option<String>,
}

/// Looks up trading symbols through a [`TextGenerator`].
pub struct TickerLookup {
    generator: Arc<dyn TextGenerator>,
}

impl TickerLookup {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Trading symbol of `company`, if the model knows a valid one.
    pub async fn lookup(&self, company: &str) -> Option<Ticker> {
        match self.request_ticker(company).await {
            Ok(ticker) => ticker,
            Err(e) => {
                warn!("Ticker lookup for '{}' failed: {}", company, e);
                None
            }
        }
    }

    async fn request_ticker(&self, company: &str) -> Result<Option<Ticker>, ResolverError> {
        let instruction = format!(
            "Return ONLY the official stock ticker symbol for the company '{}'. \
Respond ONLY as JSON: {{\"ticker\":\"TSLA\"}}. \
Return {{\"ticker\":\"NONE\"}} if no ticker exists. \
Do not guess. Do not invent symbols.",
            company
        );
        let request = GenerationRequest::new(instruction, DEFAULT_GENERATIVE_MAX_TOKENS)
            .with_preamble(TICKER_PREAMBLE);

        let response = self.generator.generate(&request).await?;
        let ticker = parse_ticker_response(self.generator.id(), &response)?;
        if ticker.is_none() {
            debug!("No ticker for '{}'", company);
        }
        Ok(ticker)
    }
}

/// Parse a model answer into a ticker.
///
/// Unparseable payloads are errors; well-formed answers carrying the
/// sentinel or an invalid symbol are `Ok(None)`.
fn parse_ticker_response(capability: &str, raw: &str) -> Result<Option<Ticker>, ResolverError> {
    let json = extract_json_object(raw)
        .ok_or_else(|| ResolverError::malformed(capability, "no JSON object in response"))?;
    let response: TickerResponse = serde_json::from_str(json)?;
    Ok(response.ticker.as_deref().and_then(Ticker::parse))
}

/// Slice from the first `{` to the last `}`.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}
