//! Generative resolver - last-resort call asking a text-generation model to
//! name the company directly.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::ResolverError;
use crate::models::{MatchCandidate, MatchTier, NormalizedQuery};
use crate::normalize::normalize;
use crate::provider::{GenerationRequest, TextGenerator};

use super::traits::Tier;

/// Answer the model gives when the query names no company.
pub const NO_COMPANY_SENTINEL: &str = "NONE";

/// Asks the text-generation capability for the company name.
pub struct GenerativeResolver {
    generator: Arc<dyn TextGenerator>,
    max_tokens: u32,
}

impl GenerativeResolver {
    pub fn new(generator: Arc<dyn TextGenerator>, max_tokens: u32) -> Self {
        Self {
            generator,
            max_tokens,
        }
    }

    fn build_request(&self, query: &str) -> GenerationRequest {
        let instruction = format!(
            "Extract the company name from the query.\n\
Output ONLY the name.\n\
No punctuation. No quotes. No extra text.\n\
If no company exists, return {}.\n\
Query: {}",
            NO_COMPANY_SENTINEL, query
        );
        GenerationRequest::new(instruction, self.max_tokens)
    }

    /// Ask the model for the company in `query`.
    ///
    /// Faults are logged and reported as no answer.
    pub async fn ask_external_model(&self, query: &str) -> Option<String> {
        let request = self.build_request(query);
        match self.generator.generate(&request).await {
            Ok(response) => {
                let name = clean_generated_name(&response);
                if name.is_none() {
                    debug!("{} answered without a company", self.generator.id());
                }
                name
            }
            Err(e) => {
                warn!("{} request failed: {}", self.generator.id(), e);
                None
            }
        }
    }
}

#[async_trait]
impl Tier for GenerativeResolver {
    fn id(&self) -> &'static str {
        "GENERATIVE"
    }

    async fn attempt(
        &self,
        query: &NormalizedQuery,
    ) -> Result<Option<MatchCandidate>, ResolverError> {
        Ok(self
            .ask_external_model(query.raw())
            .await
            .map(|name| MatchCandidate::freeform(name, MatchTier::Generative)))
    }
}

/// Reduce a model answer to a bare company name.
///
/// Keeps the first non-empty line, strips markdown and quote wrappers, and
/// re-normalizes. The sentinel (any case) and empty answers become `None`.
pub(crate) fn clean_generated_name(raw: &str) -> Option<String> {
    let mut name = raw
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or(raw)
        .trim()
        .to_string();

    for _ in 0..4 {
        let trimmed = name.trim();
        let stripped = strip_wrapper(trimmed, "**")
            .or_else(|| strip_wrapper(trimmed, "__"))
            .or_else(|| strip_wrapper(trimmed, "`"))
            .or_else(|| strip_wrapper(trimmed, "\""))
            .or_else(|| strip_wrapper(trimmed, "'"))
            .or_else(|| strip_wrapper(trimmed, "*"));

        match stripped {
            Some(inner) => name = inner.trim().to_string(),
            None => break,
        }
    }

    let name = name
        .trim_matches(|c: char| matches!(c, '*' | '_' | '`' | '"' | '\''))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let name = normalize(&name);

    if name.is_empty() || is_sentinel(&name) {
        None
    } else {
        Some(name)
    }
}

/// `NONE` in any case, ignoring trailing sentence punctuation.
fn is_sentinel(answer: &str) -> bool {
    answer
        .trim_end_matches(|c: char| matches!(c, '.' | '!'))
        .trim_end()
        .eq_ignore_ascii_case(NO_COMPANY_SENTINEL)
}

fn strip_wrapper<'a>(text: &'a str, wrapper: &str) -> Option<&'a str> {
    if text.len() > wrapper.len() * 2 {
        text.strip_prefix(wrapper)?.strip_suffix(wrapper)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakeTextGenerator;

    #[test]
    fn test_clean_generated_name_plain() {
        assert_eq!(clean_generated_name("Adobe"), Some("Adobe".to_string()));
    }

    #[test]
    fn test_clean_generated_name_strips_wrappers() {
        assert_eq!(
            clean_generated_name("**\"Adobe Inc\"**"),
            Some("Adobe Inc".to_string())
        );
        assert_eq!(clean_generated_name("`Nvidia`"), Some("Nvidia".to_string()));
        assert_eq!(clean_generated_name("'Tesla'"), Some("Tesla".to_string()));
    }

    #[test]
    fn test_clean_generated_name_first_line_only() {
        assert_eq!(
            clean_generated_name("\n  Microsoft  Corp \nExplanation follows"),
            Some("Microsoft Corp".to_string())
        );
    }

    #[test]
    fn test_clean_generated_name_sentinel() {
        assert_eq!(clean_generated_name("NONE"), None);
        assert_eq!(clean_generated_name("none"), None);
        assert_eq!(clean_generated_name("\"None\""), None);
        assert_eq!(clean_generated_name("None."), None);
        assert_eq!(clean_generated_name("NONE!"), None);
        assert_eq!(clean_generated_name("**None.**"), None);
    }

    #[test]
    fn test_clean_generated_name_keeps_trailing_period() {
        assert_eq!(
            clean_generated_name("Tesla, Inc."),
            Some("Tesla, Inc.".to_string())
        );
        assert_eq!(clean_generated_name("Nonesuch"), Some("Nonesuch".to_string()));
    }

    #[tokio::test]
    async fn test_sentinel_with_punctuation_is_unresolved() {
        let generator = Arc::new(FakeTextGenerator::with_response("None."));
        let resolver = GenerativeResolver::new(generator.clone(), 20);

        let result = resolver
            .attempt(&NormalizedQuery::new("what is the weather"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_clean_generated_name_empty() {
        assert_eq!(clean_generated_name(""), None);
        assert_eq!(clean_generated_name("   \n  "), None);
        assert_eq!(clean_generated_name("****"), None);
    }

    #[tokio::test]
    async fn test_request_carries_query_and_budget() {
        let generator = Arc::new(FakeTextGenerator::with_response("Adobe"));
        let resolver = GenerativeResolver::new(generator.clone(), 20);

        let name = resolver
            .ask_external_model("Tell me information about Adobe")
            .await;
        assert_eq!(name, Some("Adobe".to_string()));

        let request = generator.last_request().unwrap();
        assert_eq!(request.max_output_tokens, 20);
        assert!(request.instruction.contains("Query: Tell me information about Adobe"));
        assert!(request.instruction.contains("return NONE"));
    }

    #[tokio::test]
    async fn test_fault_is_no_answer() {
        let resolver = GenerativeResolver::new(Arc::new(FakeTextGenerator::failing()), 20);
        assert_eq!(resolver.ask_external_model("anything").await, None);
    }

    #[tokio::test]
    async fn test_attempt_is_freeform() {
        let resolver =
            GenerativeResolver::new(Arc::new(FakeTextGenerator::with_response("Adobe")), 20);
        let candidate = resolver
            .attempt(&NormalizedQuery::new("what does adobe do"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(candidate.name, "Adobe");
        assert_eq!(candidate.tier, MatchTier::Generative);
        assert!(!candidate.canonical);
    }
}
