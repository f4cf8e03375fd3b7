//! Heuristic resolver - first capitalized word that is not a command or
//! filler word.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ResolverError;
use crate::models::{MatchCandidate, MatchTier, NormalizedQuery};

use super::traits::Tier;

static CAPITALIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z0-9.&-]+\b").expect("Invalid regex pattern"));

/// Low-precision fallback over capitalization patterns.
pub struct HeuristicResolver {
    stop_words: Vec<String>,
}

impl HeuristicResolver {
    pub fn new(stop_words: Vec<String>) -> Self {
        Self { stop_words }
    }

    /// First capitalized token of `cleaned_query` not on the stop-list.
    ///
    /// # Examples
    ///
    /// ```
    /// use fintel_identity::resolver::HeuristicResolver;
    ///
    /// let resolver = HeuristicResolver::new(vec!["Show".to_string()]);
    /// assert_eq!(
    ///     resolver.capitalized_fallback("Show me Coca-Cola earnings"),
    ///     Some("Coca-Cola".to_string())
    /// );
    /// ```
    pub fn capitalized_fallback(&self, cleaned_query: &str) -> Option<String> {
        CAPITALIZED
            .find_iter(cleaned_query)
            .map(|m| m.as_str())
            .find(|word| !self.stop_words.iter().any(|stop| stop == word))
            .map(str::to_string)
    }
}

#[async_trait]
impl Tier for HeuristicResolver {
    fn id(&self) -> &'static str {
        "HEURISTIC"
    }

    async fn attempt(
        &self,
        query: &NormalizedQuery,
    ) -> Result<Option<MatchCandidate>, ResolverError> {
        Ok(self
            .capitalized_fallback(query.cleaned())
            .map(|word| MatchCandidate::freeform(word, MatchTier::Heuristic)))
    }
}
