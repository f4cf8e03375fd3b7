//! Deterministic resolver - exact, token and substring matching against the
//! reference registry.
//!
//! Comparisons use each entry's cleaned, lower-cased key against the folded
//! query, and the stored spelling is returned. An exact match anywhere in the
//! registry wins over token/substring matches; otherwise the first entry in
//! registry order that matches by token or substring wins. Distinct entries
//! that could both match at the token/substring level are resolved by that
//! order alone.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ResolverError;
use crate::models::{CanonicalName, MatchCandidate, MatchTier, NormalizedQuery};
use crate::registry::{Registry, RegistryEntry};

use super::traits::Tier;

/// Exact / token / substring matcher.
pub struct DeterministicResolver {
    registry: Arc<Registry>,
    min_token_len: usize,
}

impl DeterministicResolver {
    pub fn new(registry: Arc<Registry>, min_token_len: usize) -> Self {
        Self {
            registry,
            min_token_len,
        }
    }

    /// Find the registry entry `folded_query` refers to, with how it matched.
    pub fn match_exact_or_substring(&self, folded_query: &str) -> Option<(CanonicalName, MatchTier)> {
        if folded_query.is_empty() {
            return None;
        }

        if let Some(entry) = self
            .registry
            .entries()
            .find(|entry| entry.key() == folded_query)
        {
            return Some((entry.name().clone(), MatchTier::Exact));
        }

        self.registry.entries().find_map(|entry| {
            self.structural_match(entry, folded_query)
                .map(|tier| (entry.name().clone(), tier))
        })
    }

    fn structural_match(&self, entry: &RegistryEntry, folded_query: &str) -> Option<MatchTier> {
        let token_hit = entry
            .tokens()
            .filter(|token| token.chars().count() >= self.min_token_len)
            .any(|token| folded_query.contains(token));
        if token_hit {
            return Some(MatchTier::Token);
        }

        if !entry.key().is_empty() && folded_query.contains(entry.key()) {
            return Some(MatchTier::Substring);
        }

        None
    }
}

#[async_trait]
impl Tier for DeterministicResolver {
    fn id(&self) -> &'static str {
        "DETERMINISTIC"
    }

    async fn attempt(
        &self,
        query: &NormalizedQuery,
    ) -> Result<Option<MatchCandidate>, ResolverError> {
        Ok(self
            .match_exact_or_substring(query.folded())
            .map(|(name, tier)| MatchCandidate::canonical(name.as_str(), tier)))
    }
}
