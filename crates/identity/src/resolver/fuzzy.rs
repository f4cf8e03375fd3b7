//! Fuzzy resolver - best similarity ratio against the registry.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ResolverError;
use crate::models::{CanonicalName, MatchCandidate, MatchTier, NormalizedQuery};
use crate::registry::Registry;

use super::similarity::similarity_ratio;
use super::traits::Tier;

/// Accepts the highest-scoring registry entry when its ratio reaches the
/// threshold. On equal scores the earlier entry in registry order is kept.
pub struct FuzzyResolver {
    registry: Arc<Registry>,
    threshold: f64,
}

impl FuzzyResolver {
    pub fn new(registry: Arc<Registry>, threshold: f64) -> Self {
        Self {
            registry,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Highest-scoring entry regardless of the threshold.
    pub fn best_candidate(&self, folded_query: &str) -> Option<(CanonicalName, f64)> {
        let mut best: Option<(&CanonicalName, f64)> = None;

        for entry in self.registry.entries() {
            let score = similarity_ratio(entry.key(), folded_query);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry.name(), score)),
            }
        }

        best.map(|(name, score)| (name.clone(), score))
    }

    /// Best entry if it reaches the threshold.
    pub fn best_fuzzy(&self, folded_query: &str) -> Option<(CanonicalName, f64)> {
        if folded_query.is_empty() {
            return None;
        }
        self.best_candidate(folded_query)
            .filter(|(_, score)| *score >= self.threshold)
    }
}

#[async_trait]
impl Tier for FuzzyResolver {
    fn id(&self) -> &'static str {
        "FUZZY"
    }

    async fn attempt(
        &self,
        query: &NormalizedQuery,
    ) -> Result<Option<MatchCandidate>, ResolverError> {
        Ok(self.best_fuzzy(query.folded()).map(|(name, score)| {
            MatchCandidate::canonical(name.as_str(), MatchTier::Fuzzy).with_score(score)
        }))
    }
}
