//! Named-entity resolver - organization spans from the NLP capability,
//! linked back to the registry when possible.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::ResolverError;
use crate::models::{MatchCandidate, MatchTier, NormalizedQuery};
use crate::provider::EntityRecognizer;
use crate::registry::Registry;

use super::traits::Tier;

/// Resolves through organization spans.
///
/// For each span in capability order, the first registry entry containing
/// the span (case-insensitive) is the result. Without a registry the first
/// span is returned as extracted. With a registry and no linked span the
/// tier misses.
pub struct EntityResolver {
    registry: Arc<Registry>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl EntityResolver {
    pub fn new(registry: Arc<Registry>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            registry,
            recognizer,
        }
    }

    /// Organization spans of `cleaned_query`, trimmed, in capability order.
    pub async fn extract_orgs(&self, cleaned_query: &str) -> Result<Vec<String>, ResolverError> {
        let spans = self.recognizer.recognize(cleaned_query).await?;
        Ok(spans
            .into_iter()
            .filter(|span| span.is_organization())
            .map(|span| span.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect())
    }

    fn link(&self, orgs: &[String]) -> Option<MatchCandidate> {
        if self.registry.is_empty() {
            return orgs
                .first()
                .map(|org| MatchCandidate::freeform(org.as_str(), MatchTier::NamedEntity));
        }

        orgs.iter().find_map(|org| {
            let needle = org.to_lowercase();
            self.registry
                .names()
                .find(|name| name.as_str().to_lowercase().contains(&needle))
                .map(|name| MatchCandidate::canonical(name.as_str(), MatchTier::NamedEntity))
        })
    }
}

#[async_trait]
impl Tier for EntityResolver {
    fn id(&self) -> &'static str {
        "NAMED_ENTITY"
    }

    async fn attempt(
        &self,
        query: &NormalizedQuery,
    ) -> Result<Option<MatchCandidate>, ResolverError> {
        let orgs = self.extract_orgs(query.cleaned()).await?;
        debug!(
            "{} returned {} organization span(s)",
            self.recognizer.id(),
            orgs.len()
        );
        Ok(self.link(&orgs))
    }
}
