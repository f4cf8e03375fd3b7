//! Resolver chain - composite resolver that tries tiers in order.
//!
//! The chain is the main entry point for company resolution. It normalizes
//! the query once, then walks its tiers until one returns a candidate.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::config::{ResolverConfig, TierKind};
use crate::errors::FaultClass;
use crate::models::{NormalizedQuery, ResolvedIdentity};
use crate::provider::{EntityRecognizer, TextGenerator};
use crate::registry::Registry;

use super::deterministic::DeterministicResolver;
use super::entity::EntityResolver;
use super::fuzzy::FuzzyResolver;
use super::generative::GenerativeResolver;
use super::heuristic::HeuristicResolver;
use super::traits::{CompanyResolver, Tier};

/// Composite resolver that tries multiple tiers in order.
///
/// The default order is:
/// 1. Deterministic (exact / token / substring)
/// 2. Fuzzy (similarity ratio at or above the threshold)
/// 3. Named entity (when a recognizer is available)
/// 4. Heuristic (capitalized words)
/// 5. Generative (when a text generator is available)
///
/// A tier returning `Ok(None)` or an error hands over to the next one.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(Registry::from_names(["Apple Inc", "Tesla, Inc."]));
/// let chain = ResolverChain::new(registry, &ResolverConfig::default());
///
/// let name = chain.resolve("What's happening with Tesla stock?").await;
/// // name = Some("Tesla, Inc.")
/// ```
pub struct ResolverChain {
    tiers: Vec<Box<dyn Tier>>,
}

impl ResolverChain {
    /// Chain with the local tiers only (deterministic, fuzzy, heuristic).
    pub fn new(registry: Arc<Registry>, config: &ResolverConfig) -> Self {
        Self::from_config(registry, config, None, None)
    }

    /// Chain with no tiers. Every query is unresolved until tiers are added.
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Build the chain in `config.tier_order`.
    ///
    /// The named-entity tier is installed only with a `recognizer` and the
    /// generative tier only with a `generator`.
    pub fn from_config(
        registry: Arc<Registry>,
        config: &ResolverConfig,
        recognizer: Option<Arc<dyn EntityRecognizer>>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let mut chain = Self::empty();

        for kind in &config.tier_order {
            match kind {
                TierKind::Deterministic => chain.add_tier(Box::new(DeterministicResolver::new(
                    registry.clone(),
                    config.min_token_len,
                ))),
                TierKind::Fuzzy => chain.add_tier(Box::new(FuzzyResolver::new(
                    registry.clone(),
                    config.fuzzy_threshold,
                ))),
                TierKind::NamedEntity => match &recognizer {
                    Some(recognizer) => chain.add_tier(Box::new(EntityResolver::new(
                        registry.clone(),
                        recognizer.clone(),
                    ))),
                    None => debug!("No entity recognizer configured, skipping NAMED_ENTITY tier"),
                },
                TierKind::Heuristic => chain.add_tier(Box::new(HeuristicResolver::new(
                    config.stop_words.clone(),
                ))),
                TierKind::Generative => match &generator {
                    Some(generator) => chain.add_tier(Box::new(GenerativeResolver::new(
                        generator.clone(),
                        config.generative.max_tokens,
                    ))),
                    None => debug!("No text generator configured, skipping GENERATIVE tier"),
                },
            }
        }

        chain
    }

    /// Append a tier to the end of the chain.
    pub fn add_tier(&mut self, tier: Box<dyn Tier>) {
        self.tiers.push(tier);
    }

    /// Builder-style [`add_tier`](Self::add_tier).
    pub fn with_tier(mut self, tier: Box<dyn Tier>) -> Self {
        self.add_tier(tier);
        self
    }

    /// Tier ids in walk order.
    pub fn tier_ids(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.id()).collect()
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl CompanyResolver for ResolverChain {
    async fn resolve_identity(&self, query: &str) -> Option<ResolvedIdentity> {
        let query = NormalizedQuery::new(query);
        if query.is_blank() {
            debug!("Blank query, nothing to resolve");
            return None;
        }

        for tier in &self.tiers {
            match tier.attempt(&query).await {
                Ok(Some(candidate)) => {
                    debug!(
                        "{} resolved '{}' to '{}' ({})",
                        tier.id(),
                        query.normalized(),
                        candidate.name,
                        candidate.tier
                    );
                    return Some(candidate.into());
                }
                Ok(None) => {}
                Err(e) => match e.fault_class() {
                    FaultClass::Transient => warn!("{} tier failed: {}", tier.id(), e),
                    FaultClass::Configuration => debug!("{} tier unavailable: {}", tier.id(), e),
                },
            }
        }

        debug!("No tier resolved '{}'", query.normalized());
        None
    }
}
