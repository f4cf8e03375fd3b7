//! Identity service - resolve a query and attach the trading symbol.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};

use crate::config::ResolverConfig;
use crate::models::CompanyIdentity;
use crate::provider::{EntityRecognizer, HttpEntityRecognizer, LlmTextGenerator, TextGenerator};
use crate::registry::load_registry;
use crate::resolver::{CompanyResolver, ResolverChain};
use crate::ticker::TickerLookup;

/// Trait for identifying the company a query is about.
#[async_trait]
pub trait IdentityServiceTrait: Send + Sync {
    /// Resolve `query` and, when possible, its ticker.
    async fn identify(&self, query: &str) -> Option<CompanyIdentity>;
}

/// Resolver plus optional ticker lookup.
pub struct IdentityService {
    resolver: Arc<dyn CompanyResolver>,
    tickers: Option<TickerLookup>,
}

impl IdentityService {
    pub fn new(resolver: Arc<dyn CompanyResolver>) -> Self {
        Self {
            resolver,
            tickers: None,
        }
    }

    pub fn with_ticker_lookup(mut self, tickers: TickerLookup) -> Self {
        self.tickers = Some(tickers);
        self
    }

    /// Build the full pipeline from configuration.
    ///
    /// Loads the registry from `config.registry_paths`, installs the NER tier
    /// when an endpoint is configured, and installs the generative tier and
    /// ticker lookup when an API key is configured.
    pub fn from_config(config: &ResolverConfig) -> Self {
        let registry = Arc::new(load_registry(&config.registry_paths));

        let recognizer = config.ner_endpoint.as_ref().map(|endpoint| {
            Arc::new(HttpEntityRecognizer::new(
                endpoint.clone(),
                Duration::from_secs(config.ner_timeout_secs),
            )) as Arc<dyn EntityRecognizer>
        });

        let generator = match LlmTextGenerator::from_config(&config.generative) {
            Ok(generator) => Some(Arc::new(generator) as Arc<dyn TextGenerator>),
            Err(e) => {
                warn!("Generative capability disabled: {}", e);
                None
            }
        };

        let chain = ResolverChain::from_config(registry, config, recognizer, generator.clone());
        info!("Identity resolver tiers: {}", chain.tier_ids().join(" -> "));

        let service = Self::new(Arc::new(chain));
        match generator {
            Some(generator) => service.with_ticker_lookup(TickerLookup::new(generator)),
            None => service,
        }
    }

    /// Resolve `query` to a company name only.
    pub async fn resolve(&self, query: &str) -> Option<String> {
        self.resolver.resolve(query).await
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn identify(&self, query: &str) -> Option<CompanyIdentity> {
        let identity = self.resolver.resolve_identity(query).await?;

        let ticker = match &self.tickers {
            Some(tickers) => tickers.lookup(&identity.name).await,
            None => None,
        };

        Some(CompanyIdentity {
            name: identity.name,
            ticker,
            tier: identity.tier,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::models::MatchTier;
    use crate::provider::FakeTextGenerator;
    use crate::registry::Registry;

    fn chain(names: &[&str]) -> Arc<dyn CompanyResolver> {
        Arc::new(ResolverChain::new(
            Arc::new(Registry::from_names(names)),
            &ResolverConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_identify_without_ticker_lookup() {
        let service = IdentityService::new(chain(&["Apple Inc"]));
        let identity = service.identify("apple inc").await.unwrap();
        assert_eq!(identity.name, "Apple Inc");
        assert_eq!(identity.ticker, None);
        assert_eq!(identity.tier, MatchTier::Exact);
    }

    #[tokio::test]
    async fn test_identify_attaches_ticker() {
        let generator = Arc::new(FakeTextGenerator::with_response(r#"{"ticker":"AAPL"}"#));
        let service = IdentityService::new(chain(&["Apple Inc"]))
            .with_ticker_lookup(TickerLookup::new(generator.clone()));

        let identity = service.identify("apple inc").await.unwrap();
        assert_eq!(identity.ticker.unwrap().as_str(), "AAPL");
        assert!(generator
            .last_request()
            .unwrap()
            .instruction
            .contains("'Apple Inc'"));
    }

    #[tokio::test]
    async fn test_unresolved_query_skips_ticker_lookup() {
        let generator = Arc::new(FakeTextGenerator::with_response(r#"{"ticker":"AAPL"}"#));
        let service = IdentityService::new(chain(&["Apple Inc"]))
            .with_ticker_lookup(TickerLookup::new(generator.clone()));

        assert_eq!(service.identify("what about stocks").await, None);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_from_config_without_dataset_or_capabilities() {
        let config = ResolverConfig {
            registry_paths: vec![PathBuf::from("/nonexistent/companies.csv")],
            ..ResolverConfig::default()
        };
        let service = IdentityService::from_config(&config);

        assert!(service.tickers.is_none());
        assert_eq!(
            service.resolve("Tell me about Nvidia").await,
            Some("Nvidia".to_string())
        );
    }
}
