//! Integration tests for building the identity pipeline from configuration.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use fintel_identity::{
    FakeEntityRecognizer, FakeTextGenerator, IdentityService, IdentityServiceTrait, MatchTier,
    Registry, ResolverChain, ResolverConfig, TickerLookup,
};
use tempfile::TempDir;

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("companies.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        b"Symbol,Name,Sector\n\
AAPL,Apple Inc,Information Technology\n\
MSFT,Microsoft Corp,Information Technology\n\
TSLA,\"Tesla, Inc.\",Consumer Discretionary\n",
    )
    .unwrap();
    path
}

#[tokio::test]
async fn test_from_config_loads_dataset() {
    let dir = TempDir::new().unwrap();
    let config = ResolverConfig::from_lookup(|key| match key {
        "FINTEL_COMPANIES_CSV" => Some(write_dataset(&dir).display().to_string()),
        _ => None,
    });

    let service = IdentityService::from_config(&config);
    let identity = service
        .identify("What's happening with Tesla stock?")
        .await
        .unwrap();

    assert_eq!(identity.name, "Tesla, Inc.");
    assert_eq!(identity.tier, MatchTier::Token);
    assert_eq!(identity.ticker, None);
}

#[tokio::test]
async fn test_from_config_with_missing_dataset_falls_back() {
    let dir = TempDir::new().unwrap();
    let config = ResolverConfig {
        registry_paths: vec![dir.path().join("missing.csv")],
        ..ResolverConfig::default()
    };

    let service = IdentityService::from_config(&config);

    assert_eq!(service.resolve("apple inc").await, None);
    assert_eq!(
        service.resolve("Show me Coca-Cola earnings").await,
        Some("Coca-Cola".to_string())
    );
}

#[tokio::test]
async fn test_identify_with_fake_capabilities() {
    let registry = Arc::new(Registry::from_names(["Apple Inc", "Adobe Inc."]));
    let recognizer = Arc::new(FakeEntityRecognizer::with_orgs(&["Adobe"]));
    let tickers = Arc::new(FakeTextGenerator::with_response(
        "```json\n{\"ticker\":\"ADBE\"}\n```",
    ));
    let chain = ResolverChain::from_config(
        registry,
        &ResolverConfig::default(),
        Some(recognizer),
        None,
    );
    let service =
        IdentityService::new(Arc::new(chain)).with_ticker_lookup(TickerLookup::new(tickers));

    let identity = service
        .identify("what did the pdf people report")
        .await
        .unwrap();

    assert_eq!(identity.name, "Adobe Inc.");
    assert_eq!(identity.tier, MatchTier::NamedEntity);
    assert_eq!(identity.ticker.unwrap().as_str(), "ADBE");
}
