//! Resolver configuration.
//!
//! Defaults reproduce the production behavior: fuzzy acceptance at 0.70,
//! registry tokens longer than two characters, the command/filler stop-list,
//! and the tier order deterministic → fuzzy → NER → heuristic → generative.
//!
//! Configuration can be deserialized (camelCase JSON) or read from the
//! environment with [`ResolverConfig::from_env`].

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::registry::default_candidate_paths;

/// Default minimum similarity ratio for the fuzzy tier.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.70;

/// Default minimum registry token length for the token tier (length > 2).
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Command and filler words the heuristic tier never returns.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "Tell",
    "Give",
    "Show",
    "Provide",
    "Explain",
    "Me",
    "Info",
    "Information",
    "Details",
    "About",
    "Something",
    "Somthing",
    "Please",
    "Some",
    "Aomthing",
];

/// Default OpenAI-compatible endpoint for the generative capability.
pub const DEFAULT_GENERATIVE_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default generative model id.
pub const DEFAULT_GENERATIVE_MODEL: &str = "x-ai/grok-4.1-fast";

/// Default output budget for generative calls.
pub const DEFAULT_GENERATIVE_MAX_TOKENS: u32 = 20;

/// Resolution tiers, in the order they can be arranged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierKind {
    Deterministic,
    Fuzzy,
    NamedEntity,
    Heuristic,
    Generative,
}

impl TierKind {
    pub fn default_order() -> Vec<TierKind> {
        vec![
            TierKind::Deterministic,
            TierKind::Fuzzy,
            TierKind::NamedEntity,
            TierKind::Heuristic,
            TierKind::Generative,
        ]
    }
}

/// Settings for the text-generation capability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerativeConfig {
    /// API key. The generative tier and ticker lookup are disabled without one.
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL.
    pub base_url: Option<String>,
    /// Model id.
    pub model: String,
    /// Max tokens to generate for name extraction.
    pub max_tokens: u32,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Some(DEFAULT_GENERATIVE_BASE_URL.to_string()),
            model: DEFAULT_GENERATIVE_MODEL.to_string(),
            max_tokens: DEFAULT_GENERATIVE_MAX_TOKENS,
        }
    }
}

impl GenerativeConfig {
    /// True when an API key is present and non-blank.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Configuration for the company resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Dataset locations, tried in order.
    pub registry_paths: Vec<PathBuf>,
    /// Minimum similarity ratio accepted by the fuzzy tier, in `[0, 1]`.
    #[serde(deserialize_with = "deserialize_threshold")]
    pub fuzzy_threshold: f64,
    /// Minimum registry token length for the token tier.
    pub min_token_len: usize,
    /// Words the heuristic tier skips (exact, case-sensitive).
    pub stop_words: Vec<String>,
    /// Tier order. Tiers whose capability is not configured are skipped.
    pub tier_order: Vec<TierKind>,
    /// Endpoint of the NER service. The NER tier is disabled without one.
    pub ner_endpoint: Option<String>,
    /// Request timeout for the NER service, in seconds.
    pub ner_timeout_secs: u64,
    /// Generative capability settings.
    pub generative: GenerativeConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_paths: default_candidate_paths(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            tier_order: TierKind::default_order(),
            ner_endpoint: None,
            ner_timeout_secs: 10,
            generative: GenerativeConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Build a configuration from process environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `FINTEL_COMPANIES_CSV` | prepended to `registry_paths` |
    /// | `FINTEL_FUZZY_THRESHOLD` | `fuzzy_threshold` |
    /// | `FINTEL_NER_URL` | `ner_endpoint` |
    /// | `OPENROUTER_API_KEY` | `generative.api_key` |
    /// | `OPENAI_BASE_URL` | `generative.base_url` |
    /// | `FINTEL_LLM_MODEL` | `generative.model` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = var("FINTEL_COMPANIES_CSV") {
            config.registry_paths.insert(0, PathBuf::from(path));
        }

        if let Some(raw) = var("FINTEL_FUZZY_THRESHOLD") {
            config.fuzzy_threshold = match raw.trim().parse::<f64>() {
                Ok(value) => checked_threshold(value),
                Err(_) => {
                    warn!(
                        "Ignoring invalid fuzzy threshold '{}', using {}",
                        raw, DEFAULT_FUZZY_THRESHOLD
                    );
                    DEFAULT_FUZZY_THRESHOLD
                }
            };
        }

        config.ner_endpoint = var("FINTEL_NER_URL");
        config.generative.api_key = var("OPENROUTER_API_KEY");
        if let Some(url) = var("OPENAI_BASE_URL") {
            config.generative.base_url = Some(url);
        }
        if let Some(model) = var("FINTEL_LLM_MODEL") {
            config.generative.model = model;
        }

        config
    }
}

/// `value` when it is a ratio in `[0, 1]`, otherwise the default (logged).
fn checked_threshold(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn!(
            "Ignoring invalid fuzzy threshold {}, using {}",
            value, DEFAULT_FUZZY_THRESHOLD
        );
        DEFAULT_FUZZY_THRESHOLD
    }
}

fn deserialize_threshold<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(checked_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.fuzzy_threshold, 0.70);
        assert_eq!(config.min_token_len, 3);
        assert_eq!(config.tier_order, TierKind::default_order());
        assert!(config.stop_words.iter().any(|w| w == "Tell"));
        assert!(!config.generative.is_configured());
        assert!(config.ner_endpoint.is_none());
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = ResolverConfig::from_lookup(lookup_from(&[
            ("FINTEL_COMPANIES_CSV", "/srv/companies.csv"),
            ("FINTEL_FUZZY_THRESHOLD", "0.8"),
            ("FINTEL_NER_URL", "http://localhost:8080/ner"),
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1"),
            ("FINTEL_LLM_MODEL", "local-model"),
        ]));

        assert_eq!(config.registry_paths[0], PathBuf::from("/srv/companies.csv"));
        assert_eq!(config.registry_paths.len(), 5);
        assert_eq!(config.fuzzy_threshold, 0.8);
        assert_eq!(
            config.ner_endpoint.as_deref(),
            Some("http://localhost:8080/ner")
        );
        assert!(config.generative.is_configured());
        assert_eq!(
            config.generative.base_url.as_deref(),
            Some("http://localhost:9000/v1")
        );
        assert_eq!(config.generative.model, "local-model");
    }

    #[test]
    fn test_invalid_threshold_falls_back() {
        let config =
            ResolverConfig::from_lookup(lookup_from(&[("FINTEL_FUZZY_THRESHOLD", "1.5")]));
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);

        let config =
            ResolverConfig::from_lookup(lookup_from(&[("FINTEL_FUZZY_THRESHOLD", "high")]));
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);

        let config =
            ResolverConfig::from_lookup(lookup_from(&[("FINTEL_FUZZY_THRESHOLD", "NaN")]));
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn test_deserialize_invalid_threshold_falls_back() {
        let config: ResolverConfig = serde_json::from_str(r#"{"fuzzyThreshold": 1.5}"#).unwrap();
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);

        let config: ResolverConfig = serde_json::from_str(r#"{"fuzzyThreshold": -0.1}"#).unwrap();
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);

        let config: ResolverConfig = serde_json::from_str(r#"{"fuzzyThreshold": 1.0}"#).unwrap();
        assert_eq!(config.fuzzy_threshold, 1.0);
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let config = ResolverConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "  ")]));
        assert!(!config.generative.is_configured());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: ResolverConfig = serde_json::from_str(
            r#"{"fuzzyThreshold": 0.75, "tierOrder": ["DETERMINISTIC", "HEURISTIC"]}"#,
        )
        .unwrap();
        assert_eq!(config.fuzzy_threshold, 0.75);
        assert_eq!(
            config.tier_order,
            vec![TierKind::Deterministic, TierKind::Heuristic]
        );
        assert_eq!(config.min_token_len, DEFAULT_MIN_TOKEN_LEN);
        assert_eq!(config.generative.model, DEFAULT_GENERATIVE_MODEL);
    }
}
