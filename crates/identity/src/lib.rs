//! Fintel Identity Crate
//!
//! This crate turns a free-text user query into the canonical name of the
//! company it is about, optionally with its trading symbol.
//!
//! # Overview
//!
//! - Reference registry of company names loaded from a CSV dataset
//! - Deterministic, fuzzy, named-entity, heuristic and generative tiers
//! - Pluggable external capabilities (NER service, LLM) behind traits
//! - Ticker lookup for resolved companies
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   User query     | --> | NormalizedQuery  |  (normalize / clean / fold)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ResolverChain   |  (chain of responsibility)
//!                          +------------------+
//!                             |            |
//!                             v            v
//!                     +------------+  +---------------+
//!                     |  Registry  |  |  Capabilities |  (NER, LLM)
//!                     +------------+  +---------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | ResolvedIdentity |  (name, tier, score)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  TickerLookup    |  (optional)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Registry`] - Immutable, sorted set of canonical company names
//! - [`ResolverChain`] - Ordered tiers implementing [`CompanyResolver`]
//! - [`ResolvedIdentity`] - Resolution result with its tier of origin
//! - [`IdentityService`] - Resolver plus ticker lookup, built from [`ResolverConfig`]

pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod ticker;

pub use config::{GenerativeConfig, ResolverConfig, TierKind};
pub use errors::{FaultClass, ResolverError};
pub use models::{
    CanonicalName, CompanyIdentity, MatchCandidate, MatchTier, NormalizedQuery, ResolvedIdentity,
    Ticker,
};
pub use registry::{load_registry, Registry};
pub use resolver::{similarity_ratio, CompanyResolver, ResolverChain, Tier};
pub use service::{IdentityService, IdentityServiceTrait};
pub use ticker::TickerLookup;

// Re-export capability types
pub use provider::{
    EntityRecognizer, EntitySpan, FakeEntityRecognizer, FakeTextGenerator, GenerationRequest,
    HttpEntityRecognizer, LlmTextGenerator, TextGenerator,
};
