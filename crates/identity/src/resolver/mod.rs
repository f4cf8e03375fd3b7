//! Company resolution.
//!
//! This module provides the resolver chain that turns a free-text query into
//! a company identity, trying progressively more expensive and less precise
//! strategies.
//!
//! # Architecture
//!
//! The resolver uses a chain of responsibility pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ResolverChain                           │
//! │  normalize / clean / fold the query once                     │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 1. Deterministic                                        │ │
//! │  │    - exact key, then per entry token or substring       │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ miss                             │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 2. Fuzzy (ratio >= threshold)                           │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ miss                             │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 3. Named entity (ORG spans, linked to the registry)     │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ miss / fault                     │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 4. Heuristic (capitalized word not on the stop-list)    │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ miss                             │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 5. Generative (model names the company, or NONE)        │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tiers 1 and 2 return registry spellings; tiers 3 to 5 may return text
//! that is not in the registry.

mod chain;
mod deterministic;
mod entity;
mod fuzzy;
mod generative;
mod heuristic;
mod similarity;
mod traits;

// Re-export main types
pub use chain::ResolverChain;
pub use deterministic::DeterministicResolver;
pub use entity::EntityResolver;
pub use fuzzy::FuzzyResolver;
pub use generative::{GenerativeResolver, NO_COMPANY_SENTINEL};
pub use heuristic::HeuristicResolver;
pub use similarity::similarity_ratio;
pub use traits::{CompanyResolver, Tier};
