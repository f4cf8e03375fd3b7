//! Resolution traits for the identity crate.
//!
//! Defines the per-strategy [`Tier`] abstraction and the [`CompanyResolver`]
//! entry point implemented by the chain.

use async_trait::async_trait;

use crate::errors::ResolverError;
use crate::models::{MatchCandidate, NormalizedQuery, ResolvedIdentity};

/// One strategy in the resolution waterfall.
///
/// Tiers are tried in order until one returns a candidate.
#[async_trait]
pub trait Tier: Send + Sync {
    /// Identifier used in logs (e.g. "DETERMINISTIC", "FUZZY").
    fn id(&self) -> &'static str;

    /// Attempt to identify the company in `query`.
    ///
    /// # Returns
    /// * `Ok(Some(candidate))` - Match found, the chain stops here
    /// * `Ok(None)` - No match, try the next tier
    /// * `Err(error)` - The tier faulted; the chain logs it and treats it as a miss
    async fn attempt(&self, query: &NormalizedQuery)
        -> Result<Option<MatchCandidate>, ResolverError>;
}

/// Main company resolver interface.
///
/// Unlike [`Tier::attempt`], resolution never fails: exhaustion and faults
/// both end in `None`.
#[async_trait]
pub trait CompanyResolver: Send + Sync {
    /// Resolve `query` to an identity with its tier of origin.
    async fn resolve_identity(&self, query: &str) -> Option<ResolvedIdentity>;

    /// Resolve `query` to a company name.
    async fn resolve(&self, query: &str) -> Option<String> {
        self.resolve_identity(query).await.map(|identity| identity.name)
    }
}
