//! Identity models
//!
//! This module contains the core data types for company resolution:
//! - `name` - Canonical company name drawn from the reference registry
//! - `query` - Normalized views of a user query
//! - `identity` - Match candidates, resolved identities and tiers of origin
//! - `ticker` - Validated trading symbol

mod identity;
mod name;
mod query;
mod ticker;

pub use identity::{CompanyIdentity, MatchCandidate, MatchTier, ResolvedIdentity};
pub use name::CanonicalName;
pub use query::NormalizedQuery;
pub use ticker::{Ticker, TICKER_MAX_LEN};
