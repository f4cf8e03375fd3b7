use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Authoritative spelling of a company as stored in the reference dataset.
///
/// Case is preserved as stored. Ordering and equality are on the stored
/// string; matching tiers compare against the registry entry's folded key.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(Arc<str>);

impl CanonicalName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
