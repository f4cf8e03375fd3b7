use std::collections::BTreeSet;

use crate::models::CanonicalName;
use crate::normalize::{fold, normalize};

/// One registry entry with its precomputed comparison key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryEntry {
    name: CanonicalName,
    key: String,
}

impl RegistryEntry {
    fn new(name: CanonicalName) -> Self {
        let key = fold(name.as_str());
        Self { name, key }
    }

    /// Stored spelling.
    pub fn name(&self) -> &CanonicalName {
        &self.name
    }

    /// Cleaned, lower-cased spelling used for comparisons.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whitespace-delimited tokens of [`key`](Self::key).
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.key.split_whitespace()
    }
}

/// Immutable, lexicographically ordered set of canonical names.
///
/// Iteration order is fixed at construction so tie-breaks in the matching
/// tiers are reproducible.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Build a registry from raw names. Names are normalized; blanks and
    /// exact duplicates are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fintel_identity::registry::Registry;
    ///
    /// let registry = Registry::from_names(["Tesla, Inc.", "Apple Inc", "Apple Inc", " "]);
    /// let names: Vec<&str> = registry.names().map(|n| n.as_str()).collect();
    /// assert_eq!(names, vec!["Apple Inc", "Tesla, Inc."]);
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<CanonicalName> = names
            .into_iter()
            .map(|raw| normalize(raw.as_ref()))
            .filter(|name| !name.is_empty())
            .map(CanonicalName::new)
            .collect();

        Self {
            entries: unique.into_iter().map(RegistryEntry::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registry order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.entries.iter().map(|entry| &entry.name)
    }
}
