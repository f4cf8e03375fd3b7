//! Reference registry of canonical company names.
//!
//! The registry is built once (usually from a CSV dataset with a `Name`
//! column), sorted, and shared read-only behind an `Arc` by every resolution
//! call. A missing dataset produces an empty registry, never an error.

mod loader;
mod reference;

pub use loader::{default_candidate_paths, load_registry, read_names, NAME_COLUMN};
pub use reference::{Registry, RegistryEntry};
