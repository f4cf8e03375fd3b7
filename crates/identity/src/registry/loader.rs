//! Reference dataset loading.
//!
//! Candidate locations are tried in order; the first one that yields a
//! non-empty set of names wins. Every failure along the way is logged and
//! skipped, and exhausting the list yields an empty registry.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::ResolverError;

use super::reference::Registry;

/// Column holding the company name.
pub const NAME_COLUMN: &str = "Name";

/// Locations searched when no explicit dataset path is configured.
pub fn default_candidate_paths() -> Vec<PathBuf> {
    [
        "data/companies.csv",
        "../data/companies.csv",
        "../../data/companies.csv",
        "datasets/companies.csv",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Load the registry from the first usable candidate.
///
/// Never fails: an unreadable, malformed or empty candidate is skipped, and
/// when no candidate is usable the empty registry is returned.
pub fn load_registry<P: AsRef<Path>>(candidate_paths: &[P]) -> Registry {
    for path in candidate_paths {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Reference dataset not found at {}", path.display());
            continue;
        }

        match read_names(path) {
            Ok(names) if !names.is_empty() => {
                let registry = Registry::from_names(names);
                if registry.is_empty() {
                    warn!("Reference dataset {} has no usable names", path.display());
                    continue;
                }
                info!(
                    "Loaded {} company names from {}",
                    registry.len(),
                    path.display()
                );
                return registry;
            }
            Ok(_) => {
                warn!("Reference dataset {} is empty", path.display());
            }
            Err(e) => {
                warn!("Error loading reference dataset {}: {}", path.display(), e);
            }
        }
    }

    warn!("Could not find a company dataset. Proceeding without company list.");
    Registry::empty()
}

/// Read the `Name` column of a CSV file.
///
/// The header match is exact first, then case-insensitive.
pub fn read_names(path: &Path) -> Result<Vec<String>, ResolverError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .or_else(|| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(NAME_COLUMN))
        })
        .ok_or_else(|| ResolverError::MissingColumn {
            path: path.display().to_string(),
            column: NAME_COLUMN.to_string(),
        })?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(column) {
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(file);
        let mut handle = std::fs::File::create(&path).unwrap();
        handle.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_names_from_name_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "companies.csv",
            "Symbol,Name,Sector\nAAPL,Apple Inc.,Technology\nTSLA,\"Tesla, Inc.\",Consumer\n",
        );

        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["Apple Inc.", "Tesla, Inc."]);
    }

    #[test]
    fn test_read_names_case_insensitive_header() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "companies.csv", "name\nMicrosoft Corp\n");

        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["Microsoft Corp"]);
    }

    #[test]
    fn test_read_names_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "companies.csv", "Symbol,Sector\nAAPL,Technology\n");

        match read_names(&path) {
            Err(ResolverError::MissingColumn { column, .. }) => assert_eq!(column, "Name"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_registry_skips_missing_and_empty_candidates() {
        let dir = TempDir::new().unwrap();
        let empty = write_csv(&dir, "empty.csv", "Name\n");
        let good = write_csv(&dir, "good.csv", "Name\nApple Inc\nNVIDIA Corp\n");
        let missing = dir.path().join("missing.csv");

        let registry = load_registry(&[missing, empty, good]);
        let names: Vec<&str> = registry.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Apple Inc", "NVIDIA Corp"]);
    }

    #[test]
    fn test_load_registry_first_usable_wins() {
        let dir = TempDir::new().unwrap();
        let first = write_csv(&dir, "first.csv", "Name\nApple Inc\n");
        let second = write_csv(&dir, "second.csv", "Name\nTesla, Inc.\n");

        let registry = load_registry(&[first, second]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names().next().unwrap().as_str(), "Apple Inc");
    }

    #[test]
    fn test_load_registry_skips_malformed_candidate() {
        let dir = TempDir::new().unwrap();
        let bad = write_csv(&dir, "bad.csv", "Ticker\nAAPL\n");
        let good = write_csv(&dir, "good.csv", "Name\nApple Inc\n");

        let registry = load_registry(&[bad, good]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_registry_nothing_usable_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = load_registry(&[dir.path().join("nope.csv")]);
        assert!(registry.is_empty());

        let none: [PathBuf; 0] = [];
        assert!(load_registry(&none).is_empty());
    }

    #[test]
    fn test_default_candidate_paths_order() {
        let paths = default_candidate_paths();
        assert_eq!(paths.first().unwrap(), &PathBuf::from("data/companies.csv"));
        assert_eq!(paths.len(), 4);
    }
}
