//! Error types and fault classification for the identity crate.
//!
//! This module provides:
//! - [`ResolverError`]: The error enum shared by the registry loader, the
//!   resolution tiers and the external capability clients
//! - [`FaultClass`]: Classification deciding how a tier failure is reported

mod fault;

pub use fault::FaultClass;

use thiserror::Error;

/// Errors that can occur while loading reference data or calling an
/// external capability.
///
/// None of these ever escape [`resolve`](crate::resolver::CompanyResolver::resolve):
/// the chain logs them and treats the failing tier as a miss. Each variant is
/// classified via [`fault_class`](Self::fault_class).
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The dataset was found but has no `Name` column.
    #[error("Reference dataset has no '{column}' column: {path}")]
    MissingColumn {
        /// Path of the offending dataset
        path: String,
        /// Column that was expected
        column: String,
    },

    /// Credentials for an external capability are not configured.
    #[error("Missing API key for capability {0}")]
    MissingApiKey(String),

    /// The external capability returned an error.
    #[error("Capability error: {capability} - {message}")]
    Capability {
        /// The capability that failed (e.g. "NER", "GENERATIVE")
        capability: String,
        /// The error message reported by the capability
        message: String,
    },

    /// The request to the external capability timed out.
    #[error("Timeout: {capability}")]
    Timeout {
        /// The capability that timed out
        capability: String,
    },

    /// The capability answered but the payload could not be interpreted.
    #[error("Malformed response from {capability}: {message}")]
    MalformedResponse {
        /// The capability that produced the response
        capability: String,
        /// What was wrong with it
        message: String,
    },

    /// A network error occurred while talking to a capability.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A collaborator payload was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The reference dataset could not be parsed.
    #[error("Dataset parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The reference dataset could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolverError {
    /// Create a new capability error.
    pub fn capability(capability: &str, message: impl Into<String>) -> Self {
        Self::Capability {
            capability: capability.to_string(),
            message: message.into(),
        }
    }

    /// Create a new malformed-response error.
    pub fn malformed(capability: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            capability: capability.to_string(),
            message: message.into(),
        }
    }

    /// Returns the fault classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fintel_identity::errors::{FaultClass, ResolverError};
    ///
    /// let error = ResolverError::MissingApiKey("GENERATIVE".to_string());
    /// assert_eq!(error.fault_class(), FaultClass::Configuration);
    ///
    /// let error = ResolverError::Timeout { capability: "NER".to_string() };
    /// assert_eq!(error.fault_class(), FaultClass::Transient);
    /// ```
    pub fn fault_class(&self) -> FaultClass {
        match self {
            Self::MissingColumn { .. }
            | Self::MissingApiKey(_)
            | Self::Csv(_)
            | Self::Io(_) => FaultClass::Configuration,

            Self::Capability { .. }
            | Self::Timeout { .. }
            | Self::MalformedResponse { .. }
            | Self::Json(_)
            | Self::Network(_) => FaultClass::Transient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_configuration() {
        let error = ResolverError::MissingColumn {
            path: "companies.csv".to_string(),
            column: "Name".to_string(),
        };
        assert_eq!(error.fault_class(), FaultClass::Configuration);
    }

    #[test]
    fn test_capability_error_is_transient() {
        let error = ResolverError::capability("NER", "HTTP 500");
        assert_eq!(error.fault_class(), FaultClass::Transient);
    }

    #[test]
    fn test_malformed_response_is_transient() {
        let error = ResolverError::malformed("GENERATIVE", "empty body");
        assert_eq!(error.fault_class(), FaultClass::Transient);
    }

    #[test]
    fn test_json_error_is_transient() {
        let error = ResolverError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(error.fault_class(), FaultClass::Transient);
    }

    #[test]
    fn test_io_error_is_configuration() {
        let error = ResolverError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(error.fault_class(), FaultClass::Configuration);
    }

    #[test]
    fn test_error_display() {
        let error = ResolverError::MissingApiKey("GENERATIVE".to_string());
        assert_eq!(
            format!("{}", error),
            "Missing API key for capability GENERATIVE"
        );

        let error = ResolverError::capability("NER", "connection refused");
        assert_eq!(
            format!("{}", error),
            "Capability error: NER - connection refused"
        );

        let error = ResolverError::Timeout {
            capability: "GENERATIVE".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: GENERATIVE");
    }
}
