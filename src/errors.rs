//! Error types for telemetry catalog operations

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur in telemetry catalog operations
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Node lookup failed
    #[error("Node with ID {0} not found")]
    NodeNotFound(String),

    /// Domain lookup failed
    #[error("Domain with ID {0} not found")]
    DomainNotFound(String),

    /// Sensor type lookup failed
    #[error("Sensor type with ID {0} not found")]
    SensorTypeNotFound(String),

    /// Catalog failed load-time validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for telemetry catalog operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

impl TelemetryError {
    /// The identifier a failed lookup was asked for, if this is a
    /// not-found error. Callers surface it verbatim to the requester.
    pub fn offending_id(&self) -> Option<&str> {
        match self {
            Self::NodeNotFound(id)
            | Self::DomainNotFound(id)
            | Self::SensorTypeNotFound(id) => Some(id),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TelemetryError {
    fn from(err: serde_json::Error) -> Self {
        TelemetryError::Serialization(err.to_string())
    }
}
