//! Synthetic IoT telemetry catalog and sensor data simulation
//!
//! This crate models a catalog of simulated sensor installations (domains,
//! sensor types, nodes, parameters) and synthesizes physically plausible
//! readings from it on demand. Nothing is persisted: every reading is
//! computed fresh from the read-only catalog, and historical queries are
//! reproducible because their randomness is seeded from (node, timestamp).

pub mod catalog;
pub mod envelope;
pub mod errors;
mod hashing;
pub mod series;
pub mod service;
pub mod synth;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogConfig, CatalogError};
pub use envelope::{ContentInstance, ContentInstanceEnvelope, EnvelopeBuilder};
pub use errors::{TelemetryError, TelemetryResult};
pub use series::{BulkSeriesGenerator, HistoricalSeriesGenerator};
pub use service::{CatalogTelemetryService, TelemetryApi};
pub use synth::{RainPolicy, Reading, ValueSynthesizer};
