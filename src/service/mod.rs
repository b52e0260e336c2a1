// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for the Telemetry Catalog
//!
//! The application-facing request surface. A transport adapter (HTTP or
//! otherwise) maps requests onto [`TelemetryApi`] and serializes whatever
//! comes back; everything behind the trait is pure computation over the
//! read-only catalog plus the request's own randomness.
//!
//! # Architecture
//!
//! ```text
//! Transport adapter (external)
//!     ↓
//! TelemetryApi (this module)
//!     ↓
//! Catalog resolver → ValueSynthesizer (+ derived parameters)
//!     ↓
//! EnvelopeBuilder / HistoricalSeriesGenerator
//! ```
//!
//! Requests are independent: the catalog is never mutated after load and
//! every synthesis call owns its rng, so concurrent requests need no
//! coordination.

pub mod telemetry;

pub use telemetry::{
    CatalogTelemetryService, DomainSummary, NodeDetail, NodeSummary, ParameterView,
    SensorTypeDetail, SensorTypeSummary, TelemetryApi,
};
