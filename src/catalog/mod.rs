// Copyright (c) 2025 - Cowboy AI, Inc.
//! Telemetry Catalog
//!
//! The catalog is the read-only model behind every operation in this
//! crate: a four-level hierarchy of domains, sensor types, nodes, and
//! parameter definitions, loaded once from configuration and navigated by
//! the resolver.
//!
//! # Load-time guarantees
//!
//! - parameter names are unique within their domain
//! - every sensor-type parameter reference resolves in its domain
//! - resolution/accuracy text is already parsed into typed fields
//! - every parameter carries a [`ParameterKind`] synthesis tag

pub mod config;
pub mod metadata;
pub mod model;
pub mod resolver;

pub use config::{
    CatalogConfig, DataType, DomainConfig, NodeConfig, ParameterConfig, SensorTypeConfig,
};
pub use model::{Catalog, CatalogError, Domain, Node, Parameter, ParameterKind, SensorType};
pub use resolver::ResolvedNode;
