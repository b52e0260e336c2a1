// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Configuration Schema
//!
//! Wire format for the catalog document: a four-level hierarchy of
//! domains → sensor types → nodes, with parameter definitions held at the
//! domain level and referenced by name from sensor types. Fetching the
//! document (file, object store, etc.) is the caller's concern; this module
//! only defines the shape and deserializes already-loaded bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete catalog configuration, loaded once at startup and read-only
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Top-level domains (e.g. air quality, water quality)
    pub domains: Vec<DomainConfig>,
}

impl CatalogConfig {
    /// Deserialize a catalog configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One domain: a grouping of related parameters and the sensor types that
/// report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub domain_id: String,
    pub domain_name: String,
    pub domain_short_name: String,
    pub parameters: Vec<ParameterConfig>,
    pub sensor_types: Vec<SensorTypeConfig>,
}

/// Declared metadata for one measurable quantity.
///
/// `resolution` and `accuracy` are free-text as found in vendor datasheets
/// ("0.1 °C", "± 0.5 °C"); they are parsed into typed fields once at
/// catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub parameter_name: String,
    pub data_type: DataType,
    pub resolution: String,
    pub accuracy: String,
}

/// Parameter value representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Float,
    Integer,
    String,
}

impl DataType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named bundle of parameters reported together by a class of nodes.
///
/// `parameters` lists names that must resolve within the owning domain's
/// parameter definitions, in reporting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTypeConfig {
    pub sensor_type_id: String,
    pub sensor_type_name: String,
    pub parameters: Vec<String>,
    pub nodes: Vec<NodeConfig>,
}

/// One simulated physical sensor installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub node_id: String,
    pub node_name: String,
    pub node_area: String,
    pub node_protocol: String,
}
