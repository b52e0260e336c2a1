// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Catalog Model
//!
//! Runtime representation of the catalog hierarchy, built once from
//! [`CatalogConfig`] and never mutated afterwards. Loading is where all
//! validation and metadata parsing happens:
//!
//! - parameter names must be unique within their domain
//! - every sensor-type parameter reference must resolve in the owning
//!   domain (an unresolved reference is a load-time error, not a silent
//!   skip at query time)
//! - free-text resolution/accuracy strings become typed
//!   `decimal_places`/`noise_bound` fields
//! - each parameter gets a [`ParameterKind`] tag derived from its name,
//!   so synthesis dispatches on a tag instead of re-matching substrings

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::config::{CatalogConfig, DataType, DomainConfig, ParameterConfig};
use super::metadata;

/// Catalog load-time validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two parameters with the same name in one domain
    #[error("Duplicate parameter name '{name}' in domain {domain}")]
    DuplicateParameter { domain: String, name: String },

    /// Sensor type references a parameter the domain does not define
    #[error("Sensor type {sensor_type} references unknown parameter '{name}'")]
    UnresolvedParameterReference { sensor_type: String, name: String },
}

/// Physical-semantics category of a parameter, assigned once at load from
/// its name.
///
/// Fragment matching is ordered so that names containing another rule's
/// fragment land on the right category: "AQI-MP" before "AQI", "CO2"
/// before "CO". "Relative Humidity" and "Humidity" are synonyms and share
/// one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Temperature,
    Humidity,
    ParticulateMatter,
    CarbonMonoxide,
    CarbonDioxide,
    NitrogenDioxide,
    Ozone,
    Ph,
    Turbidity,
    DissolvedOxygen,
    TotalDissolvedSolids,
    AirQualityIndex,
    DataInterval,
    /// Derived: qualitative category of the reading's AQI value
    AirQualityLabel,
    /// Derived: dominant-pollutant label
    DominantPollutant,
    /// No recognized physical semantics
    Generic,
}

impl ParameterKind {
    /// Classify a parameter name.
    pub fn from_name(name: &str) -> Self {
        if name.contains("AQI-MP") {
            Self::DominantPollutant
        } else if name.contains("AQL") {
            Self::AirQualityLabel
        } else if name.contains("AQI") {
            Self::AirQualityIndex
        } else if name.contains("Data Interval") {
            Self::DataInterval
        } else if name.contains("Temperature") {
            Self::Temperature
        } else if name.contains("Humidity") {
            Self::Humidity
        } else if name.contains("PM2.5") || name.contains("PM10") {
            Self::ParticulateMatter
        } else if name.contains("CO2") {
            Self::CarbonDioxide
        } else if name.contains("CO") {
            Self::CarbonMonoxide
        } else if name.contains("NO2") {
            Self::NitrogenDioxide
        } else if name.contains("O3") {
            Self::Ozone
        } else if name.contains("pH") {
            Self::Ph
        } else if name.contains("Turbidity") {
            Self::Turbidity
        } else if name.contains("Dissolved Oxygen") {
            Self::DissolvedOxygen
        } else if name.contains("TDS") {
            Self::TotalDissolvedSolids
        } else {
            Self::Generic
        }
    }

    /// Whether this parameter is derived from other values in the same
    /// reading (computed in phase 2 of the reading pipeline).
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::AirQualityLabel | Self::DominantPollutant)
    }
}

/// One measurable quantity with its declared and parsed metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name, unique within the owning domain
    pub name: String,
    /// Value representation
    pub data_type: DataType,
    /// Declared resolution text, kept for config views
    pub resolution: String,
    /// Declared accuracy text, kept for config views
    pub accuracy: String,
    /// Decimal precision parsed from `resolution`
    pub decimal_places: usize,
    /// Noise range parsed from `accuracy`
    pub noise_bound: f64,
    /// Synthesis category derived from `name`
    pub kind: ParameterKind,
}

impl Parameter {
    fn from_config(config: &ParameterConfig) -> Self {
        Self {
            name: config.parameter_name.clone(),
            data_type: config.data_type,
            resolution: config.resolution.clone(),
            accuracy: config.accuracy.clone(),
            decimal_places: metadata::decimal_places(&config.resolution),
            noise_bound: metadata::noise_bound(&config.accuracy),
            kind: ParameterKind::from_name(&config.parameter_name),
        }
    }
}

/// One simulated sensor installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub area: String,
    pub protocol: String,
}

/// A class of nodes reporting the same ordered parameter bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorType {
    pub id: String,
    pub name: String,
    /// Parameter names in reporting order; all resolve in the owning
    /// domain (validated at load)
    pub parameter_names: Vec<String>,
    pub nodes: Vec<Node>,
}

/// Top-level grouping of parameters and sensor types.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub parameters: Vec<Parameter>,
    pub sensor_types: Vec<SensorType>,
}

impl Domain {
    /// Look up a parameter definition by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// The loaded catalog. Owns every domain/sensor-type/node/parameter for
/// the process lifetime; pure lookup, no mutation, no locking needed.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Vec<Domain>,
    /// The source configuration, kept verbatim for config-shaped views
    config: CatalogConfig,
}

impl Catalog {
    /// Build and validate a catalog from its configuration.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut domains = Vec::with_capacity(config.domains.len());
        for domain_config in &config.domains {
            domains.push(Self::build_domain(domain_config)?);
        }

        let node_count: usize = domains
            .iter()
            .flat_map(|d| &d.sensor_types)
            .map(|st| st.nodes.len())
            .sum();
        info!(
            domains = domains.len(),
            nodes = node_count,
            "catalog loaded"
        );

        Ok(Self { domains, config })
    }

    /// Parse and load a catalog from a JSON document in one step.
    pub fn from_json(json: &str) -> crate::TelemetryResult<Self> {
        let config = CatalogConfig::from_json(json)?;
        Ok(Self::from_config(config)?)
    }

    fn build_domain(config: &DomainConfig) -> Result<Domain, CatalogError> {
        let mut parameters: Vec<Parameter> = Vec::with_capacity(config.parameters.len());
        for parameter_config in &config.parameters {
            if parameters
                .iter()
                .any(|p| p.name == parameter_config.parameter_name)
            {
                return Err(CatalogError::DuplicateParameter {
                    domain: config.domain_id.clone(),
                    name: parameter_config.parameter_name.clone(),
                });
            }
            parameters.push(Parameter::from_config(parameter_config));
        }

        let mut sensor_types = Vec::with_capacity(config.sensor_types.len());
        for sensor_type_config in &config.sensor_types {
            for name in &sensor_type_config.parameters {
                if !parameters.iter().any(|p| &p.name == name) {
                    return Err(CatalogError::UnresolvedParameterReference {
                        sensor_type: sensor_type_config.sensor_type_id.clone(),
                        name: name.clone(),
                    });
                }
            }
            sensor_types.push(SensorType {
                id: sensor_type_config.sensor_type_id.clone(),
                name: sensor_type_config.sensor_type_name.clone(),
                parameter_names: sensor_type_config.parameters.clone(),
                nodes: sensor_type_config
                    .nodes
                    .iter()
                    .map(|n| Node {
                        id: n.node_id.clone(),
                        name: n.node_name.clone(),
                        area: n.node_area.clone(),
                        protocol: n.node_protocol.clone(),
                    })
                    .collect(),
            });
        }

        Ok(Domain {
            id: config.domain_id.clone(),
            name: config.domain_name.clone(),
            short_name: config.domain_short_name.clone(),
            parameters,
            sensor_types,
        })
    }

    /// All loaded domains.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// The source configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
