// Copyright (c) 2025 - Cowboy AI, Inc.
//! Telemetry Service
//!
//! Implements the request surface over an owned [`Catalog`]: descriptor
//! and data queries wrapped in content-instance envelopes, the
//! reproducible historical series, and the catalog browsing views.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, CatalogConfig, DataType, DomainConfig, NodeConfig, SensorTypeConfig,
};
use crate::envelope::{ContentInstanceEnvelope, EnvelopeBuilder};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::series::HistoricalSeriesGenerator;
use crate::synth::{RainPolicy, ValueSynthesizer};

/// Listing entry for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub domain_id: String,
    pub domain_name: String,
    pub domain_short_name: String,
    pub parameter_count: usize,
    pub sensor_type_count: usize,
}

/// Listing entry for one sensor type, flattened with its owning domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorTypeSummary {
    pub sensor_type_id: String,
    pub sensor_type_name: String,
    pub domain_id: String,
    pub domain_name: String,
    pub parameter_count: usize,
    pub node_count: usize,
}

/// Detail view of one sensor type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTypeDetail {
    #[serde(flatten)]
    pub sensor_type: SensorTypeConfig,
    pub domain_id: String,
    pub domain_name: String,
}

/// Listing entry for one node, flattened with its owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub node_id: String,
    pub node_name: String,
    pub domain_id: String,
    pub domain_name: String,
    pub sensor_type_id: String,
    pub sensor_type_name: String,
    pub node_area: String,
    pub node_protocol: String,
}

/// Detail view of one node, including its reported parameter names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDetail {
    #[serde(flatten)]
    pub node: NodeConfig,
    pub domain_id: String,
    pub domain_name: String,
    pub sensor_type_id: String,
    pub sensor_type_name: String,
    pub parameters: Vec<String>,
}

/// One parameter definition flattened with its owning domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterView {
    pub parameter_name: String,
    pub data_type: DataType,
    pub resolution: String,
    pub accuracy: String,
    pub domain_id: String,
    pub domain_name: String,
}

/// The request surface a transport adapter maps onto.
///
/// Every not-found case returns the distinct [`TelemetryError`] variant
/// echoing the offending identifier.
#[async_trait]
pub trait TelemetryApi: Send + Sync {
    /// Descriptor for a node: its parameter-name list, enveloped.
    async fn get_descriptor(&self, node_id: &str) -> TelemetryResult<ContentInstanceEnvelope>;

    /// A freshly synthesized current reading for a node, enveloped with
    /// live (non-reproducible) identifiers.
    async fn get_data(&self, node_id: &str) -> TelemetryResult<ContentInstanceEnvelope>;

    /// The reproducible 7-day historical series for a node.
    async fn get_historical_series(
        &self,
        node_id: &str,
    ) -> TelemetryResult<Vec<ContentInstanceEnvelope>>;

    /// All domains.
    async fn list_domains(&self) -> TelemetryResult<Vec<DomainSummary>>;

    /// Full configuration of one domain.
    async fn get_domain(&self, domain_id: &str) -> TelemetryResult<DomainConfig>;

    /// All sensor types across domains.
    async fn list_sensor_types(&self) -> TelemetryResult<Vec<SensorTypeSummary>>;

    /// One sensor type with its owning domain.
    async fn get_sensor_type(&self, sensor_type_id: &str) -> TelemetryResult<SensorTypeDetail>;

    /// All nodes across domains.
    async fn list_nodes(&self) -> TelemetryResult<Vec<NodeSummary>>;

    /// One node with its owners and parameter names.
    async fn get_node(&self, node_id: &str) -> TelemetryResult<NodeDetail>;

    /// All parameter definitions across domains.
    async fn list_parameters(&self) -> TelemetryResult<Vec<ParameterView>>;

    /// Parameter definitions of one domain.
    async fn get_domain_parameters(
        &self,
        domain_id: &str,
    ) -> TelemetryResult<Vec<crate::catalog::ParameterConfig>>;

    /// Nodes of one sensor type.
    async fn get_sensor_type_nodes(
        &self,
        sensor_type_id: &str,
    ) -> TelemetryResult<Vec<NodeConfig>>;

    /// The complete catalog configuration.
    async fn get_full_config(&self) -> TelemetryResult<CatalogConfig>;
}

/// [`TelemetryApi`] implementation over an owned catalog.
pub struct CatalogTelemetryService {
    catalog: Catalog,
    synthesizer: ValueSynthesizer,
    history: HistoricalSeriesGenerator,
}

impl CatalogTelemetryService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            synthesizer: ValueSynthesizer::new(RainPolicy::Random(0.3)),
            history: HistoricalSeriesGenerator::new(),
        }
    }

    /// The underlying catalog, for direct resolver access.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Descriptor envelope at an explicit time with an explicit rng.
    pub fn descriptor_at<R: Rng + ?Sized>(
        &self,
        node_id: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> TelemetryResult<ContentInstanceEnvelope> {
        let names: Vec<String> = self
            .catalog
            .parameters_of(node_id)?
            .iter()
            .map(|p| p.name.clone())
            .collect();
        EnvelopeBuilder::live(&names, now, rng)
    }

    /// Live reading envelope at an explicit time with an explicit rng.
    pub fn data_at<R: Rng + ?Sized>(
        &self,
        node_id: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> TelemetryResult<ContentInstanceEnvelope> {
        let parameters = self.catalog.parameters_of(node_id)?;
        let reading = self.synthesizer.reading(&parameters, now, rng);
        EnvelopeBuilder::live(&reading.values, now, rng)
    }

    /// Historical series for the window ending at an explicit time.
    pub fn historical_series_at(
        &self,
        node_id: &str,
        now: DateTime<Utc>,
    ) -> TelemetryResult<Vec<ContentInstanceEnvelope>> {
        self.history.generate(&self.catalog, node_id, now)
    }

    fn domain_config(&self, domain_id: &str) -> TelemetryResult<&DomainConfig> {
        self.catalog
            .config()
            .domains
            .iter()
            .find(|d| d.domain_id == domain_id)
            .ok_or_else(|| TelemetryError::DomainNotFound(domain_id.to_string()))
    }

    fn sensor_type_config(
        &self,
        sensor_type_id: &str,
    ) -> TelemetryResult<(&DomainConfig, &SensorTypeConfig)> {
        for domain in &self.catalog.config().domains {
            if let Some(sensor_type) = domain
                .sensor_types
                .iter()
                .find(|st| st.sensor_type_id == sensor_type_id)
            {
                return Ok((domain, sensor_type));
            }
        }
        Err(TelemetryError::SensorTypeNotFound(sensor_type_id.to_string()))
    }
}

#[async_trait]
impl TelemetryApi for CatalogTelemetryService {
    async fn get_descriptor(&self, node_id: &str) -> TelemetryResult<ContentInstanceEnvelope> {
        self.descriptor_at(node_id, Utc::now(), &mut rand::rng())
    }

    async fn get_data(&self, node_id: &str) -> TelemetryResult<ContentInstanceEnvelope> {
        self.data_at(node_id, Utc::now(), &mut rand::rng())
    }

    async fn get_historical_series(
        &self,
        node_id: &str,
    ) -> TelemetryResult<Vec<ContentInstanceEnvelope>> {
        self.historical_series_at(node_id, Utc::now())
    }

    async fn list_domains(&self) -> TelemetryResult<Vec<DomainSummary>> {
        Ok(self
            .catalog
            .config()
            .domains
            .iter()
            .map(|d| DomainSummary {
                domain_id: d.domain_id.clone(),
                domain_name: d.domain_name.clone(),
                domain_short_name: d.domain_short_name.clone(),
                parameter_count: d.parameters.len(),
                sensor_type_count: d.sensor_types.len(),
            })
            .collect())
    }

    async fn get_domain(&self, domain_id: &str) -> TelemetryResult<DomainConfig> {
        Ok(self.domain_config(domain_id)?.clone())
    }

    async fn list_sensor_types(&self) -> TelemetryResult<Vec<SensorTypeSummary>> {
        let mut summaries = Vec::new();
        for domain in &self.catalog.config().domains {
            for sensor_type in &domain.sensor_types {
                summaries.push(SensorTypeSummary {
                    sensor_type_id: sensor_type.sensor_type_id.clone(),
                    sensor_type_name: sensor_type.sensor_type_name.clone(),
                    domain_id: domain.domain_id.clone(),
                    domain_name: domain.domain_name.clone(),
                    parameter_count: sensor_type.parameters.len(),
                    node_count: sensor_type.nodes.len(),
                });
            }
        }
        Ok(summaries)
    }

    async fn get_sensor_type(&self, sensor_type_id: &str) -> TelemetryResult<SensorTypeDetail> {
        let (domain, sensor_type) = self.sensor_type_config(sensor_type_id)?;
        Ok(SensorTypeDetail {
            sensor_type: sensor_type.clone(),
            domain_id: domain.domain_id.clone(),
            domain_name: domain.domain_name.clone(),
        })
    }

    async fn list_nodes(&self) -> TelemetryResult<Vec<NodeSummary>> {
        let mut summaries = Vec::new();
        for domain in &self.catalog.config().domains {
            for sensor_type in &domain.sensor_types {
                for node in &sensor_type.nodes {
                    summaries.push(NodeSummary {
                        node_id: node.node_id.clone(),
                        node_name: node.node_name.clone(),
                        domain_id: domain.domain_id.clone(),
                        domain_name: domain.domain_name.clone(),
                        sensor_type_id: sensor_type.sensor_type_id.clone(),
                        sensor_type_name: sensor_type.sensor_type_name.clone(),
                        node_area: node.node_area.clone(),
                        node_protocol: node.node_protocol.clone(),
                    });
                }
            }
        }
        Ok(summaries)
    }

    async fn get_node(&self, node_id: &str) -> TelemetryResult<NodeDetail> {
        let resolved = self.catalog.find_node(node_id)?;
        Ok(NodeDetail {
            node: NodeConfig {
                node_id: resolved.node.id.clone(),
                node_name: resolved.node.name.clone(),
                node_area: resolved.node.area.clone(),
                node_protocol: resolved.node.protocol.clone(),
            },
            domain_id: resolved.domain.id.clone(),
            domain_name: resolved.domain.name.clone(),
            sensor_type_id: resolved.sensor_type.id.clone(),
            sensor_type_name: resolved.sensor_type.name.clone(),
            parameters: resolved.sensor_type.parameter_names.clone(),
        })
    }

    async fn list_parameters(&self) -> TelemetryResult<Vec<ParameterView>> {
        let mut views = Vec::new();
        for domain in &self.catalog.config().domains {
            for parameter in &domain.parameters {
                views.push(ParameterView {
                    parameter_name: parameter.parameter_name.clone(),
                    data_type: parameter.data_type,
                    resolution: parameter.resolution.clone(),
                    accuracy: parameter.accuracy.clone(),
                    domain_id: domain.domain_id.clone(),
                    domain_name: domain.domain_name.clone(),
                });
            }
        }
        Ok(views)
    }

    async fn get_domain_parameters(
        &self,
        domain_id: &str,
    ) -> TelemetryResult<Vec<crate::catalog::ParameterConfig>> {
        Ok(self.domain_config(domain_id)?.parameters.clone())
    }

    async fn get_sensor_type_nodes(
        &self,
        sensor_type_id: &str,
    ) -> TelemetryResult<Vec<NodeConfig>> {
        let (_, sensor_type) = self.sensor_type_config(sensor_type_id)?;
        Ok(sensor_type.nodes.clone())
    }

    async fn get_full_config(&self) -> TelemetryResult<CatalogConfig> {
        Ok(self.catalog.config().clone())
    }
}
