// Copyright (c) 2025 - Cowboy AI, Inc.
//! Descriptor Resolution
//!
//! Navigates the catalog hierarchy to answer "which sensor type and domain
//! does this node belong to" and "which parameters does it report". Node
//! ids are assumed globally unique across domains; this is not enforced,
//! and a linear first-match-wins search mirrors that assumption.

use crate::errors::{TelemetryError, TelemetryResult};

use super::model::{Catalog, Domain, Node, Parameter, SensorType};

/// A node together with its owning sensor type and domain.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNode<'a> {
    pub node: &'a Node,
    pub sensor_type: &'a SensorType,
    pub domain: &'a Domain,
}

impl Catalog {
    /// Resolve a node id to the node and its owning sensor type and domain.
    pub fn find_node(&self, node_id: &str) -> TelemetryResult<ResolvedNode<'_>> {
        for domain in self.domains() {
            for sensor_type in &domain.sensor_types {
                for node in &sensor_type.nodes {
                    if node.id == node_id {
                        return Ok(ResolvedNode {
                            node,
                            sensor_type,
                            domain,
                        });
                    }
                }
            }
        }
        Err(TelemetryError::NodeNotFound(node_id.to_string()))
    }

    /// The parameter definitions a node reports, in the sensor type's
    /// declared order.
    ///
    /// Every name reference is guaranteed to resolve because unresolved
    /// references are rejected at catalog load.
    pub fn parameters_of(&self, node_id: &str) -> TelemetryResult<Vec<&Parameter>> {
        let resolved = self.find_node(node_id)?;
        Ok(resolved
            .sensor_type
            .parameter_names
            .iter()
            .filter_map(|name| resolved.domain.parameter(name))
            .collect())
    }

    /// Look up a domain by id.
    pub fn find_domain(&self, domain_id: &str) -> TelemetryResult<&Domain> {
        self.domains()
            .iter()
            .find(|d| d.id == domain_id)
            .ok_or_else(|| TelemetryError::DomainNotFound(domain_id.to_string()))
    }

    /// Look up a sensor type by id, with its owning domain.
    pub fn find_sensor_type(
        &self,
        sensor_type_id: &str,
    ) -> TelemetryResult<(&Domain, &SensorType)> {
        for domain in self.domains() {
            if let Some(sensor_type) = domain
                .sensor_types
                .iter()
                .find(|st| st.id == sensor_type_id)
            {
                return Ok((domain, sensor_type));
            }
        }
        Err(TelemetryError::SensorTypeNotFound(sensor_type_id.to_string()))
    }
}
