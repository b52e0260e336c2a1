// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared test fixtures: a small two-domain catalog configuration.
#![allow(dead_code)]

use cim_iot_telemetry::catalog::{
    Catalog, CatalogConfig, DataType, DomainConfig, NodeConfig, ParameterConfig, SensorTypeConfig,
};

pub fn parameter(name: &str, data_type: DataType, resolution: &str, accuracy: &str) -> ParameterConfig {
    ParameterConfig {
        parameter_name: name.to_string(),
        data_type,
        resolution: resolution.to_string(),
        accuracy: accuracy.to_string(),
    }
}

fn node(id: &str, name: &str, area: &str) -> NodeConfig {
    NodeConfig {
        node_id: id.to_string(),
        node_name: name.to_string(),
        node_area: area.to_string(),
        node_protocol: "LoRaWAN".to_string(),
    }
}

/// Two domains, three sensor types, four nodes.
pub fn sample_config() -> CatalogConfig {
    CatalogConfig {
        domains: vec![
            DomainConfig {
                domain_id: "DOM-AQ".to_string(),
                domain_name: "Air Quality".to_string(),
                domain_short_name: "AQ".to_string(),
                parameters: vec![
                    parameter("Temperature", DataType::Float, "0.1 °C", "±0.5 °C"),
                    parameter("Relative Humidity", DataType::Float, "0.1 %", "±3 %"),
                    parameter("PM2.5", DataType::Float, "1 µg/m³", "±2 µg/m³"),
                    parameter("PM10", DataType::Float, "1 µg/m³", "±2 µg/m³"),
                    parameter("NO2", DataType::Float, "0.001 ppm", "±0.003 ppm"),
                    parameter("O3", DataType::Float, "0.001 ppm", "±0.002 ppm"),
                    parameter("AQI", DataType::Integer, "1", "±5"),
                    parameter("AQL", DataType::String, "1", "±0"),
                    parameter("AQI-MP", DataType::String, "1", "±0"),
                    parameter("Data Interval", DataType::Integer, "1 s", "±0 s"),
                ],
                sensor_types: vec![
                    SensorTypeConfig {
                        sensor_type_id: "ST-AQ-FULL".to_string(),
                        sensor_type_name: "Ambient Air Station".to_string(),
                        parameters: [
                            "Temperature",
                            "Relative Humidity",
                            "PM2.5",
                            "PM10",
                            "NO2",
                            "O3",
                            "AQI",
                            "AQL",
                            "AQI-MP",
                            "Data Interval",
                        ]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                        nodes: vec![
                            node("AQ-001", "Downtown Station", "Downtown"),
                            node("AQ-002", "Harbour Station", "Harbour"),
                        ],
                    },
                    SensorTypeConfig {
                        sensor_type_id: "ST-AQ-MINI".to_string(),
                        sensor_type_name: "Compact Air Sensor".to_string(),
                        parameters: ["Temperature", "PM2.5", "AQI"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                        nodes: vec![node("AQ-101", "Park Sensor", "City Park")],
                    },
                ],
            },
            DomainConfig {
                domain_id: "DOM-WQ".to_string(),
                domain_name: "Water Quality".to_string(),
                domain_short_name: "WQ".to_string(),
                parameters: vec![
                    parameter("Water Temperature", DataType::Float, "0.1 °C", "±0.3 °C"),
                    parameter("pH", DataType::Float, "0.01", "±0.05"),
                    parameter("Turbidity", DataType::Float, "0.1 NTU", "±0.5 NTU"),
                    parameter("Dissolved Oxygen", DataType::Float, "0.01 mg/L", "±0.2 mg/L"),
                    parameter("TDS", DataType::Float, "1 ppm", "±10 ppm"),
                ],
                sensor_types: vec![SensorTypeConfig {
                    sensor_type_id: "ST-WQ-BUOY".to_string(),
                    sensor_type_name: "River Buoy".to_string(),
                    parameters: [
                        "Water Temperature",
                        "pH",
                        "Turbidity",
                        "Dissolved Oxygen",
                        "TDS",
                    ]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                    nodes: vec![node("WQ-001", "River Buoy East", "East River")],
                }],
            },
        ],
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_config(sample_config()).expect("fixture config is valid")
}
