// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request-surface tests for the telemetry service.

mod fixtures;

use chrono::{TimeZone, Utc};
use cim_iot_telemetry::errors::TelemetryError;
use cim_iot_telemetry::service::{CatalogTelemetryService, TelemetryApi};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn service() -> CatalogTelemetryService {
    CatalogTelemetryService::new(fixtures::sample_catalog())
}

#[tokio::test]
async fn descriptor_and_data_never_error_for_valid_nodes() {
    let service = service();
    for node_id in ["AQ-001", "AQ-002", "AQ-101", "WQ-001"] {
        assert!(service.get_descriptor(node_id).await.is_ok());
        assert!(service.get_data(node_id).await.is_ok());
    }
}

#[tokio::test]
async fn descriptor_payload_lists_parameter_names() {
    let service = service();
    let envelope = service.get_descriptor("AQ-101").await.unwrap();

    let names: Vec<String> = serde_json::from_str(&envelope.cin.con).unwrap();
    assert_eq!(names, vec!["Temperature", "PM2.5", "AQI"]);
    assert_eq!(envelope.cin.cs, envelope.cin.con.chars().count());
    assert_eq!(envelope.cin.lbl, vec!["string".to_string()]);
}

#[tokio::test]
async fn invalid_node_errors_echo_the_same_id() {
    let service = service();

    let descriptor_err = service.get_descriptor("GHOST-9").await.unwrap_err();
    let data_err = service.get_data("GHOST-9").await.unwrap_err();
    let series_err = service.get_historical_series("GHOST-9").await.unwrap_err();

    for err in [&descriptor_err, &data_err, &series_err] {
        assert!(matches!(err, TelemetryError::NodeNotFound(id) if id == "GHOST-9"));
    }
}

#[tokio::test]
async fn data_reading_aligns_with_descriptor() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let descriptor = service.descriptor_at("WQ-001", now, &mut rng).unwrap();
    let data = service.data_at("WQ-001", now, &mut rng).unwrap();

    let names: Vec<String> = serde_json::from_str(&descriptor.cin.con).unwrap();
    let values: Vec<String> = serde_json::from_str(&data.cin.con).unwrap();
    assert_eq!(names.len(), values.len());
}

#[tokio::test]
async fn live_envelopes_differ_between_calls() {
    let service = service();
    let a = service.get_data("AQ-001").await.unwrap();
    let b = service.get_data("AQ-001").await.unwrap();
    // Live identifiers are drawn fresh per call
    assert_ne!(a.cin.ri, b.cin.ri);
}

#[tokio::test]
async fn historical_series_is_stable_through_the_service() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    let a = service.historical_series_at("AQ-001", now).unwrap();
    let b = service.historical_series_at("AQ-001", now).unwrap();
    assert_eq!(a.len(), 29);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[tokio::test]
async fn domain_listing_and_detail() {
    let service = service();

    let domains = service.list_domains().await.unwrap();
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].domain_id, "DOM-AQ");
    assert_eq!(domains[0].parameter_count, 10);
    assert_eq!(domains[0].sensor_type_count, 2);

    let domain = service.get_domain("DOM-WQ").await.unwrap();
    assert_eq!(domain.domain_name, "Water Quality");
    assert_eq!(domain.parameters.len(), 5);

    let err = service.get_domain("DOM-XX").await.unwrap_err();
    assert!(matches!(err, TelemetryError::DomainNotFound(id) if id == "DOM-XX"));
}

#[tokio::test]
async fn sensor_type_listing_and_detail() {
    let service = service();

    let sensor_types = service.list_sensor_types().await.unwrap();
    assert_eq!(sensor_types.len(), 3);
    let mini = sensor_types
        .iter()
        .find(|st| st.sensor_type_id == "ST-AQ-MINI")
        .unwrap();
    assert_eq!(mini.domain_id, "DOM-AQ");
    assert_eq!(mini.parameter_count, 3);
    assert_eq!(mini.node_count, 1);

    let detail = service.get_sensor_type("ST-WQ-BUOY").await.unwrap();
    assert_eq!(detail.domain_name, "Water Quality");
    assert_eq!(detail.sensor_type.nodes.len(), 1);

    let nodes = service.get_sensor_type_nodes("ST-AQ-FULL").await.unwrap();
    assert_eq!(nodes.len(), 2);

    let err = service.get_sensor_type("ST-XX").await.unwrap_err();
    assert!(matches!(err, TelemetryError::SensorTypeNotFound(id) if id == "ST-XX"));
}

#[tokio::test]
async fn node_listing_and_detail() {
    let service = service();

    let nodes = service.list_nodes().await.unwrap();
    assert_eq!(nodes.len(), 4);

    let node = service.get_node("AQ-002").await.unwrap();
    assert_eq!(node.node.node_area, "Harbour");
    assert_eq!(node.sensor_type_id, "ST-AQ-FULL");
    assert_eq!(node.parameters.len(), 10);

    let err = service.get_node("GHOST-9").await.unwrap_err();
    assert!(matches!(err, TelemetryError::NodeNotFound(id) if id == "GHOST-9"));
}

#[tokio::test]
async fn parameter_listings() {
    let service = service();

    let all = service.list_parameters().await.unwrap();
    assert_eq!(all.len(), 15);
    assert!(all.iter().any(|p| p.parameter_name == "Dissolved Oxygen"
        && p.domain_id == "DOM-WQ"));

    let aq = service.get_domain_parameters("DOM-AQ").await.unwrap();
    assert_eq!(aq.len(), 10);
}

#[tokio::test]
async fn full_config_round_trips() {
    let service = service();
    let config = service.get_full_config().await.unwrap();
    assert_eq!(config, fixtures::sample_config());
}
