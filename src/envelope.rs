// Copyright (c) 2025 - Cowboy AI, Inc.
//! Content-Instance Envelope (m2m:cin)
//!
//! Every response payload — a synthesized reading or a descriptor's
//! parameter-name list — ships inside a fixed oneM2M-style content
//! instance. Two identifier regimes exist:
//!
//! - **Live**: identifiers come from the caller's entropy rng, fresh on
//!   every call, the way a live system assigns resource identifiers.
//! - **Historical**: identifiers derive from a stable hash of
//!   `{node_id}-{timestamp}` plus a field suffix, so the same
//!   (node, timestamp) pair always yields the same envelope.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TelemetryResult;
use crate::hashing::{fnv1a128, fnv1a64};

/// Retention window applied to every content instance.
pub const RETENTION_DAYS: i64 = 730;

/// Compact UTC date-time format used by all envelope timestamp fields.
pub const COMPACT_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

const PI_RI_FLOOR: u128 = 10_000_000_000_000_000_000; // 20 digits
const PI_RI_SPAN: u128 = 90_000_000_000_000_000_000;
const RN_FLOOR: u64 = 10_000_000_000_000_000; // 17 digits
const RN_SPAN: u64 = 90_000_000_000_000_000;
const ST_FLOOR: u64 = 10_000; // 5 digits
const ST_SPAN: u64 = 90_000;

/// The m2m:cin resource fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInstance {
    /// Parent id, "3-" + 20-digit number
    pub pi: String,
    /// Resource id, "4-" + 20-digit number
    pub ri: String,
    /// Resource type, fixed 4 (content instance)
    pub ty: u8,
    /// Creation time, compact UTC
    pub ct: String,
    /// State tag, 5-digit
    pub st: u32,
    /// Resource name, "4-" + 17-digit number
    pub rn: String,
    /// Last-modified time, equals `ct`
    pub lt: String,
    /// Expiry, `ct` + 730 days
    pub et: String,
    /// Labels: ["string"] live, ["historical"] series points
    pub lbl: Vec<String>,
    /// Content size, exact character length of `con`
    pub cs: usize,
    /// Creator tag, "SOriginAE-" + 2 hex chars
    pub cr: String,
    /// Stringified payload
    pub con: String,
}

/// Wire wrapper producing the `{"m2m:cin": {...}}` JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInstanceEnvelope {
    #[serde(rename = "m2m:cin")]
    pub cin: ContentInstance,
}

/// Builds content instances in either identifier regime.
pub struct EnvelopeBuilder;

impl EnvelopeBuilder {
    /// Wrap a payload with freshly drawn identifiers.
    pub fn live<R: Rng + ?Sized>(
        payload: &[String],
        timestamp: DateTime<Utc>,
        rng: &mut R,
    ) -> TelemetryResult<ContentInstanceEnvelope> {
        let con = serde_json::to_string(payload)?;
        let (ct, et) = format_times(timestamp);

        let uuid = Uuid::new_v4().simple().to_string();
        Ok(ContentInstanceEnvelope {
            cin: ContentInstance {
                pi: format!("3-{}", rng.random_range(PI_RI_FLOOR..PI_RI_FLOOR + PI_RI_SPAN)),
                ri: format!("4-{}", rng.random_range(PI_RI_FLOOR..PI_RI_FLOOR + PI_RI_SPAN)),
                ty: 4,
                st: rng.random_range(ST_FLOOR..ST_FLOOR + ST_SPAN) as u32,
                rn: format!("4-{}", rng.random_range(RN_FLOOR..RN_FLOOR + RN_SPAN)),
                lt: ct.clone(),
                et,
                lbl: vec!["string".to_string()],
                cs: con.chars().count(),
                cr: format!("SOriginAE-{}", uuid[..2].to_uppercase()),
                con,
                ct,
            },
        })
    }

    /// Wrap a payload with identifiers derived from (node, timestamp).
    pub fn historical(
        payload: &[String],
        node_id: &str,
        timestamp: DateTime<Utc>,
    ) -> TelemetryResult<ContentInstanceEnvelope> {
        let con = serde_json::to_string(payload)?;
        let (ct, et) = format_times(timestamp);
        let base = format!("{node_id}-{ct}");

        Ok(ContentInstanceEnvelope {
            cin: ContentInstance {
                pi: format!("3-{}", derive_wide(&base, "pi")),
                ri: format!("4-{}", derive_wide(&base, "ri")),
                ty: 4,
                st: derive_narrow(&base, "st", ST_FLOOR, ST_SPAN) as u32,
                rn: format!("4-{}", derive_narrow(&base, "rn", RN_FLOOR, RN_SPAN)),
                lt: ct.clone(),
                et,
                lbl: vec!["historical".to_string()],
                cs: con.chars().count(),
                cr: format!("SOriginAE-{:02X}", fnv1a64(format!("{base}cr").as_bytes()) % 256),
                con,
                ct,
            },
        })
    }
}

fn format_times(timestamp: DateTime<Utc>) -> (String, String) {
    let ct = timestamp.format(COMPACT_TIME_FORMAT).to_string();
    let et = (timestamp + Duration::days(RETENTION_DAYS))
        .format(COMPACT_TIME_FORMAT)
        .to_string();
    (ct, et)
}

/// Stable 20-digit identifier for one envelope field.
fn derive_wide(base: &str, field: &str) -> u128 {
    fnv1a128(format!("{base}{field}").as_bytes()) % PI_RI_SPAN + PI_RI_FLOOR
}

/// Stable identifier reduced into a smaller numeric range.
fn derive_narrow(base: &str, field: &str, floor: u64, span: u64) -> u64 {
    fnv1a64(format!("{base}{field}").as_bytes()) % span + floor
}
