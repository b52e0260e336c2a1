// Copyright (c) 2025 - Cowboy AI, Inc.
//! Time-Series Generation
//!
//! Two generators walk a fixed 7-day window:
//!
//! - [`HistoricalSeriesGenerator`] serves the live historical endpoint:
//!   6-hour steps (29 points inclusive of both endpoints), one owned
//!   rng per step seeded from (node, timestamp), historical envelope
//!   identifiers. Repeated queries for the same node and window are
//!   byte-identical.
//! - [`BulkSeriesGenerator`] feeds offline export: 15-minute steps,
//!   caller-supplied entropy rng, no reproducibility requirement. Writing
//!   the rows out (CSV or otherwise) is the caller's concern.
//!
//! Per-step rngs are always owned locals. A shared randomness source
//! reseeded per step would race under concurrent requests; nothing here
//! has state to restore.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::envelope::{ContentInstanceEnvelope, EnvelopeBuilder};
use crate::errors::TelemetryResult;
use crate::hashing::fnv1a64;
use crate::synth::{RainPolicy, ValueSynthesizer};

/// Window walked by both generators.
pub const SERIES_WINDOW_DAYS: i64 = 7;

/// Step of the live historical series (29 points over the window).
pub const SERIES_STEP_HOURS: i64 = 6;

/// Step of the bulk export series.
pub const BULK_STEP_MINUTES: i64 = 15;

/// Reproducible 6-hour-step series of enveloped readings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoricalSeriesGenerator {
    synthesizer: ValueSynthesizer,
}

impl HistoricalSeriesGenerator {
    pub fn new() -> Self {
        Self {
            synthesizer: ValueSynthesizer::new(RainPolicy::DailyHash),
        }
    }

    /// Generate the series for the window ending at `now`.
    pub fn generate(
        &self,
        catalog: &Catalog,
        node_id: &str,
        now: DateTime<Utc>,
    ) -> TelemetryResult<Vec<ContentInstanceEnvelope>> {
        let parameters = catalog.parameters_of(node_id)?;
        let start = now - Duration::days(SERIES_WINDOW_DAYS);

        let mut points = Vec::new();
        let mut current = start;
        while current <= now {
            let seed = step_seed(node_id, current);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let reading = self.synthesizer.reading(&parameters, current, &mut rng);
            points.push(EnvelopeBuilder::historical(
                &reading.values,
                node_id,
                current,
            )?);
            current += Duration::hours(SERIES_STEP_HOURS);
        }

        debug!(node = %node_id, points = points.len(), "generated historical series");
        Ok(points)
    }
}

/// Seed for one step's owned rng, stable across queries.
fn step_seed(node_id: &str, timestamp: DateTime<Utc>) -> u64 {
    fnv1a64(format!("{node_id}-{}", timestamp.timestamp()).as_bytes())
}

/// One bulk-export row: a display timestamp and (parameter name, value)
/// pairs in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub timestamp: String,
    pub values: Vec<(String, String)>,
}

/// Dense 15-minute-step series for offline export.
#[derive(Debug, Clone, Copy)]
pub struct BulkSeriesGenerator {
    synthesizer: ValueSynthesizer,
}

impl Default for BulkSeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkSeriesGenerator {
    pub fn new() -> Self {
        Self {
            synthesizer: ValueSynthesizer::new(RainPolicy::Random(0.3)),
        }
    }

    /// Generate rows for the window ending at `now` using the caller's
    /// entropy rng.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        node_id: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> TelemetryResult<Vec<SeriesRow>> {
        let parameters = catalog.parameters_of(node_id)?;
        let start = now - Duration::days(SERIES_WINDOW_DAYS);

        let mut rows = Vec::new();
        let mut current = start;
        while current <= now {
            let reading = self.synthesizer.reading(&parameters, current, rng);
            rows.push(SeriesRow {
                timestamp: current.format("%Y-%m-%d %H:%M:%S").to_string(),
                values: parameters
                    .iter()
                    .map(|p| p.name.clone())
                    .zip(reading.values)
                    .collect(),
            });
            current += Duration::minutes(BULK_STEP_MINUTES);
        }

        debug!(node = %node_id, rows = rows.len(), "generated bulk series");
        Ok(rows)
    }
}
