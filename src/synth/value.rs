// Copyright (c) 2025 - Cowboy AI, Inc.
//! Value Synthesis Pipeline
//!
//! Turns parameter definitions and a timestamp into string-encoded values,
//! honoring each parameter's parsed decimal precision and noise bound.
//! Randomness is always the caller's: an explicitly owned `Rng` threaded
//! into every call, seeded deterministically for historical queries and
//! from entropy for live ones. Nothing here touches shared state.
//!
//! A reading is built in two phases: phase 1 synthesizes every independent
//! (float/integer) parameter, phase 2 computes derived string parameters
//! that consume phase-1 values.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::catalog::{DataType, Parameter, ParameterKind};

use super::composite;
use super::rules::{self, SynthContext};

/// How the per-day rain state driving Turbidity is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RainPolicy {
    /// Stable hash of the calendar day: reproducible series
    DailyHash,
    /// Independent draw with the given probability: bulk export
    Random(f64),
}

impl RainPolicy {
    fn sample<R: Rng + ?Sized>(&self, timestamp: DateTime<Utc>, rng: &mut R) -> bool {
        match self {
            Self::DailyHash => rules::rainy_by_date(timestamp),
            Self::Random(p) => rng.random_bool(*p),
        }
    }
}

impl Default for RainPolicy {
    fn default() -> Self {
        Self::DailyHash
    }
}

/// One synthesized reading: string-encoded values positionally aligned
/// with the node's parameter list. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub values: Vec<String>,
}

/// Synthesizes plausible values from parameter metadata and time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSynthesizer {
    rain: RainPolicy,
}

impl ValueSynthesizer {
    pub fn new(rain: RainPolicy) -> Self {
        Self { rain }
    }

    /// Synthesize one value for a single parameter.
    ///
    /// Derived parameters evaluated in isolation fall back to their
    /// transient computation (no sibling values to consume).
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        parameter: &Parameter,
        timestamp: DateTime<Utc>,
        rng: &mut R,
    ) -> String {
        let single = [parameter];
        let mut reading = self.reading(&single, timestamp, rng);
        reading.values.remove(0)
    }

    /// Build a full reading for an ordered parameter list.
    pub fn reading<R: Rng + ?Sized>(
        &self,
        parameters: &[&Parameter],
        timestamp: DateTime<Utc>,
        rng: &mut R,
    ) -> Reading {
        let ctx = SynthContext::new(timestamp, self.rain.sample(timestamp, rng));
        let mut slots: Vec<Option<String>> = vec![None; parameters.len()];

        // Phase 1: independent parameters
        for (slot, parameter) in slots.iter_mut().zip(parameters) {
            match parameter.data_type {
                DataType::Float => *slot = Some(self.float_value(parameter, &ctx, rng)),
                DataType::Integer => {
                    *slot = Some(rules::integer_value(parameter.kind, &ctx, rng).to_string())
                }
                DataType::String => {}
            }
        }

        // Phase 2: derived parameters consume phase-1 values
        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.data_type == DataType::String {
                let value = composite::derive(parameter, parameters, &slots, &ctx, rng);
                slots[index] = Some(value);
            }
        }

        Reading {
            timestamp,
            values: slots.into_iter().map(Option::unwrap_or_default).collect(),
        }
    }

    fn float_value<R: Rng + ?Sized>(
        &self,
        parameter: &Parameter,
        ctx: &SynthContext,
        rng: &mut R,
    ) -> String {
        let base = rules::base_value(parameter.kind, ctx, rng);
        let bound = parameter.noise_bound;
        let noisy = base + rng.random_range(-bound..=bound);
        let rounded = round_to(noisy, parameter.decimal_places);
        let clamped = clamp_physical(parameter.kind, rounded);
        format!("{:.*}", parameter.decimal_places, clamped)
    }
}

fn round_to(value: f64, decimal_places: usize) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// Clamp to physically valid ranges for known quantities; values outside
/// are pulled to the boundary, never rejected.
fn clamp_physical(kind: ParameterKind, value: f64) -> f64 {
    match kind {
        ParameterKind::Temperature => value.clamp(-20.0, 50.0),
        ParameterKind::Humidity => value.clamp(0.0, 100.0),
        ParameterKind::Ph => value.clamp(0.0, 14.0),
        _ => value,
    }
}
