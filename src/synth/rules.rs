// Copyright (c) 2025 - Cowboy AI, Inc.
//! Base-Value Synthesis Rules
//!
//! Pure functions from `(hour, day of year, rng)` to a physically
//! plausible base value, one rule per [`ParameterKind`]. Time-of-day
//! shapes are shared across rules: a diurnal curve peaking at local noon,
//! a rush-hour bump peaking at 08:00 and 18:00, and a midday-activity
//! curve peaking at 14:00.

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::Rng;

use crate::catalog::ParameterKind;
use crate::hashing::fnv1a64;

/// Time context shared by every rule evaluation in one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthContext {
    /// Hour of day, 0..=23
    pub hour: u32,
    /// Ordinal day of year, 1..=366
    pub day_of_year: u32,
    /// Whether the reading's day counts as rainy (affects Turbidity)
    pub rainy: bool,
}

impl SynthContext {
    pub fn new(timestamp: DateTime<Utc>, rainy: bool) -> Self {
        Self {
            hour: timestamp.hour(),
            day_of_year: timestamp.ordinal(),
            rainy,
        }
    }
}

/// Diurnal shape: 0 at midnight, 1 at local noon.
fn diurnal(hour: u32) -> f64 {
    1.0 - (hour as f64 - 12.0).abs() / 12.0
}

/// Rush-hour shape: 1 at 08:00 and 18:00, fading to 0 over 4 hours.
pub(crate) fn rush_hour_factor(hour: u32) -> f64 {
    let h = hour as f64;
    (1.0 - (h - 8.0).abs().min((h - 18.0).abs()) / 4.0).max(0.0)
}

/// The diurnal temperature curve without seasonal offset. Dissolved
/// oxygen derives from this same curve.
pub(crate) fn diurnal_temperature(hour: u32) -> f64 {
    20.0 + 7.0 * diurnal(hour)
}

/// Rush-hour-correlated AQI baseline, also used as the transient AQI when
/// a reading carries no AQI parameter.
pub(crate) fn transient_aqi(hour: u32) -> i64 {
    60 + (rush_hour_factor(hour) * 50.0) as i64
}

/// Stable per-day rain decision: roughly two rainy days a week, identical
/// for every reading on the same calendar day.
pub(crate) fn rainy_by_date(timestamp: DateTime<Utc>) -> bool {
    let key = format!("{}-{}", timestamp.day(), timestamp.month());
    fnv1a64(key.as_bytes()) % 7 < 2
}

/// Base value for float parameters.
pub fn base_value<R: Rng + ?Sized>(
    kind: ParameterKind,
    ctx: &SynthContext,
    rng: &mut R,
) -> f64 {
    match kind {
        ParameterKind::Temperature => {
            let seasonal = (ctx.day_of_year % 365) as f64 / 365.0;
            20.0 + 7.0 * diurnal(ctx.hour) + seasonal * 5.0
        }
        ParameterKind::Humidity => 60.0 - 20.0 * diurnal(ctx.hour),
        ParameterKind::ParticulateMatter => 15.0 + rush_hour_factor(ctx.hour) * 30.0,
        ParameterKind::CarbonMonoxide => 0.5 + rush_hour_factor(ctx.hour) * 1.0,
        ParameterKind::CarbonDioxide => {
            let activity = (1.0 - (ctx.hour as f64 - 14.0).abs() / 10.0).max(0.0);
            400.0 + activity * 800.0
        }
        ParameterKind::NitrogenDioxide => 0.02 + rush_hour_factor(ctx.hour) * 0.05,
        ParameterKind::Ozone => {
            let sun = (1.0 - (ctx.hour as f64 - 14.0).abs() / 8.0).max(0.0);
            0.02 + sun * 0.05
        }
        ParameterKind::Ph => 7.0 + rng.random_range(-0.5..=0.5),
        ParameterKind::Turbidity => 2.0 + if ctx.rainy { 5.0 } else { 0.0 },
        ParameterKind::DissolvedOxygen => {
            (14.0 - diurnal_temperature(ctx.hour) * 0.3).max(4.0)
        }
        ParameterKind::TotalDissolvedSolids => {
            250.0 + rng.random_range(-20.0..=20.0) + 15.0 * diurnal(ctx.hour)
        }
        ParameterKind::AirQualityIndex => transient_aqi(ctx.hour) as f64,
        _ => rng.random_range(0.0..100.0),
    }
}

/// Base value for integer parameters. No noise is applied to integers.
pub fn integer_value<R: Rng + ?Sized>(
    kind: ParameterKind,
    ctx: &SynthContext,
    rng: &mut R,
) -> i64 {
    match kind {
        ParameterKind::AirQualityIndex => transient_aqi(ctx.hour),
        // Reporting interval in seconds, independent of time
        ParameterKind::DataInterval => 60,
        _ => rng.random_range(0..=100),
    }
}
