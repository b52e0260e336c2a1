// Copyright (c) 2025 - Cowboy AI, Inc.
//! Declared-Metadata Parsing
//!
//! Resolution and accuracy strings are free text. They are parsed exactly
//! once, at catalog load, into typed fields on [`Parameter`]; malformed
//! text recovers to defaults instead of failing the load, so synthesis
//! never sees raw metadata text.
//!
//! [`Parameter`]: crate::catalog::Parameter

/// Decimal places assumed when the resolution string carries none.
pub const DEFAULT_DECIMAL_PLACES: usize = 1;

/// Noise bound assumed when the accuracy string carries none.
pub const DEFAULT_NOISE_BOUND: f64 = 1.0;

/// Decimal precision encoded in a resolution string.
///
/// Counts the digits immediately following the first `.`; a resolution of
/// `"0.01 mg/L"` declares two decimal places. Absent or unparseable
/// fractions fall back to [`DEFAULT_DECIMAL_PLACES`].
pub fn decimal_places(resolution: &str) -> usize {
    let Some((_, fraction)) = resolution.split_once('.') else {
        return DEFAULT_DECIMAL_PLACES;
    };
    let digits = fraction.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        DEFAULT_DECIMAL_PLACES
    } else {
        digits
    }
}

/// Noise bound encoded in an accuracy string.
///
/// Takes the numeric magnitude following a `±` marker, tolerating both
/// `"±0.5 °C"` and `"± 0.5 °C"`. Absent marker or unparseable magnitude
/// falls back to [`DEFAULT_NOISE_BOUND`].
pub fn noise_bound(accuracy: &str) -> f64 {
    let Some((_, after)) = accuracy.split_once('±') else {
        return DEFAULT_NOISE_BOUND;
    };
    let magnitude: String = after
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    magnitude.parse().unwrap_or(DEFAULT_NOISE_BOUND)
}
