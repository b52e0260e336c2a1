// Copyright (c) 2025 - Cowboy AI, Inc.
//! Derived Parameters
//!
//! Composite indicators computed in phase 2 of the reading pipeline, after
//! every independent parameter has a value: the air-quality category
//! classifies the reading's own AQI value, and the dominant-pollutant
//! label is a weighted draw.

use rand::Rng;

use crate::catalog::{Parameter, ParameterKind};

use super::rules::{self, SynthContext};

/// Pollutant labels with their selection weights (sums to 1.0).
const POLLUTANT_WEIGHTS: [(&str, f64); 6] = [
    ("PM2.5", 0.40),
    ("PM10", 0.25),
    ("NO2", 0.15),
    ("O3", 0.10),
    ("CO", 0.05),
    ("SO2", 0.05),
];

/// Qualitative air-quality category for an AQI value (EPA breakpoints).
pub fn classify_aqi(aqi: i64) -> &'static str {
    if aqi <= 50 {
        "Good"
    } else if aqi <= 100 {
        "Moderate"
    } else if aqi <= 150 {
        "Unhealthy for Sensitive Groups"
    } else if aqi <= 200 {
        "Unhealthy"
    } else if aqi <= 300 {
        "Very Unhealthy"
    } else {
        "Hazardous"
    }
}

/// Weighted draw of the dominant pollutant label.
pub fn dominant_pollutant<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let draw: f64 = rng.random();
    let mut cumulative = 0.0;
    for (label, weight) in POLLUTANT_WEIGHTS {
        cumulative += weight;
        if draw < cumulative {
            return label;
        }
    }
    // Unreachable for draw < 1.0; guards float summation at the boundary
    POLLUTANT_WEIGHTS[POLLUTANT_WEIGHTS.len() - 1].0
}

/// Compute a derived (string) parameter from the phase-1 values of the
/// same reading. `parameters` and `values` are positionally aligned.
pub(crate) fn derive<R: Rng + ?Sized>(
    parameter: &Parameter,
    parameters: &[&Parameter],
    values: &[Option<String>],
    ctx: &SynthContext,
    rng: &mut R,
) -> String {
    match parameter.kind {
        ParameterKind::AirQualityLabel => {
            let aqi = reading_aqi(parameters, values)
                .unwrap_or_else(|| rules::transient_aqi(ctx.hour));
            classify_aqi(aqi).to_string()
        }
        ParameterKind::DominantPollutant => dominant_pollutant(rng).to_string(),
        _ => "Unknown".to_string(),
    }
}

/// The AQI value already synthesized into this reading, if any.
fn reading_aqi(parameters: &[&Parameter], values: &[Option<String>]) -> Option<i64> {
    parameters
        .iter()
        .zip(values)
        .find(|(p, _)| p.kind == ParameterKind::AirQualityIndex)
        .and_then(|(_, v)| v.as_deref())
        .and_then(|v| v.parse::<f64>().ok())
        .map(|v| v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use test_case::test_case;

    #[test_case(40, "Good")]
    #[test_case(50, "Good")]
    #[test_case(75, "Moderate")]
    #[test_case(120, "Unhealthy for Sensitive Groups")]
    #[test_case(180, "Unhealthy")]
    #[test_case(250, "Very Unhealthy")]
    #[test_case(350, "Hazardous")]
    fn test_classify_aqi(aqi: i64, expected: &str) {
        assert_eq!(classify_aqi(aqi), expected);
    }

    #[test]
    fn test_classification_monotonic() {
        let severity = |label: &str| match label {
            "Good" => 0,
            "Moderate" => 1,
            "Unhealthy for Sensitive Groups" => 2,
            "Unhealthy" => 3,
            "Very Unhealthy" => 4,
            _ => 5,
        };
        let mut last = 0;
        for aqi in 0..500 {
            let s = severity(classify_aqi(aqi));
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn test_dominant_pollutant_is_known_label() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let label = dominant_pollutant(&mut rng);
            assert!(POLLUTANT_WEIGHTS.iter().any(|(l, _)| *l == label));
        }
    }

    #[test]
    fn test_dominant_pollutant_favors_heavy_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pm25 = 0;
        let mut so2 = 0;
        for _ in 0..1000 {
            match dominant_pollutant(&mut rng) {
                "PM2.5" => pm25 += 1,
                "SO2" => so2 += 1,
                _ => {}
            }
        }
        assert!(pm25 > so2);
    }
}
