// Copyright (c) 2025 - Cowboy AI, Inc.
//! Synthetic Value Generation
//!
//! The core engine: given a parameter's declared physical semantics and a
//! point in time, produce a plausible, bounded reading. Dispatch runs on
//! the [`ParameterKind`] tag assigned at catalog load, through pure rule
//! functions of `(hour, day of year, rng)`, followed by noise within the
//! parameter's accuracy bound, rounding to its resolution, and clamping to
//! physical limits. Derived indicators (air-quality category, dominant
//! pollutant) run in a second phase over the finished reading.
//!
//! [`ParameterKind`]: crate::catalog::ParameterKind

pub mod composite;
pub mod rules;
pub mod value;

pub use composite::{classify_aqi, dominant_pollutant};
pub use rules::SynthContext;
pub use value::{RainPolicy, Reading, ValueSynthesizer};
