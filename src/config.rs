use serde::Deserialize;

use crate::effects::counter::DEFAULT_DURATION_MS;
use crate::error::FxError;

pub const CONFIG_ELEMENT_ID: &str = "fx-config";

const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_NAVBAR_THRESHOLD: f64 = 50.0;
const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;
const DEFAULT_PARALLAX_FACTOR: f64 = 0.01;

const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 200);
const COUNTER_DURATION_MS_BOUNDS: (u32, u32) = (16, 10_000);
const NAVBAR_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const ANCHOR_OFFSET_BOUNDS: (f64, f64) = (0.0, 400.0);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 0.1);

/// Tunable effect settings.
///
/// Values come from an optional inline JSON block; anything missing or out of
/// range keeps its default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxConfig {
    pub particle_count: usize,
    pub counter_duration_ms: u32,
    pub navbar_threshold: f64,
    pub anchor_offset: f64,
    pub parallax_factor: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            counter_duration_ms: DEFAULT_DURATION_MS,
            navbar_threshold: DEFAULT_NAVBAR_THRESHOLD,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawFxConfig {
    particle_count: Option<usize>,
    counter_duration_ms: Option<u32>,
    navbar_threshold: Option<f64>,
    anchor_offset: Option<f64>,
    parallax_factor: Option<f64>,
}

impl FxConfig {
    pub fn from_json(source: &str) -> Result<Self, FxError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawFxConfig = serde_json::from_str(source)
            .map_err(|error| FxError::InvalidConfig(error.to_string()))?;

        Ok(Self {
            particle_count: within_bounds(
                raw.particle_count,
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            counter_duration_ms: within_bounds(
                raw.counter_duration_ms,
                DEFAULT_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            navbar_threshold: within_bounds(
                raw.navbar_threshold,
                DEFAULT_NAVBAR_THRESHOLD,
                NAVBAR_THRESHOLD_BOUNDS,
            ),
            anchor_offset: within_bounds(
                raw.anchor_offset,
                DEFAULT_ANCHOR_OFFSET,
                ANCHOR_OFFSET_BOUNDS,
            ),
            parallax_factor: within_bounds(
                raw.parallax_factor,
                DEFAULT_PARALLAX_FACTOR,
                PARALLAX_FACTOR_BOUNDS,
            ),
        })
    }
}

fn within_bounds<T: PartialOrd>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = FxConfig::default();

        assert_eq!(config.particle_count, 50);
        assert_eq!(config.counter_duration_ms, 2_000);
        assert_eq!(config.navbar_threshold, 50.0);
        assert_eq!(config.anchor_offset, 80.0);
        assert_eq!(config.parallax_factor, 0.01);
    }

    #[test]
    fn blank_source_yields_defaults() {
        let config = FxConfig::from_json("  \n").expect("blank config is accepted");
        assert_eq!(config, FxConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = FxConfig::from_json(r#"{ "particleCount": 12, "anchorOffset": 64 }"#)
            .expect("valid config");

        assert_eq!(config.particle_count, 12);
        assert_eq!(config.anchor_offset, 64.0);
        assert_eq!(config.counter_duration_ms, 2_000);
        assert_eq!(config.navbar_threshold, 50.0);
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = FxConfig::from_json(
            r#"{ "particleCount": 5000, "counterDurationMs": 1, "parallaxFactor": 2.5 }"#,
        )
        .expect("valid config");

        assert_eq!(config.particle_count, 50);
        assert_eq!(config.counter_duration_ms, 2_000);
        assert_eq!(config.parallax_factor, 0.01);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = FxConfig::from_json("{ particleCount: ");
        assert!(matches!(result, Err(FxError::InvalidConfig(_))));
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let result = FxConfig::from_json(r#"{ "particleCount": "many" }"#);
        assert!(matches!(result, Err(FxError::InvalidConfig(_))));
    }
}
