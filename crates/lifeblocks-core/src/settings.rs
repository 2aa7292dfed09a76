use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunables for the per-pixel pipeline. Defaults match the shipped look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Reflection bounces per primary ray.
    pub bounces: u32,
    /// Sphere-tracing iteration budget per ray.
    pub max_steps: u32,
    /// Distance at or below which a march step is a hit.
    pub march_accuracy: f32,
    /// Miss threshold as a multiple of the view scale.
    pub max_distance_scale: f32,
    /// Normal offset for shadow ray origins.
    pub shadow_bias: f32,
    /// Normal offset for reflected ray origins.
    pub reflection_bias: f32,
    pub gamma: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bounces: NUM_BOUNCES,
            max_steps: MAX_MARCH_STEPS,
            march_accuracy: MARCH_ACCURACY,
            max_distance_scale: MAX_MARCH_DISTANCE_SCALE,
            shadow_bias: SHADOW_BIAS,
            reflection_bias: REFLECTION_BIAS,
            gamma: GAMMA,
        }
    }
}

impl RenderSettings {
    /// Marched distance beyond which a ray is a miss.
    pub fn max_distance(&self) -> f32 {
        VIEW_SCALE * self.max_distance_scale
    }
}

/// Tunables for the frame driver (clock, color cycling, grid sizing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// Milliseconds between automaton half-steps.
    pub tick_interval_ms: f64,
    pub color_phase_start: f32,
    /// Color phase advance per frame while cycling.
    pub color_phase_step: f32,
    /// How long an all-dead universe stays on screen before reset.
    pub dead_reset_delay_ms: f64,
    /// Cells along the shorter viewport axis.
    pub min_grid_dimension: u32,
    pub min_grid_dimension_floor: u32,
    pub min_grid_dimension_ceil: u32,
    pub grid_dimension_step: u32,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            color_phase_start: COLOR_PHASE_START,
            color_phase_step: COLOR_PHASE_STEP,
            dead_reset_delay_ms: DEAD_RESET_DELAY_MS,
            min_grid_dimension: MIN_GRID_DIMENSION,
            min_grid_dimension_floor: MIN_GRID_DIMENSION_FLOOR,
            min_grid_dimension_ceil: MIN_GRID_DIMENSION_CEIL,
            grid_dimension_step: GRID_DIMENSION_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.bounces, 2);
        assert_eq!(settings.max_steps, 10_000);
        assert_eq!(settings.max_distance(), MAX_MARCH_DISTANCE);
        assert_eq!(settings.max_distance(), 720.0);
    }

    #[test]
    fn test_driver_defaults() {
        let settings = DriverSettings::default();
        assert_eq!(settings.tick_interval_ms, 1000.0);
        assert_eq!(settings.color_phase_start, 2.0);
        assert_eq!(settings.min_grid_dimension, 8);
        assert!(settings.min_grid_dimension_floor <= settings.min_grid_dimension);
        assert!(settings.min_grid_dimension <= settings.min_grid_dimension_ceil);
    }
}
