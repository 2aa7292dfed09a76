use std::time::Instant;

use lifeblocks_core::material::Palette;
use lifeblocks_core::settings::{DriverSettings, RenderSettings};
use lifeblocks_core::types::GridDimensions;
use lifeblocks_driver::{Driver, DriverError, ManualClock};
use lifeblocks_render::{FrameBuffer, Renderer};

use crate::scenes::{PatternSource, SceneConfig};

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub grid_width: u32,
    pub grid_height: u32,
    pub pixel_count: u32,
    pub frame_count: u32,
    pub timings: TimingSeries,
}

/// Drives each scene through the full frame loop on a simulated clock and
/// times the render passes.
pub struct BenchmarkRunner {
    frame_count: u32,
    render_settings: RenderSettings,
    driver_settings: DriverSettings,
    palette: Palette,
}

impl BenchmarkRunner {
    pub fn new(
        frame_count: u32,
        render_settings: RenderSettings,
        driver_settings: DriverSettings,
        palette: Palette,
    ) -> Self {
        Self {
            frame_count,
            render_settings,
            driver_settings,
            palette,
        }
    }

    /// Run a single benchmark scene. Returns the timings and the last frame.
    pub fn run_scene(
        &self,
        config: &SceneConfig,
    ) -> Result<(BenchmarkResult, FrameBuffer), DriverError> {
        log::info!(
            "Running scene '{}' ({}x{} px, min dimension {})...",
            config.name,
            config.width,
            config.height,
            config.min_grid_dimension
        );

        let settings = DriverSettings {
            min_grid_dimension: config.min_grid_dimension,
            ..self.driver_settings
        };
        let aspect = config.width as f32 / config.height.max(1) as f32;
        let grid = GridDimensions::for_viewport(config.min_grid_dimension, aspect)?;
        let source = PatternSource::new(config.pattern, grid);
        let clock = ManualClock::new(0.0);
        let renderer = Renderer::new(self.render_settings, self.palette);
        let mut driver = Driver::new(
            source,
            clock.clone(),
            renderer,
            settings,
            config.width,
            config.height,
        )?;

        log::info!(
            "  Grid {}x{} ({} cells)",
            grid.width(),
            grid.height(),
            grid.cell_count()
        );

        let mut frame_times = Vec::with_capacity(self.frame_count as usize);
        for _ in 0..self.frame_count {
            clock.advance(config.frame_interval_ms);
            let frame_start = Instant::now();
            driver.render_frame()?;
            frame_times.push(frame_start.elapsed().as_secs_f64() * 1000.0);
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        let result = BenchmarkResult {
            scene_name: config.name.to_string(),
            grid_width: grid.width(),
            grid_height: grid.height(),
            pixel_count: config.width * config.height,
            frame_count: self.frame_count,
            timings,
        };
        Ok((result, driver.frame().clone()))
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::Pattern;

    #[test]
    fn test_compute_timings_empty() {
        let t = compute_timings(&[]);
        assert_eq!(t.mean_ms, 0.0);
        assert_eq!(t.max_ms, 0.0);
    }

    #[test]
    fn test_compute_timings_stats() {
        let times: Vec<f64> = (1..=100).rev().map(f64::from).collect();
        let t = compute_timings(&times);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 100.0);
        assert_eq!(t.mean_ms, 50.5);
        assert_eq!(t.median_ms, 50.5);
        assert_eq!(t.p95_ms, 96.0);
        assert_eq!(t.p99_ms, 100.0);
    }

    #[test]
    fn test_compute_timings_odd_median() {
        let t = compute_timings(&[3.0, 1.0, 2.0]);
        assert_eq!(t.median_ms, 2.0);
    }

    #[test]
    fn test_run_tiny_scene() {
        let runner = BenchmarkRunner::new(
            3,
            RenderSettings::default(),
            DriverSettings::default(),
            Palette::default(),
        );
        let config = SceneConfig {
            name: "tiny",
            pattern: Pattern::Checkerboard,
            min_grid_dimension: 4,
            width: 16,
            height: 8,
            frame_interval_ms: 600.0,
        };
        let (result, frame) = runner.run_scene(&config).expect("scene runs");
        assert_eq!(result.scene_name, "tiny");
        assert_eq!((result.grid_width, result.grid_height), (8, 4));
        assert_eq!(result.pixel_count, 128);
        assert_eq!(result.frame_count, 3);
        assert_eq!(frame.width(), 16);
        assert!(result.timings.min_ms <= result.timings.max_ms);
    }
}
