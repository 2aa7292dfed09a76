//! Cross-frame driver state. Everything that accumulates between frames
//! lives here; the render pass only ever sees a snapshot of it.

use glam::Vec2;
use lifeblocks_core::settings::DriverSettings;

/// Which automaton half-step a frame ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfStep {
    Tick,
    Tock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverState {
    pub start_ms: f64,
    pub now_ms: f64,
    pub last_step_ms: f64,
    /// Half-steps since the last reset or resize. Even runs a tick, odd a tock.
    pub half_steps: u64,
    pub paused: bool,
    pub rainbow: bool,
    /// Advance the color phase on the next frame.
    pub color_change_pending: bool,
    pub color_phase: f32,
    /// When an all-dead universe was first noticed.
    pub dead_since_ms: Option<f64>,
    pub min_grid_dimension: u32,
    pub pointer: Vec2,
    pub viewport: (u32, u32),
    pub frames: u64,
}

impl DriverState {
    pub fn new(settings: &DriverSettings, now_ms: f64, viewport: (u32, u32)) -> Self {
        Self {
            start_ms: now_ms,
            now_ms,
            last_step_ms: now_ms,
            half_steps: 0,
            paused: false,
            rainbow: false,
            color_change_pending: true,
            color_phase: settings.color_phase_start,
            dead_since_ms: None,
            min_grid_dimension: settings.min_grid_dimension,
            pointer: Vec2::ZERO,
            viewport,
            frames: 0,
        }
    }

    /// Milliseconds since the driver started.
    pub fn elapsed_ms(&self) -> f64 {
        self.now_ms - self.start_ms
    }

    pub fn since_last_step_ms(&self) -> f64 {
        self.now_ms - self.last_step_ms
    }

    /// The half-step to run this frame, if a full interval has passed.
    pub fn due_half_step(&self, settings: &DriverSettings) -> Option<HalfStep> {
        if self.paused || self.since_last_step_ms() <= settings.tick_interval_ms {
            return None;
        }
        if self.half_steps % 2 == 0 {
            Some(HalfStep::Tick)
        } else {
            Some(HalfStep::Tock)
        }
    }

    pub fn record_half_step(&mut self) {
        self.last_step_ms = self.now_ms;
        self.half_steps += 1;
    }

    /// Restart the tick/tock alternation on a tick.
    pub fn reset_parity(&mut self) {
        self.half_steps = 0;
    }

    /// Fraction of the tick interval elapsed since the last half-step, in [0, 1].
    pub fn blend(&self, settings: &DriverSettings) -> f32 {
        (self.since_last_step_ms() / settings.tick_interval_ms).clamp(0.0, 1.0) as f32
    }

    /// Apply a pending color change. Rainbow mode keeps one pending forever.
    pub fn advance_color(&mut self, settings: &DriverSettings) -> bool {
        if !self.color_change_pending {
            return false;
        }
        self.color_phase += settings.color_phase_step;
        self.color_change_pending = self.rainbow;
        true
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
        if self.rainbow {
            self.color_change_pending = true;
        }
    }

    /// Track how long the universe has been dead after a tock that changed
    /// nothing. Returns true once the reset delay has run out, clearing the
    /// timer and the half-step parity.
    pub fn observe_idle_tock(&mut self, is_dead: bool, settings: &DriverSettings) -> bool {
        match self.dead_since_ms {
            None => {
                if is_dead {
                    self.dead_since_ms = Some(self.now_ms);
                }
                false
            }
            Some(since) if self.now_ms - since > settings.dead_reset_delay_ms => {
                self.dead_since_ms = None;
                self.reset_parity();
                true
            }
            Some(_) => false,
        }
    }

    /// The minimum grid dimension one step up or down, within its bounds.
    /// `None` when already at the bound.
    pub fn next_grid_dimension(&self, grow: bool, settings: &DriverSettings) -> Option<u32> {
        let current = self.min_grid_dimension;
        let next = if grow {
            current.saturating_add(settings.grid_dimension_step)
        } else {
            current.saturating_sub(settings.grid_dimension_step)
        };
        let next = next.clamp(
            settings.min_grid_dimension_floor,
            settings.min_grid_dimension_ceil,
        );
        (next != current).then_some(next)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.viewport.0 as f32, self.viewport.1 as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (DriverState, DriverSettings) {
        let settings = DriverSettings::default();
        (DriverState::new(&settings, 100.0, (160, 80)), settings)
    }

    #[test]
    fn test_half_steps_alternate_after_interval() {
        let (mut s, settings) = state();
        s.now_ms = 1100.0;
        // Exactly one interval is not enough.
        assert_eq!(s.due_half_step(&settings), None);
        s.now_ms = 1100.5;
        assert_eq!(s.due_half_step(&settings), Some(HalfStep::Tick));
        s.record_half_step();
        assert_eq!(s.due_half_step(&settings), None);
        s.now_ms += 1001.0;
        assert_eq!(s.due_half_step(&settings), Some(HalfStep::Tock));
        s.record_half_step();
        s.now_ms += 1001.0;
        assert_eq!(s.due_half_step(&settings), Some(HalfStep::Tick));
    }

    #[test]
    fn test_paused_never_steps() {
        let (mut s, settings) = state();
        s.paused = true;
        s.now_ms = 1_000_000.0;
        assert_eq!(s.due_half_step(&settings), None);
    }

    #[test]
    fn test_blend() {
        let (mut s, settings) = state();
        assert_eq!(s.blend(&settings), 0.0);
        s.now_ms = 350.0;
        assert_eq!(s.blend(&settings), 0.25);
        s.now_ms = 99_999.0;
        assert_eq!(s.blend(&settings), 1.0);
    }

    #[test]
    fn test_color_cycling() {
        let (mut s, settings) = state();
        assert_eq!(s.color_phase, 2.0);
        // A change is pending from the start.
        assert!(s.advance_color(&settings));
        assert!(!s.advance_color(&settings));
        let after_first = s.color_phase;
        assert!((after_first - (2.0 + 1.0 / 60.0)).abs() < 1e-6);

        s.toggle_rainbow();
        for _ in 0..3 {
            assert!(s.advance_color(&settings));
        }
        assert!((s.color_phase - (after_first + 3.0 / 60.0)).abs() < 1e-5);

        s.toggle_rainbow();
        // The change already pending is consumed once more.
        assert!(s.advance_color(&settings));
        assert!(!s.advance_color(&settings));
    }

    #[test]
    fn test_dead_universe_reset_after_delay() {
        let (mut s, settings) = state();
        s.half_steps = 7;
        s.now_ms = 2000.0;
        assert!(!s.observe_idle_tock(true, &settings));
        assert_eq!(s.dead_since_ms, Some(2000.0));
        s.now_ms = 7000.0;
        assert!(!s.observe_idle_tock(true, &settings));
        s.now_ms = 7000.5;
        assert!(s.observe_idle_tock(true, &settings));
        assert_eq!(s.dead_since_ms, None);
        assert_eq!(s.half_steps, 0);
    }

    #[test]
    fn test_living_universe_never_starts_timer() {
        let (mut s, settings) = state();
        s.now_ms = 50_000.0;
        assert!(!s.observe_idle_tock(false, &settings));
        assert_eq!(s.dead_since_ms, None);
    }

    #[test]
    fn test_grid_dimension_bounds() {
        let (mut s, settings) = state();
        assert_eq!(s.next_grid_dimension(true, &settings), Some(10));
        // Stepping does not change the state by itself.
        assert_eq!(s.min_grid_dimension, 8);
        s.min_grid_dimension = 64;
        assert_eq!(s.next_grid_dimension(true, &settings), None);
        s.min_grid_dimension = 4;
        assert_eq!(s.next_grid_dimension(false, &settings), None);
        s.min_grid_dimension = 6;
        assert_eq!(s.next_grid_dimension(false, &settings), Some(4));
    }
}
