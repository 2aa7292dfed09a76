use glam::Vec2;
use lifeblocks_core::cells::CellBuffer;
use lifeblocks_core::types::GridDimensions;

/// Everything one render pass reads. Built by the driver before the pass and
/// never changed while pixels are being evaluated.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Output size in pixels.
    pub resolution: Vec2,
    /// Milliseconds since the driver started.
    pub time_ms: f32,
    /// Pointer position in normalized [-1, 1] coordinates, y up.
    pub pointer: Vec2,
    pub grid: GridDimensions,
    /// Fraction of the current tick that has elapsed. Clamped by consumers.
    pub blend: f32,
    /// Monotonic color-cycle phase in radians.
    pub color_phase: f32,
    pub cells: &'a CellBuffer,
}

impl FrameContext<'_> {
    pub fn aspect_ratio(&self) -> f32 {
        self.resolution.x / self.resolution.y
    }
}
