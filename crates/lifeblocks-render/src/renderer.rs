use std::time::Instant;

use glam::Vec2;
use lifeblocks_core::material::Palette;
use lifeblocks_core::settings::RenderSettings;
use rayon::prelude::*;

use crate::camera::{pixel_center, primary_ray};
use crate::context::FrameContext;
use crate::integrator::Integrator;

/// Linear RGBA output, row-major with row 0 at the top. Alpha is always 1.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 1.0]; width as usize * height as usize],
        }
    }

    /// Reallocate for a new viewport size. Contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, [0.0, 0.0, 0.0, 1.0]);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Raw `f32` RGBA bytes, e.g. for uploading as a texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8))
            .collect()
    }
}

/// CPU ray-marching renderer. Pixels are independent; rows are rendered in
/// parallel on the rayon pool.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub settings: RenderSettings,
    pub palette: Palette,
}

impl Renderer {
    pub fn new(settings: RenderSettings, palette: Palette) -> Self {
        Self { settings, palette }
    }

    /// Render one frame into `target`. The frame is always rendered to
    /// completion; there is no cancellation.
    ///
    /// The target's size is authoritative: a context built for another
    /// resolution is re-aimed at the target so rays and pixels line up.
    pub fn render(&self, ctx: &FrameContext<'_>, target: &mut FrameBuffer) {
        let start = Instant::now();
        let width = target.width;
        let height = target.height;
        if width == 0 || height == 0 {
            return;
        }
        let resolution = target.resolution();
        if ctx.resolution != resolution {
            log::warn!(
                "Frame context resolution {} does not match {}x{} target; using the target",
                ctx.resolution,
                width,
                height
            );
        }
        let ctx = &FrameContext { resolution, ..*ctx };
        let integrator = Integrator::new(ctx, &self.palette, &self.settings);

        target
            .pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, pixels)| {
                for (col, slot) in pixels.iter_mut().enumerate() {
                    let frag = pixel_center(col as u32, row as u32, height);
                    let color = integrator.shade(primary_ray(frag, ctx.resolution));
                    *slot = color.extend(1.0).to_array();
                }
            });

        log::debug!(
            "Rendered {}x{} frame in {:.2}ms",
            width,
            height,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
}
