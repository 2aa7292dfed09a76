//! Multi-bounce light transport for one ray, and display tone mapping.

use glam::Vec3;
use lifeblocks_core::cells::CellBuffer;
use lifeblocks_core::material::Palette;
use lifeblocks_core::settings::RenderSettings;

use crate::context::FrameContext;
use crate::layout::GridLayout;
use crate::lighting::Light;
use crate::march::{ray_march, MarchLimits, Ray};
use crate::normal::estimate_normal;
use crate::resolver::MaterialResolver;
use crate::scene::Scene;
use crate::shading::{direct_illumination, emissive_radiance, Surface};

/// Per-frame state shared by every pixel: geometry, materials, lights.
#[derive(Debug, Clone)]
pub struct Integrator<'a> {
    pub scene: Scene,
    pub resolver: MaterialResolver,
    pub lights: Vec<Light>,
    pub limits: MarchLimits,
    pub settings: RenderSettings,
    cells: &'a CellBuffer,
}

impl<'a> Integrator<'a> {
    /// Derive the frame state from the driver's snapshot. The scene holds
    /// the single pointer-driven light.
    pub fn new(ctx: &FrameContext<'a>, palette: &Palette, settings: &RenderSettings) -> Self {
        let aspect = ctx.aspect_ratio();
        let layout = GridLayout::new(ctx.grid, aspect);
        Self {
            scene: Scene::new(layout, ctx.grid, ctx.time_ms),
            resolver: MaterialResolver::new(palette, ctx.color_phase, ctx.blend),
            lights: vec![Light::pointer(ctx.pointer, aspect)],
            limits: MarchLimits::from(settings),
            settings: *settings,
            cells: ctx.cells,
        }
    }

    /// Linear radiance arriving along `ray`.
    pub fn trace(&self, ray: Ray) -> Vec3 {
        let mut ray = ray;
        let mut color = Vec3::ZERO;
        let mut mask = Vec3::ONE;

        for bounce in 0..self.settings.bounces {
            let hit = ray_march(&self.scene, &ray, &self.limits);
            if !hit.is_hit() {
                break;
            }
            let position = ray.at(hit.distance);
            let surface = Surface {
                position,
                normal: estimate_normal(&self.scene.layout, &hit, position),
                material: self.resolver.resolve(&hit, self.cells),
            };
            let emissive = surface.material.is_emissive();

            let mut radiance = Vec3::ZERO;
            if emissive {
                let view = (ray.origin - position).normalize_or_zero();
                let facing = view.dot(surface.normal).max(0.0);
                radiance += if bounce == 0 {
                    surface.material.emissive * surface.material.color * facing
                } else {
                    emissive_radiance(&surface, ray.origin) * facing
                };
            }

            let direct = direct_illumination(
                &self.scene,
                &self.limits,
                &surface,
                &ray,
                &self.lights,
                self.settings.shadow_bias,
            );
            radiance += direct.radiance;

            color += mask * radiance;
            mask *= direct.reflectance;

            // Emitters end the path.
            if emissive {
                break;
            }

            let n = surface.normal;
            ray = Ray {
                origin: position + self.settings.reflection_bias * n,
                direction: reflect(ray.direction, n),
            };
        }

        color
    }

    /// Display color for the ray: traced, then tone mapped.
    pub fn shade(&self, ray: Ray) -> Vec3 {
        tone_map(self.trace(ray), self.settings.gamma)
    }
}

/// Mirror `d` about the unit normal `n`.
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}

/// Reinhard compression followed by gamma correction. Output is in [0, 1).
pub fn tone_map(color: Vec3, gamma: f32) -> Vec3 {
    let c = color.max(Vec3::ZERO);
    let c = c / (c + Vec3::ONE);
    c.powf(1.0 / gamma)
}
