use glam::{Vec2, Vec3};
use lifeblocks_core::constants::{LIGHT_DEPTH_Z, LIGHT_INTENSITY, VIEW_SCALE};

use crate::march::{ray_march, MarchLimits, Ray};
use crate::scene::Scene;

/// Where a light sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Infinitely far away. `direction` points from the scene toward the light.
    Directional { direction: Vec3 },
    Positional { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    /// The default scene light: white, positional, hovering in front of the
    /// blocks under the pointer. `pointer` is in normalized [-1, 1] screen
    /// coordinates; the wider axis is stretched so the light can reach the
    /// edges of the grid.
    pub fn pointer(pointer: Vec2, aspect_ratio: f32) -> Self {
        let position = Vec3::new(
            pointer.x * VIEW_SCALE * aspect_ratio.max(1.0),
            pointer.y * VIEW_SCALE * (1.0 / aspect_ratio).max(1.0),
            LIGHT_DEPTH_Z,
        );
        Self {
            kind: LightKind::Positional { position },
            color: Vec3::ONE,
            intensity: LIGHT_INTENSITY,
        }
    }

    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize(),
            },
            color,
            intensity,
        }
    }

    /// Distance from `p` to the light. Directional lights are infinitely far.
    pub fn distance(&self, p: Vec3) -> f32 {
        match self.kind {
            LightKind::Directional { .. } => f32::INFINITY,
            LightKind::Positional { position } => position.distance(p),
        }
    }

    /// Ray from `p` toward the light.
    pub fn ray_toward(&self, p: Vec3) -> Ray {
        match self.kind {
            LightKind::Directional { direction } => Ray::new(p, direction),
            LightKind::Positional { position } => Ray::new(p, position - p),
        }
    }

    /// Incoming light at `p`. Positional lights fall off with the inverse
    /// square of `distance + 1`.
    pub fn radiance(&self, p: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Directional { .. } => self.color * self.intensity,
            LightKind::Positional { .. } => {
                let d = self.distance(p) + 1.0;
                self.color * (self.intensity / (d * d))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Lit,
    Occluded,
}

/// March from just above `position` toward `light`. Anything hit before the
/// light occludes it.
pub fn shadow_test(
    scene: &Scene,
    limits: &MarchLimits,
    position: Vec3,
    normal: Vec3,
    light: &Light,
    bias: f32,
) -> Visibility {
    let toward = light.ray_toward(position);
    let ray = Ray {
        origin: position + bias * normal,
        direction: toward.direction,
    };
    let hit = ray_march(scene, &ray, limits);
    if hit.is_hit() && hit.distance < light.distance(position) {
        Visibility::Occluded
    } else {
        Visibility::Lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;
    use lifeblocks_core::types::GridDimensions;

    #[test]
    fn test_pointer_light_position() {
        let light = Light::pointer(Vec2::new(0.5, -1.0), 2.0);
        match light.kind {
            LightKind::Positional { position } => {
                assert_eq!(position, Vec3::new(80.0, -80.0, -70.0));
            }
            other => panic!("expected positional light, got {:?}", other),
        }
        assert_eq!(light.intensity, 1024.0);
        assert_eq!(light.color, Vec3::ONE);

        let portrait = Light::pointer(Vec2::new(1.0, 1.0), 0.5);
        assert_eq!(
            portrait.kind,
            LightKind::Positional {
                position: Vec3::new(80.0, 160.0, -70.0)
            }
        );
    }

    #[test]
    fn test_radiance_falloff() {
        let light = Light::pointer(Vec2::ZERO, 1.0);
        // 9 units below the light: 1024 / (9 + 1)^2.
        let r = light.radiance(Vec3::new(0.0, 0.0, -61.0));
        assert!((r - Vec3::splat(10.24)).abs().max_element() < 1e-4);
        // At the light itself the +1 keeps radiance finite.
        assert_eq!(light.radiance(Vec3::new(0.0, 0.0, -70.0)), Vec3::splat(1024.0));
    }

    #[test]
    fn test_light_ray_points_at_light() {
        let light = Light::pointer(Vec2::ZERO, 1.0);
        let ray = light.ray_toward(Vec3::new(0.0, 0.0, 0.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(light.distance(Vec3::ZERO), 70.0);
    }

    #[test]
    fn test_directional_light() {
        let light = Light::directional(Vec3::new(0.0, 0.0, -2.0), Vec3::ONE, 0.5);
        assert_eq!(light.distance(Vec3::ZERO), f32::INFINITY);
        assert_eq!(light.ray_toward(Vec3::ONE).direction, Vec3::NEG_Z);
        assert_eq!(light.radiance(Vec3::new(5.0, 5.0, 5.0)), Vec3::splat(0.5));
    }

    fn scene() -> Scene {
        let grid = GridDimensions::new(8, 8).expect("valid grid");
        Scene::new(GridLayout::new(grid, 1.0), grid, 0.0)
    }

    #[test]
    fn test_block_occludes_ground_below_it() {
        let s = scene();
        let center = s.block_center(glam::IVec2::new(0, 0));
        // Light straight above the block, ground point straight below it.
        let light = Light::pointer(Vec2::new(center.x / 80.0, center.y / 80.0), 1.0);
        let ground = Vec3::new(center.x, center.y, 0.0);
        let vis = shadow_test(&s, &MarchLimits::default(), ground, Vec3::NEG_Z, &light, 0.06);
        assert_eq!(vis, Visibility::Occluded);
    }

    #[test]
    fn test_gutter_ground_is_lit() {
        let s = scene();
        let gutter_x = 0.5 * s.layout.spacing() - s.layout.block_size;
        let light = Light::pointer(Vec2::new(gutter_x / 80.0, 0.0), 1.0);
        let ground = Vec3::new(gutter_x, 0.0, 0.0);
        let vis = shadow_test(&s, &MarchLimits::default(), ground, Vec3::NEG_Z, &light, 0.06);
        assert_eq!(vis, Visibility::Lit);
    }
}
