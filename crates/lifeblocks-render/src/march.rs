use glam::Vec3;
use lifeblocks_core::settings::RenderSettings;

use crate::scene::{Scene, SceneObject};

/// A ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Termination bounds for sphere tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchLimits {
    pub max_steps: u32,
    pub accuracy: f32,
    pub max_distance: f32,
}

impl From<&RenderSettings> for MarchLimits {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_steps: settings.max_steps,
            accuracy: settings.march_accuracy,
            max_distance: settings.max_distance(),
        }
    }
}

impl Default for MarchLimits {
    fn default() -> Self {
        Self::from(&RenderSettings::default())
    }
}

/// Sphere-trace `ray` through `scene`.
///
/// A hit reports the marched distance along the ray in place of the surface
/// distance. Running past `max_distance` or out of steps yields
/// [`SceneObject::miss`].
pub fn ray_march(scene: &Scene, ray: &Ray, limits: &MarchLimits) -> SceneObject {
    let mut t = 0.0;
    for _ in 0..limits.max_steps {
        let mut object = scene.nearest_object(ray.at(t));
        if object.distance <= limits.accuracy {
            object.distance = t;
            return object;
        }
        if t > limits.max_distance {
            return SceneObject::miss(limits.max_distance);
        }
        t += object.distance;
    }
    SceneObject::miss(limits.max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;
    use crate::scene::ObjectKind;
    use lifeblocks_core::constants::{DEFAULT_RAY_ORIGIN_Z, MAX_MARCH_DISTANCE, VIEW_SCALE};
    use lifeblocks_core::types::GridDimensions;

    fn scene() -> Scene {
        let grid = GridDimensions::new(16, 8).expect("valid grid");
        Scene::new(GridLayout::new(grid, 2.0), grid, 0.0)
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.direction, Vec3::Z);
        assert_eq!(ray.at(3.0), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_ray_straight_down_hits_ground_in_gutter() {
        let s = scene();
        // Aim at the gutter between lattice cells (0,0) and (1,0) so no block is in the way.
        let spacing = s.layout.spacing();
        let gutter_x = 0.5 * spacing - s.layout.block_size;
        let ray = Ray::new(Vec3::new(gutter_x, 0.0, DEFAULT_RAY_ORIGIN_Z), Vec3::Z);
        let hit = ray_march(&s, &ray, &MarchLimits::default());
        assert_eq!(hit.kind, ObjectKind::Ground);
        assert!((hit.distance - VIEW_SCALE).abs() < 2e-3, "got {}", hit.distance);
    }

    #[test]
    fn test_ray_at_block_center_hits_block_top() {
        let s = scene();
        let center = s.block_center(glam::IVec2::new(0, 0));
        let ray = Ray::new(Vec3::new(center.x, center.y, DEFAULT_RAY_ORIGIN_Z), Vec3::Z);
        let hit = ray_march(&s, &ray, &MarchLimits::default());
        assert_eq!(hit.kind, ObjectKind::Block);
        let expected = center.z - s.layout.block_size - DEFAULT_RAY_ORIGIN_Z;
        assert!((hit.distance - expected).abs() < 2e-3);
        assert_eq!(hit.location, center);
    }

    #[test]
    fn test_ray_away_from_scene_misses() {
        let s = scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, DEFAULT_RAY_ORIGIN_Z), -Vec3::Z);
        let hit = ray_march(&s, &ray, &MarchLimits::default());
        assert_eq!(hit.kind, ObjectKind::None);
        assert!(!hit.is_hit());
        assert_eq!(hit.distance, MAX_MARCH_DISTANCE);
    }

    #[test]
    fn test_step_budget_exhaustion_misses() {
        // One step is not enough to reach anything from the camera.
        let s = scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, DEFAULT_RAY_ORIGIN_Z), Vec3::Z);
        let limits = MarchLimits {
            max_steps: 1,
            ..MarchLimits::default()
        };
        let hit = ray_march(&s, &ray, &limits);
        assert_eq!(hit.kind, ObjectKind::None);
        assert_eq!(hit.distance, limits.max_distance);
    }
}
