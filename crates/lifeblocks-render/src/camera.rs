use glam::{Vec2, Vec3};
use lifeblocks_core::constants::DEFAULT_RAY_ORIGIN_Z;

use crate::march::Ray;

pub const CAMERA_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, DEFAULT_RAY_ORIGIN_Z);

/// Fragment coordinate of a pixel center. Rows count down from the top,
/// fragment y counts up from the bottom.
pub fn pixel_center(col: u32, row: u32, height: u32) -> Vec2 {
    Vec2::new(col as f32 + 0.5, height as f32 - row as f32 - 0.5)
}

/// Perspective ray through fragment `frag`. The shorter screen axis spans
/// [-1, 1] at unit distance in front of the camera; +z points into the screen.
pub fn primary_ray(frag: Vec2, resolution: Vec2) -> Ray {
    let st = (frag * 2.0 - resolution) / resolution.y;
    Ray::new(CAMERA_ORIGIN, st.extend(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_into_screen() {
        let res = Vec2::new(640.0, 480.0);
        let ray = primary_ray(res * 0.5, res);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, -80.0));
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_top_edge_is_45_degrees() {
        let res = Vec2::new(640.0, 480.0);
        let ray = primary_ray(Vec2::new(320.0, 480.0), res);
        assert!((ray.direction - Vec3::new(0.0, 1.0, 1.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_pixel_center_flips_rows() {
        assert_eq!(pixel_center(0, 0, 4), Vec2::new(0.5, 3.5));
        assert_eq!(pixel_center(3, 3, 4), Vec2::new(3.5, 0.5));
    }
}
