use glam::Vec3;
use lifeblocks_core::constants::{FACE_OFFSET, GRADIENT_EPSILON};

use crate::layout::GridLayout;
use crate::scene::{ObjectKind, SceneObject};
use crate::sdf::{central_difference, sd_round_box};

/// Outward plane normal (the camera sits on the -z side).
pub const GROUND_NORMAL: Vec3 = Vec3::NEG_Z;

/// Unit surface normal at `p` on `object`.
///
/// Points on a flat block face snap to the face's axis. Rounded edges and
/// corners use the numerical gradient of the block's distance function.
pub fn estimate_normal(layout: &GridLayout, object: &SceneObject, p: Vec3) -> Vec3 {
    if object.kind != ObjectKind::Block {
        return GROUND_NORMAL;
    }
    let b = layout.block_size;
    let loc = object.location;
    let margin = layout.face_margin();
    let near = (loc - p).abs().cmplt(Vec3::splat(margin));
    let x_test = near.y && near.z;
    let y_test = near.x && near.z;
    let z_test = near.x && near.y;

    if z_test && loc.z - b > p.z - FACE_OFFSET {
        Vec3::NEG_Z
    } else if z_test && loc.z + b <= p.z + FACE_OFFSET {
        Vec3::Z
    } else if y_test && loc.y - b > p.y - FACE_OFFSET {
        Vec3::NEG_Y
    } else if y_test && loc.y + b <= p.y + FACE_OFFSET {
        Vec3::Y
    } else if x_test && loc.x - b > p.x - FACE_OFFSET {
        Vec3::NEG_X
    } else if x_test && loc.x + b <= p.x + FACE_OFFSET {
        Vec3::X
    } else {
        let sdf = |q: Vec3| sd_round_box(q - loc, b, layout.rounding);
        central_difference(sdf, p, GRADIENT_EPSILON).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeblocks_core::types::GridDimensions;

    fn layout() -> GridLayout {
        GridLayout::new(GridDimensions::new(8, 8).expect("valid grid"), 1.0)
    }

    fn block_at(location: Vec3) -> SceneObject {
        SceneObject {
            distance: 0.0,
            kind: ObjectKind::Block,
            cell: Some(0),
            location,
        }
    }

    #[test]
    fn test_ground_normal() {
        let ground = SceneObject {
            distance: 0.0,
            kind: ObjectKind::Ground,
            cell: None,
            location: Vec3::ZERO,
        };
        assert_eq!(estimate_normal(&layout(), &ground, Vec3::new(3.0, 1.0, 0.0)), Vec3::NEG_Z);
    }

    #[test]
    fn test_flat_faces() {
        let l = layout();
        let b = l.block_size;
        let c = Vec3::new(1.0, 2.0, -3.0);
        let obj = block_at(c);
        let cases = [
            (c + Vec3::new(0.0, 0.0, -b), Vec3::NEG_Z),
            (c + Vec3::new(0.0, 0.0, b), Vec3::Z),
            (c + Vec3::new(0.0, -b, 0.0), Vec3::NEG_Y),
            (c + Vec3::new(0.0, b, 0.0), Vec3::Y),
            (c + Vec3::new(-b, 0.0, 0.0), Vec3::NEG_X),
            (c + Vec3::new(b, 0.0, 0.0), Vec3::X),
        ];
        for (p, expected) in cases {
            assert_eq!(estimate_normal(&l, &obj, p), expected, "at {p}");
        }
    }

    #[test]
    fn test_rounded_corner_uses_gradient() {
        let l = layout();
        let b = l.block_size;
        let r = l.rounding;
        let c = Vec3::ZERO;
        // Surface point on the rounded +x/+y/+z corner along the diagonal.
        let corner_center = Vec3::splat(b - r);
        let p = corner_center + Vec3::splat(r / 3f32.sqrt());
        let n = estimate_normal(&l, &block_at(c), p);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!((n - Vec3::ONE.normalize()).length() < 1e-3, "got {n}");
    }

    #[test]
    fn test_side_edge_gradient_is_diagonal() {
        let l = layout();
        let b = l.block_size;
        let r = l.rounding;
        // Rounded vertical edge between +x and -y, at mid height.
        let edge = Vec3::new(b - r, -(b - r), 0.0);
        let p = edge + Vec3::new(1.0, -1.0, 0.0).normalize() * r;
        let n = estimate_normal(&l, &block_at(Vec3::ZERO), p);
        let expected = Vec3::new(1.0, -1.0, 0.0).normalize();
        assert!((n - expected).length() < 1e-2, "got {n}");
    }
}
