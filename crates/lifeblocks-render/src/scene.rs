//! Distance field of the ground plane and the block lattice.

use glam::{IVec2, Vec2, Vec3, Vec3Swizzles};
use lifeblocks_core::constants::{BOB_AMPLITUDE_RATIO, BOB_TIME_SCALE, GROUND_PLANE_Z};
use lifeblocks_core::types::GridDimensions;

use crate::layout::GridLayout;
use crate::sdf::sd_round_box;

/// Lattice offsets evaluated around the rounded lattice cell.
const NEIGHBOURHOOD: [IVec2; 7] = [
    IVec2::new(0, 0),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(-1, -1),
    IVec2::new(1, 1),
];

/// What a distance query (or a march) found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Nothing within range. Only produced by the marcher.
    None,
    Ground,
    Block,
}

/// Result of a nearest-surface query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Signed distance to the surface, or the marched distance once a ray hit it.
    pub distance: f32,
    pub kind: ObjectKind,
    /// Linear cell index for blocks.
    pub cell: Option<usize>,
    /// Block center for blocks, the foot point on the plane for ground.
    pub location: Vec3,
}

impl SceneObject {
    pub fn miss(max_distance: f32) -> Self {
        Self {
            distance: max_distance,
            kind: ObjectKind::None,
            cell: None,
            location: Vec3::ZERO,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.kind != ObjectKind::None
    }
}

/// Read-only scene geometry for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub layout: GridLayout,
    pub grid: GridDimensions,
    pub time_ms: f32,
}

impl Scene {
    pub fn new(layout: GridLayout, grid: GridDimensions, time_ms: f32) -> Self {
        Self {
            layout,
            grid,
            time_ms,
        }
    }

    pub fn ground_distance(&self, p: Vec3) -> SceneObject {
        SceneObject {
            distance: (p.z - GROUND_PLANE_Z).abs(),
            kind: ObjectKind::Ground,
            cell: None,
            location: Vec3::new(p.x, p.y, GROUND_PLANE_Z),
        }
    }

    /// Center of the block at lattice coordinate `id` (already clamped).
    pub fn block_center(&self, id: IVec2) -> Vec3 {
        let b = self.layout.block_size;
        let mut center = self.layout.spacing() * id.as_vec2().extend(0.0) - Vec3::splat(b);
        let phase = (id.as_vec2() - Vec2::splat(0.5)).length() + self.time_ms * BOB_TIME_SCALE;
        center.z += BOB_AMPLITUDE_RATIO * b * phase.sin();
        center
    }

    /// Nearest block to `p`, searching the lattice cell under `p` and its
    /// neighbours. Ties keep the earlier candidate.
    pub fn block_field(&self, p: Vec3) -> SceneObject {
        let spacing = self.layout.spacing();
        let base = (p.xy() / spacing).round().as_ivec2();
        let mut best = SceneObject {
            distance: f32::MAX,
            kind: ObjectKind::Block,
            cell: None,
            location: Vec3::ZERO,
        };
        for offset in NEIGHBOURHOOD {
            let id = self.grid.clamp_lattice(base + offset);
            let center = self.block_center(id);
            let d = sd_round_box(p - center, self.layout.block_size, self.layout.rounding);
            if d < best.distance {
                best.distance = d;
                best.cell = Some(self.grid.cell_index(id));
                best.location = center;
            }
        }
        best
    }

    /// The block wins only when strictly closer than the ground.
    pub fn nearest_object(&self, p: Vec3) -> SceneObject {
        let block = self.block_field(p);
        let ground = self.ground_distance(p);
        if block.distance < ground.distance {
            block
        } else {
            ground
        }
    }
}
