//! Per-frame material selection for hit surfaces.

use glam::Vec3;
use lifeblocks_core::cells::CellBuffer;
use lifeblocks_core::constants::{ALIVE_SATURATION, ALIVE_VALUE, FADE_HUE_DELTA, GROWING_SPLIT};
use lifeblocks_core::material::{Palette, PbrMaterial};
use lifeblocks_core::math::{fract, hsv_to_rgb, hue_from_phase, mix};
use lifeblocks_core::types::LifecycleValue;

use crate::scene::{ObjectKind, SceneObject};

/// Materials for one frame. The alive and fade colors depend only on the
/// color phase, so they are computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialResolver {
    pub ground: PbrMaterial,
    pub dead: PbrMaterial,
    pub alive: PbrMaterial,
    /// Alive material with its hue pushed forward; the midpoint of growth.
    pub fade: PbrMaterial,
    /// Growth/death progress, clamped to [0, 1].
    pub blend: f32,
}

impl MaterialResolver {
    pub fn new(palette: &Palette, color_phase: f32, blend: f32) -> Self {
        let hue = hue_from_phase(color_phase);
        let alive_color = hsv_to_rgb(Vec3::new(hue, ALIVE_SATURATION, ALIVE_VALUE));
        let fade_color = hsv_to_rgb(Vec3::new(
            fract(hue + FADE_HUE_DELTA),
            ALIVE_SATURATION,
            ALIVE_VALUE,
        ));
        Self {
            ground: palette.ground,
            dead: palette.inactive,
            alive: palette.active.with_color(alive_color),
            fade: palette.active.with_color(fade_color),
            blend: blend.clamp(0.0, 1.0),
        }
    }

    /// Material for a block in the given lifecycle state.
    ///
    /// Growing blocks move dead -> fade until the blend reaches the split,
    /// then jump onto the fade -> alive segment. The two segments do not meet
    /// at the split, so growth visibly snaps there.
    pub fn block_material(&self, value: LifecycleValue) -> PbrMaterial {
        match value {
            LifecycleValue::Alive => self.alive,
            LifecycleValue::Dead => self.dead,
            LifecycleValue::Growing => {
                if self.blend < GROWING_SPLIT {
                    self.dead.lerp(&self.fade, mix(0.0, 0.5, self.blend))
                } else {
                    self.fade.lerp(&self.alive, mix(0.5, 1.0, self.blend))
                }
            }
            LifecycleValue::Dying { .. } => self.alive.lerp(&self.dead, self.blend),
        }
    }

    /// Material for whatever `object` is. Blocks read their state from `cells`.
    pub fn resolve(&self, object: &SceneObject, cells: &CellBuffer) -> PbrMaterial {
        match (object.kind, object.cell) {
            (ObjectKind::Block, Some(index)) => self.block_material(cells.get(index)),
            _ => self.ground,
        }
    }
}
