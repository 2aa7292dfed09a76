use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Cook-Torrance material parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PbrMaterial {
    /// Linear RGB base color.
    pub color: Vec3,
    pub metallic: f32,
    pub roughness: f32,
    /// Scales the dielectric base reflectance; also weights reflection bounces.
    pub reflectance: f32,
    /// Emission intensity. Emissive surfaces end the bounce loop.
    pub emissive: f32,
    pub ambient_occlusion: f32,
}

impl PbrMaterial {
    /// Canonical ground plane material.
    pub const GROUND: Self = Self {
        color: Vec3::splat(0.95),
        metallic: 0.0,
        roughness: 0.2,
        reflectance: 0.1,
        emissive: 0.2,
        ambient_occlusion: 0.3,
    };

    /// Canonical dead (inactive) block material.
    pub const BLOCK_INACTIVE: Self = Self {
        color: Vec3::splat(0.05),
        metallic: 1.0,
        roughness: 0.1,
        reflectance: 0.9,
        emissive: 0.0,
        ambient_occlusion: 0.3,
    };

    /// Canonical alive block material. The color is replaced every frame by
    /// the hue wheel; this one is only the static fallback.
    pub const BLOCK_ACTIVE: Self = Self {
        color: Vec3::new(255.0 / 255.0, 105.0 / 255.0, 180.0 / 255.0),
        metallic: 0.0,
        roughness: 0.9,
        reflectance: 0.9,
        emissive: 9.0,
        ambient_occlusion: 0.3,
    };

    /// Per-field linear blend. `t` is clamped to [0, 1], so the result always
    /// lies between the two endpoints.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            color: self.color * (1.0 - t) + other.color * t,
            metallic: mix(self.metallic, other.metallic),
            roughness: mix(self.roughness, other.roughness),
            reflectance: mix(self.reflectance, other.reflectance),
            emissive: mix(self.emissive, other.emissive),
            ambient_occlusion: mix(self.ambient_occlusion, other.ambient_occlusion),
        }
    }

    /// Same material with a different base color.
    pub fn with_color(&self, color: Vec3) -> Self {
        Self { color, ..*self }
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive > 0.0
    }
}

/// Which canonical slot a material definition fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialRole {
    Ground,
    BlockInactive,
    BlockActive,
}

impl MaterialRole {
    pub const ALL: [MaterialRole; 3] = [Self::Ground, Self::BlockInactive, Self::BlockActive];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::BlockInactive => "BlockInactive",
            Self::BlockActive => "BlockActive",
        }
    }
}

/// A single material definition loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Human-readable name for logs.
    pub name: String,
    /// Canonical slot this definition fills.
    pub role: MaterialRole,
    /// RGB color (0.0–1.0 per channel).
    pub color: (f32, f32, f32),
    #[serde(default)]
    pub metallic: f32,
    pub roughness: f32,
    pub reflectance: f32,
    /// Emission intensity (0.0 = none).
    #[serde(default)]
    pub emission: f32,
    pub ambient_occlusion: f32,
}

impl MaterialDef {
    pub fn to_material(&self) -> PbrMaterial {
        PbrMaterial {
            color: Vec3::new(self.color.0, self.color.1, self.color.2),
            metallic: self.metallic,
            roughness: self.roughness,
            reflectance: self.reflectance,
            emissive: self.emission,
            ambient_occlusion: self.ambient_occlusion,
        }
    }
}

/// Collection of material definitions.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    pub materials: Vec<MaterialDef>,
}

impl MaterialTable {
    /// Look up the definition for a role. Returns the first match.
    pub fn get(&self, role: MaterialRole) -> Option<&MaterialDef> {
        self.materials.iter().find(|m| m.role == role)
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// The three canonical materials every frame blends between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub ground: PbrMaterial,
    pub inactive: PbrMaterial,
    pub active: PbrMaterial,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: PbrMaterial::GROUND,
            inactive: PbrMaterial::BLOCK_INACTIVE,
            active: PbrMaterial::BLOCK_ACTIVE,
        }
    }
}

impl Palette {
    /// Build a palette from a table. Every role must be present.
    pub fn from_table(table: &MaterialTable) -> Result<Self, CoreError> {
        let lookup = |role: MaterialRole| {
            table
                .get(role)
                .map(MaterialDef::to_material)
                .ok_or(CoreError::MissingMaterial(role.name()))
        };
        Ok(Self {
            ground: lookup(MaterialRole::Ground)?,
            inactive: lookup(MaterialRole::BlockInactive)?,
            active: lookup(MaterialRole::BlockActive)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(role: MaterialRole) -> MaterialDef {
        MaterialDef {
            name: role.name().into(),
            role,
            color: (0.5, 0.25, 0.125),
            metallic: 0.0,
            roughness: 0.5,
            reflectance: 0.5,
            emission: 0.0,
            ambient_occlusion: 0.3,
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = PbrMaterial::BLOCK_INACTIVE;
        let b = PbrMaterial::BLOCK_ACTIVE;
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_clamps_out_of_range() {
        let a = PbrMaterial::BLOCK_INACTIVE;
        let b = PbrMaterial::BLOCK_ACTIVE;
        assert_eq!(a.lerp(&b, -3.0), a);
        assert_eq!(a.lerp(&b, 7.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = PbrMaterial::BLOCK_INACTIVE.lerp(&PbrMaterial::BLOCK_ACTIVE, 0.5);
        assert!((mid.metallic - 0.5).abs() < 1e-6);
        assert!((mid.roughness - 0.5).abs() < 1e-6);
        assert!((mid.emissive - 4.5).abs() < 1e-6);
        assert!((mid.reflectance - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_emissive() {
        assert!(PbrMaterial::GROUND.is_emissive());
        assert!(!PbrMaterial::BLOCK_INACTIVE.is_emissive());
        assert!(PbrMaterial::BLOCK_ACTIVE.is_emissive());
    }

    #[test]
    fn test_palette_from_table() {
        let table = MaterialTable {
            materials: MaterialRole::ALL.iter().map(|&r| def(r)).collect(),
        };
        let palette = Palette::from_table(&table).expect("complete table");
        assert_eq!(palette.ground.color, Vec3::new(0.5, 0.25, 0.125));
    }

    #[test]
    fn test_palette_missing_role() {
        let table = MaterialTable {
            materials: vec![def(MaterialRole::Ground), def(MaterialRole::BlockActive)],
        };
        assert_eq!(
            Palette::from_table(&table),
            Err(CoreError::MissingMaterial("BlockInactive"))
        );
    }
}
