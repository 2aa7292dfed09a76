//! Cook-Torrance shading of a single surface point.

use std::f32::consts::PI;

use glam::Vec3;
use lifeblocks_core::constants::{
    AMBIENT_FACTOR, DIELECTRIC_F0_SCALE, SHADOW_FACTOR, VISIBILITY_EPSILON,
};
use lifeblocks_core::material::PbrMaterial;

use crate::lighting::{shadow_test, Light, Visibility};
use crate::march::{MarchLimits, Ray};
use crate::scene::Scene;

/// A point where a ray struck the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub position: Vec3,
    pub normal: Vec3,
    pub material: PbrMaterial,
}

/// Outgoing radiance plus how strongly the surface reflects the next bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub radiance: Vec3,
    pub reflectance: f32,
}

/// GGX normal distribution.
pub fn d_ggx(roughness: f32, n_dot_h: f32) -> f32 {
    let a = n_dot_h * roughness;
    let k = roughness / (1.0 - n_dot_h * n_dot_h + a * a);
    k * k / PI
}

/// Fast approximation of the height-correlated Smith-GGX visibility term.
pub fn v_smith_ggx_correlated_fast(roughness: f32, l_dot_n: f32, v_dot_n: f32) -> f32 {
    let ggx_v = l_dot_n * (v_dot_n * (1.0 - roughness) + roughness);
    let ggx_l = v_dot_n * (l_dot_n * (1.0 - roughness) + roughness);
    0.5 / (ggx_v + ggx_l + VISIBILITY_EPSILON)
}

/// Schlick Fresnel.
pub fn f_schlick(v_dot_h: f32, f0: Vec3, f90: f32) -> Vec3 {
    f0 + (Vec3::splat(f90) - f0) * (1.0 - v_dot_h).powi(5)
}

/// Cook-Torrance response of `surface` to `light`, seen from `eye`.
pub fn cook_torrance(surface: &Surface, eye: Vec3, light: &Light) -> Shade {
    let m = &surface.material;
    let f0 = Vec3::splat(DIELECTRIC_F0_SCALE * m.reflectance * m.reflectance)
        .lerp(m.color, m.metallic);
    let f90 = 1.0;

    let n = surface.normal;
    let v = (eye - surface.position).normalize_or_zero();
    let l = light.ray_toward(surface.position).direction;
    let h = (v + l).normalize_or_zero();

    let v_dot_n = v.dot(n).max(0.0);
    let l_dot_n = l.dot(n).max(0.0);
    let h_dot_n = h.dot(n).max(0.0);
    let v_dot_h = v.dot(h).max(0.0);

    let d = d_ggx(m.roughness, h_dot_n);
    let vis = v_smith_ggx_correlated_fast(m.roughness, l_dot_n, v_dot_n);
    let f = f_schlick(v_dot_h, f0, f90);
    let specular = d * vis * f;

    let diffuse = (1.0 - m.metallic) * m.color / PI;
    let ambient = AMBIENT_FACTOR * m.color * (1.0 - m.ambient_occlusion.clamp(0.0, 1.0));

    Shade {
        radiance: ambient + (specular + diffuse) * light.radiance(surface.position) * l_dot_n,
        reflectance: f.length(),
    }
}

/// Light an emissive surface throws at `point`.
pub fn emissive_radiance(surface: &Surface, point: Vec3) -> Vec3 {
    let d = surface.position.distance(point) + 1.0;
    surface.material.color * (surface.material.emissive / (d * d))
}

/// Sum the contribution of every light at `surface`, testing each for
/// occlusion first.
///
/// Occluded lights leave only a dim self-shadow term, and nothing at all on
/// emissive surfaces. The returned reflectance sums the Fresnel magnitude of
/// the unoccluded lights, or keeps the material's own reflectance if every
/// light is blocked.
pub fn direct_illumination(
    scene: &Scene,
    limits: &MarchLimits,
    surface: &Surface,
    ray: &Ray,
    lights: &[Light],
    shadow_bias: f32,
) -> Shade {
    let mut radiance = Vec3::ZERO;
    let mut reflectance = 0.0;
    let mut lit = false;
    for light in lights {
        let visibility = shadow_test(
            scene,
            limits,
            surface.position,
            surface.normal,
            light,
            shadow_bias,
        );
        match visibility {
            Visibility::Occluded => {
                if !surface.material.is_emissive() {
                    let m = &surface.material;
                    radiance += SHADOW_FACTOR * m.color * m.ambient_occlusion.clamp(0.0, 1.0);
                }
            }
            Visibility::Lit => {
                let shade = cook_torrance(surface, ray.origin, light);
                radiance += shade.radiance;
                reflectance += shade.reflectance;
                lit = true;
            }
        }
    }
    if !lit {
        reflectance = surface.material.reflectance;
    }
    Shade {
        radiance,
        reflectance,
    }
}
