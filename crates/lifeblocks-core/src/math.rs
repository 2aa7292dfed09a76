use glam::{Vec3, Vec4};

/// Return `n` bits of `value` starting at bit `offset`.
/// Bits past the top of the word read as zero.
pub fn extract_bits(value: u32, offset: u32, n: u32) -> u32 {
    if offset >= u32::BITS {
        return 0;
    }
    let shifted = value >> offset;
    if n >= u32::BITS {
        return shifted;
    }
    shifted & ((1u32 << n) - 1)
}

/// Linear interpolation between two scalars.
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fractional part, always in [0, 1).
pub fn fract(v: f32) -> f32 {
    v - v.floor()
}

/// Convert HSV (all channels in [0, 1]) to linear RGB.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let k = Vec4::new(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    let h = Vec3::splat(hsv.x) + k.truncate();
    let p = (Vec3::new(fract(h.x), fract(h.y), fract(h.z)) * 6.0 - Vec3::splat(k.w)).abs();
    let chroma = (p - Vec3::ONE).clamp(Vec3::ZERO, Vec3::ONE);
    hsv.z * Vec3::ONE.lerp(chroma, hsv.y)
}

/// Convert linear RGB to HSV (all channels in [0, 1]).
pub fn rgb_to_hsv(c: Vec3) -> Vec3 {
    let max = c.max_element();
    let min = c.min_element();
    let d = max - min;
    let e = 1.0e-10;
    let hue = if d <= e {
        0.0
    } else if max == c.x {
        fract(((c.y - c.z) / d) / 6.0)
    } else if max == c.y {
        ((c.z - c.x) / d + 2.0) / 6.0
    } else {
        ((c.x - c.y) / d + 4.0) / 6.0
    };
    Vec3::new(hue, d / (max + e), max)
}

/// Hue in [0, 1] of a unit vector rotated by `phase` radians.
///
/// Phase 0 maps to 0.5; the hue wraps every 2π.
pub fn hue_from_phase(phase: f32) -> f32 {
    phase.sin().atan2(phase.cos()) / std::f32::consts::TAU + 0.5
}
